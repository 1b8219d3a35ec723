use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sentiment {
    #[serde(rename = "positive")]
    Positive,
    #[serde(rename = "negative")]
    Negative,
    #[serde(rename = "neutral")]
    Neutral,
    #[serde(rename = "N/A")]
    NotAvailable,
}

impl Sentiment {
    /// Lenient parse of a model-supplied label; anything unexpected is `NotAvailable`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "positive" => Sentiment::Positive,
            "negative" => Sentiment::Negative,
            "neutral" => Sentiment::Neutral,
            _ => Sentiment::NotAvailable,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
            Sentiment::NotAvailable => "N/A",
        }
    }
}

/// One search result after content retrieval and model analysis.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedArticle {
    pub headline: String,
    pub url: String,
    pub source_domain: String,
    pub full_text: Option<String>,
    pub summary: String,
    pub sentiment: Sentiment,
    pub source_background: String,
    #[serde(skip)]
    pub analysis_error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub status: Status,
    pub data: Option<Vec<EnrichedArticle>>,
    pub error_message: Option<String>,
}

impl AnalysisResponse {
    pub fn success(articles: Vec<EnrichedArticle>) -> Self {
        Self {
            status: Status::Success,
            data: Some(articles),
            error_message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            data: None,
            error_message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentiment_labels_parse_leniently() {
        assert_eq!(Sentiment::from_label("Positive"), Sentiment::Positive);
        assert_eq!(Sentiment::from_label(" negative "), Sentiment::Negative);
        assert_eq!(Sentiment::from_label("neutral"), Sentiment::Neutral);
        assert_eq!(Sentiment::from_label("mixed"), Sentiment::NotAvailable);
        assert_eq!(Sentiment::from_label("N/A"), Sentiment::NotAvailable);
    }

    #[test]
    fn response_serializes_wire_shape() {
        let article = EnrichedArticle {
            headline: "H".into(),
            url: "https://example.com".into(),
            source_domain: "example.com".into(),
            full_text: None,
            summary: "S".into(),
            sentiment: Sentiment::NotAvailable,
            source_background: "B".into(),
            analysis_error: Some("hidden".into()),
        };
        let json = serde_json::to_value(AnalysisResponse::success(vec![article])).unwrap();

        assert_eq!(json["status"], "success");
        assert_eq!(json["error_message"], serde_json::Value::Null);
        assert_eq!(json["data"][0]["sentiment"], "N/A");
        assert_eq!(json["data"][0]["full_text"], serde_json::Value::Null);
        assert!(json["data"][0].get("analysis_error").is_none());
    }

    #[test]
    fn error_response_has_no_data() {
        let json = serde_json::to_value(AnalysisResponse::error("boom")).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["data"], serde_json::Value::Null);
        assert_eq!(json["error_message"], "boom");
    }
}
