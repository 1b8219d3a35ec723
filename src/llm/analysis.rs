//! Prompting the chat model for an article summary, sentiment label and outlet background,
//! and folding every failure into a well-formed [`ArticleAnalysis`].

use serde_json::Value;
use tracing::warn;

use super::client::{ChatModel, LlmError};
use crate::news::Sentiment;
use crate::text::truncate_chars;

/// Longest article excerpt sent to the model, in characters.
pub const MAX_ANALYSIS_CHARS: usize = 12_000;

const LLM_ERROR: &str = "N/A (LLM Error)";

#[derive(Debug, Clone, PartialEq)]
pub struct ArticleAnalysis {
    pub summary: String,
    pub sentiment: Sentiment,
    pub source_background: String,
    /// Set whenever the fields above are placeholders or raw model output.
    pub error: Option<String>,
}

impl ArticleAnalysis {
    fn llm_error(error: String) -> Self {
        Self {
            summary: LLM_ERROR.to_string(),
            sentiment: Sentiment::NotAvailable,
            source_background: LLM_ERROR.to_string(),
            error: Some(error),
        }
    }

    fn insufficient_data() -> Self {
        Self {
            summary: "N/A".to_string(),
            sentiment: Sentiment::NotAvailable,
            source_background: "Insufficient data for analysis".to_string(),
            error: Some("Insufficient data".to_string()),
        }
    }
}

pub fn build_prompt(text: Option<&str>, title: Option<&str>, source_domain: Option<&str>) -> String {
    let mut parts = vec!["Analyze the following news article and its source.".to_string()];
    if let Some(title) = title {
        parts.push(format!("\nArticle Title: \"{title}\""));
    }
    if let Some(domain) = source_domain {
        parts.push(format!("\nSource Domain: \"{domain}\""));
    }
    if let Some(text) = text.map(|t| truncate_chars(t, MAX_ANALYSIS_CHARS)).filter(|t| !t.is_empty()) {
        parts.push(format!("\nArticle Text:\n\"\"\"\n{text}\n\"\"\""));
    }
    let outlet = source_domain.unwrap_or("the source");
    parts.push(format!(
        "\n\nPlease provide the following information in a single, valid JSON object with these exact keys and string values:\n\
         1. \"summary\": A concise, neutral summary of the article (2-3 sentences). If article text is missing or insufficient, state that.\n\
         2. \"sentiment\": The overall sentiment of the article (ONLY 'positive', 'negative', or 'neutral'). If article text is missing or insufficient, state 'N/A'.\n\
         3. \"source_background\": A brief, neutral overview of the news organization '{outlet}' (2-3 sentences on its founding, general reputation, or leanings, if widely known). If no source domain provided, state that.\
         \n\nRespond ONLY with the JSON object."
    ));
    parts.join("\n")
}

/// Asks the model about one article. Never fails: errors become placeholder fields.
pub async fn analyze_article(
    model: &impl ChatModel,
    text: Option<&str>,
    title: Option<&str>,
    source_domain: Option<&str>,
) -> ArticleAnalysis {
    if text.is_none() && source_domain.is_none() {
        return ArticleAnalysis::insufficient_data();
    }

    let label = title.or(source_domain).unwrap_or("untitled");
    let prompt = build_prompt(text, title, source_domain);

    let outcome = model
        .complete_json(&prompt)
        .await
        .and_then(|raw| parse_reply(&raw));

    match outcome {
        Ok(analysis) => analysis,
        Err(LlmError::MalformedJson { raw }) => {
            warn!(article = label, "model reply is not a JSON object");
            ArticleAnalysis {
                summary: raw,
                ..ArticleAnalysis::llm_error("model returned malformed JSON".to_string())
            }
        }
        Err(e @ LlmError::EmptyCompletion { .. }) => {
            warn!(article = label, error = %e, "model produced no content");
            ArticleAnalysis::llm_error(format!("no content for '{label}': {e}"))
        }
        Err(e) => {
            warn!(article = label, error = %e, "LLM request failed");
            ArticleAnalysis::llm_error(format!("API error: {e}"))
        }
    }
}

fn parse_reply(raw: &str) -> Result<ArticleAnalysis, LlmError> {
    let malformed = || LlmError::MalformedJson {
        raw: raw.to_string(),
    };
    let value: Value = serde_json::from_str(raw).map_err(|_| malformed())?;
    let object = value.as_object().ok_or_else(malformed)?;

    let field = |key: &str, missing: &str| {
        object
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| missing.to_string())
    };

    let sentiment = object
        .get("sentiment")
        .and_then(Value::as_str)
        .map(Sentiment::from_label)
        .unwrap_or(Sentiment::NotAvailable);

    Ok(ArticleAnalysis {
        summary: field("summary", "Summary not in model reply."),
        sentiment,
        source_background: field("source_background", "Background not in model reply."),
        error: None,
    })
}
