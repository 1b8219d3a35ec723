//! Markdown report for the policy news tool.

use serde::{Deserialize, Deserializer};

use crate::exa::SearchResult;
use crate::text::single_line;

/// Structured summary the provider fills in from the requested schema.
/// Providers send `null` or strings where the schema asks for lists or integers.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PolicySummary {
    pub country: Option<String>,
    pub policy_name: Option<String>,
    #[serde(deserialize_with = "year_text")]
    pub year: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub goals: Vec<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub key_measures: Vec<String>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Year {
    Number(i64),
    Text(String),
}

fn year_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Year>::deserialize(deserializer)? {
        Some(Year::Number(year)) => Some(year.to_string()),
        Some(Year::Text(year)) => Some(year.trim().to_string()).filter(|y| !y.is_empty()),
        None => None,
    })
}

impl PolicySummary {
    fn is_empty(&self) -> bool {
        self.country.is_none()
            && self.policy_name.is_none()
            && self.year.is_none()
            && self.goals.is_empty()
            && self.key_measures.is_empty()
    }
}

pub fn format_policy_report(results: &[SearchResult]) -> String {
    results
        .iter()
        .enumerate()
        .map(|(i, item)| format_article(i + 1, item))
        .collect::<Vec<_>>()
        .join("\n\n---\n\n")
}

fn format_article(position: usize, item: &SearchResult) -> String {
    let title = item
        .title
        .as_deref()
        .map(single_line)
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| "Untitled".to_string());

    let mut out = format!("## Article {position}: {title}\n");
    out.push_str(&format!("Source: {}\n", item.url.as_deref().unwrap_or("N/A")));
    out.push_str(&format!(
        "Published: {}\n\n",
        item.published_date.as_deref().unwrap_or("Unknown")
    ));

    if let Some(text) = item.text.as_deref().filter(|t| !t.trim().is_empty()) {
        out.push_str(&format!("Excerpt: {}\n\n", text.trim()));
    }

    if let Some(raw) = item.summary.as_deref().filter(|s| !s.trim().is_empty()) {
        match serde_json::from_str::<PolicySummary>(raw) {
            Ok(summary) if !summary.is_empty() => push_policy_summary(&mut out, &summary),
            Ok(_) => {}
            Err(_) => out.push_str(&format!("Summary: {}\n", raw.trim())),
        }
    }

    out
}

fn push_policy_summary(out: &mut String, summary: &PolicySummary) {
    out.push_str("### Policy Analysis:\n");
    if let Some(country) = summary.country.as_deref().filter(|c| !c.is_empty()) {
        out.push_str(&format!("Country: {country}\n"));
    }
    if let Some(policy) = summary.policy_name.as_deref().filter(|p| !p.is_empty()) {
        out.push_str(&format!("Policy: {policy}\n"));
    }
    if let Some(year) = summary.year.as_deref() {
        out.push_str(&format!("Year: {year}\n"));
    }
    push_list(out, "Goals", &summary.goals);
    push_list(out, "Key Measures", &summary.key_measures);
}

fn push_list(out: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push_str(&format!("{heading}:\n"));
    for item in items {
        out.push_str(&format!("- {item}\n"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(summary: Option<&str>) -> SearchResult {
        SearchResult {
            id: "1".into(),
            url: Some("https://example.com/policy".into()),
            title: Some("EU adopts\nnew climate law".into()),
            published_date: Some("2023-04-01T00:00:00.000Z".into()),
            text: Some("The European Union approved...".into()),
            highlights: None,
            summary: summary.map(str::to_string),
        }
    }

    #[test]
    fn renders_structured_policy_summary() {
        let summary = r#"{"country":"Germany","policy_name":"Climate Protection Act","year":2021,
            "goals":["Net zero by 2045"],"key_measures":["Sector targets","Carbon pricing"]}"#;
        let text = format_policy_report(&[article(Some(summary))]);

        assert!(text.starts_with("## Article 1: EU adopts new climate law\n"));
        assert!(text.contains("Source: https://example.com/policy"));
        assert!(text.contains("Published: 2023-04-01T00:00:00.000Z"));
        assert!(text.contains("Excerpt: The European Union approved..."));
        assert!(text.contains("### Policy Analysis:"));
        assert!(text.contains("Country: Germany"));
        assert!(text.contains("Policy: Climate Protection Act"));
        assert!(text.contains("Year: 2021"));
        assert!(text.contains("Goals:\n- Net zero by 2045\n"));
        assert!(text.contains("Key Measures:\n- Sector targets\n- Carbon pricing\n"));
    }

    #[test]
    fn null_and_missing_fields_keep_the_analysis_block() {
        let summary = r#"{"country":"Germany","policy_name":null,"year":"2023",
            "goals":null,"key_measures":["Carbon pricing"]}"#;
        let text = format_policy_report(&[article(Some(summary))]);

        assert!(text.contains("### Policy Analysis:"), "got: {text}");
        assert!(text.contains("Country: Germany"));
        assert!(text.contains("Year: 2023"));
        assert!(text.contains("Key Measures:\n- Carbon pricing\n"));
        assert!(!text.contains("Goals:"));
        assert!(!text.contains("Policy:"));
        assert!(!text.contains("Summary:"));
    }

    #[test]
    fn plain_text_summary_is_shown_verbatim() {
        let text = format_policy_report(&[article(Some("A carbon tax was introduced."))]);
        assert!(text.contains("Summary: A carbon tax was introduced."));
        assert!(!text.contains("Policy Analysis"));
    }

    #[test]
    fn empty_structured_summary_is_omitted() {
        let text = format_policy_report(&[article(Some("{}"))]);
        assert!(!text.contains("Policy Analysis"));
        assert!(!text.contains("Summary:"));
    }

    #[test]
    fn articles_are_numbered_and_separated() {
        let text = format_policy_report(&[article(None), article(None)]);
        assert!(text.contains("## Article 1:"));
        assert!(text.contains("\n\n---\n\n## Article 2:"));
    }

    #[test]
    fn missing_metadata_uses_placeholders() {
        let item = SearchResult {
            id: "x".into(),
            ..Default::default()
        };
        let text = format_policy_report(&[item]);
        assert!(text.contains("## Article 1: Untitled"));
        assert!(text.contains("Source: N/A"));
        assert!(text.contains("Published: Unknown"));
        assert!(!text.contains("Excerpt:"));
    }
}
