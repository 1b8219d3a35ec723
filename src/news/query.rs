//! Search requests issued by the two entry points.

use crate::exa::types::{ContentsOptions, SearchRequest, SearchType, SummaryOptions, TextOptions};

const TOPIC_RESULTS: u32 = 3;
pub const MIN_POLICY_RESULTS: u32 = 1;
pub const MAX_POLICY_RESULTS: u32 = 10;
const POLICY_EXCERPT_CHARS: u32 = 500;
const POLICY_SUMMARY_QUERY: &str = "What are the main policies implemented?";

/// Latest news about one topic in one region, as requested by the HTTP endpoint.
pub fn topic_request(topic: &str, region: &str) -> SearchRequest {
    SearchRequest {
        query: format!("latest news {} {}", topic.trim(), region.trim()),
        num_results: TOPIC_RESULTS,
        search_type: SearchType::Neural,
        category: None,
        start_published_date: None,
        contents: None,
    }
}

/// News search with inline excerpts and a structured policy summary per hit.
/// Any requested count, negative included, is clamped into the supported range.
pub fn policy_request(query: &str, num_results: i64, start_year: u16) -> SearchRequest {
    let num_results = num_results.clamp(
        i64::from(MIN_POLICY_RESULTS),
        i64::from(MAX_POLICY_RESULTS),
    ) as u32;
    SearchRequest {
        query: query.to_string(),
        num_results,
        search_type: SearchType::Auto,
        category: Some("news".to_string()),
        start_published_date: Some(format!("{start_year}-01-01T00:00:00.000Z")),
        contents: Some(ContentsOptions {
            text: Some(TextOptions {
                max_characters: POLICY_EXCERPT_CHARS,
            }),
            summary: Some(SummaryOptions {
                query: POLICY_SUMMARY_QUERY.to_string(),
                schema: policy_schema(),
            }),
        }),
    }
}

fn policy_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "country": {"type": "string"},
            "policy_name": {"type": "string"},
            "year": {"type": "integer"},
            "goals": {"type": "array", "items": {"type": "string"}},
            "key_measures": {"type": "array", "items": {"type": "string"}}
        }
    })
}
