use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    Neural,
    Auto,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub query: String,
    pub num_results: u32,
    #[serde(rename = "type")]
    pub search_type: SearchType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_published_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contents: Option<ContentsOptions>,
}

#[derive(Debug, Serialize)]
pub struct ContentsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<SummaryOptions>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextOptions {
    pub max_characters: u32,
}

#[derive(Debug, Serialize)]
pub struct SummaryOptions {
    pub query: String,
    pub schema: serde_json::Value,
}

#[derive(Debug, Serialize)]
pub struct ContentsRequest<'a> {
    pub ids: &'a [&'a str],
    pub text: bool,
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

/// One ranked hit as returned by `/search`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(default)]
    pub id: String,
    pub url: Option<String>,
    pub title: Option<String>,
    pub published_date: Option<String>,
    pub text: Option<String>,
    pub highlights: Option<Vec<String>>,
    /// Provider-side summary; a JSON document when a schema was requested.
    pub summary: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ContentsResponse {
    #[serde(default)]
    pub results: Vec<ContentsItem>,
}

#[derive(Debug, Deserialize)]
pub struct ContentsItem {
    #[serde(default)]
    pub id: String,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub error: Option<String>,
    pub message: Option<String>,
}

impl ApiError {
    pub fn into_message(self) -> Option<String> {
        self.error.or(self.message)
    }
}
