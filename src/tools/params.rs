use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Deserialize, JsonSchema)]
pub struct AlertsParams {
    /// Two-letter US state or marine area code (e.g., "CA", "TX")
    pub region: String,
}

#[derive(Deserialize, JsonSchema)]
pub struct ForecastParams {
    /// Latitude of the location (-90 to 90)
    pub latitude: f64,
    /// Longitude of the location (-180 to 180)
    pub longitude: f64,
}

#[derive(Deserialize, JsonSchema)]
pub struct AnalyzeNewsParams {
    /// Query about climate policies or environmental initiatives
    pub query: String,
    /// Number of articles to analyze (clamped to 1-10, default: 5)
    pub num_results: Option<i64>,
    /// Only include articles published from January 1st of this year (default: 2020)
    pub start_year: Option<u16>,
    /// Append keyword sentiment and entity charts computed from the excerpts (default: false)
    pub advanced: Option<bool>,
}
