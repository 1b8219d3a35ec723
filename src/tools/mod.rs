mod errors;
mod params;

pub use params::{AlertsParams, AnalyzeNewsParams, ForecastParams};

use reqwest::Client;
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use tracing::{info, warn};

use errors::{exa_to_mcp_error, weather_to_mcp_error};

use crate::analytics;
use crate::exa::{ExaClient, ExaError, SearchProvider};
use crate::news::{query, report};
use crate::weather::{WeatherClient, format};

const DEFAULT_NUM_RESULTS: i64 = 5;
const DEFAULT_START_YEAR: u16 = 2020;
const MIN_START_YEAR: u16 = 1900;

/// MCP server handler providing weather and news analysis tools.
///
/// Configuration via environment variables:
/// - `EXA_API_KEY`: enables `analyze_news` (optional; the weather tools need no key)
#[derive(Clone)]
pub struct Newsdesk {
    exa: Option<ExaClient>,
    weather: WeatherClient,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl Newsdesk {
    pub fn new(http: Client) -> Self {
        let exa = ExaClient::from_env(http.clone())
            .inspect_err(|e| warn!("Exa client not available: {e}"))
            .ok();
        Self {
            exa,
            weather: WeatherClient::new(http),
            tool_router: Self::tool_router(),
        }
    }

    fn exa(&self) -> Result<&ExaClient, McpError> {
        self.exa
            .as_ref()
            .ok_or_else(|| exa_to_mcp_error(ExaError::ApiKeyNotSet))
    }

    #[tool(
        name = "get_alerts",
        description = "Get active weather alerts for a US state or area from the National Weather Service. Returns event, area, severity, description and instructions for each alert."
    )]
    async fn get_alerts(
        &self,
        Parameters(params): Parameters<AlertsParams>,
    ) -> Result<CallToolResult, McpError> {
        info!(region = %params.region, "tool:get_alerts");

        let features = self
            .weather
            .active_alerts(&params.region)
            .await
            .map_err(weather_to_mcp_error)?;

        let output = match features {
            Some(features) => {
                info!(alerts = features.len(), "get_alerts complete");
                format::format_alerts(&features)
            }
            None => "Unable to fetch alerts or no alerts found.".to_string(),
        };

        Ok(CallToolResult::success(vec![Content::text(output)]))
    }

    #[tool(
        name = "get_forecast",
        description = "Get the weather forecast for a US location from the National Weather Service. Returns the next five forecast periods with temperature, wind and a detailed description."
    )]
    async fn get_forecast(
        &self,
        Parameters(params): Parameters<ForecastParams>,
    ) -> Result<CallToolResult, McpError> {
        info!(
            latitude = params.latitude,
            longitude = params.longitude,
            "tool:get_forecast"
        );

        let periods = self
            .weather
            .forecast(params.latitude, params.longitude)
            .await
            .map_err(weather_to_mcp_error)?;

        let output = if periods.is_empty() {
            "No forecast periods available for this location.".to_string()
        } else {
            format::format_forecast(&periods)
        };

        info!(periods = periods.len(), "get_forecast complete");
        Ok(CallToolResult::success(vec![Content::text(output)]))
    }

    #[tool(
        name = "analyze_news",
        description = "Analyze recent news articles about climate policies. Searches news published since the start year and returns each article's source, excerpt and a structured policy analysis (country, policy name, year, goals, key measures). Set advanced=true to append keyword sentiment and country/policy frequency charts."
    )]
    async fn analyze_news(
        &self,
        Parameters(params): Parameters<AnalyzeNewsParams>,
    ) -> Result<CallToolResult, McpError> {
        if params.query.trim().is_empty() {
            return Err(McpError::invalid_params("query must not be empty", None));
        }

        let start_year = params.start_year.unwrap_or(DEFAULT_START_YEAR);
        if !(MIN_START_YEAR..=9999).contains(&start_year) {
            return Err(McpError::invalid_params(
                format!("start_year must be between {MIN_START_YEAR} and 9999"),
                None,
            ));
        }
        let num_results = params.num_results.unwrap_or(DEFAULT_NUM_RESULTS);
        let advanced = params.advanced.unwrap_or(false);

        info!(query = %params.query, num_results, start_year, advanced, "tool:analyze_news");

        let exa = self.exa()?;
        let request = query::policy_request(&params.query, num_results, start_year);
        let results = exa.search(&request).await.map_err(exa_to_mcp_error)?;

        if results.is_empty() {
            return Ok(CallToolResult::success(vec![Content::text(format!(
                "No news articles found for: '{}'.",
                params.query
            ))]));
        }

        let mut output = report::format_policy_report(&results);

        if advanced {
            let stats = analytics::analyze(results.iter().filter_map(|r| r.text.as_deref()));
            output.push_str("\n\n");
            output.push_str(&analytics::render_section(&stats));
        }

        info!(articles = results.len(), "analyze_news complete");
        Ok(CallToolResult::success(vec![Content::text(output)]))
    }
}

#[tool_handler]
impl ServerHandler for Newsdesk {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "newsdesk".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            instructions: Some(
                "newsdesk provides US weather alerts and forecasts (get_alerts, get_forecast) from the National Weather Service, and climate-policy news analysis (analyze_news) via Exa search."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
