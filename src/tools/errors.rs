use rmcp::ErrorData as McpError;

use crate::exa::ExaError;
use crate::weather::WeatherError;

pub(super) fn retriable_error(e: &impl std::fmt::Display) -> McpError {
    McpError::internal_error(format!("{e} (retriable)"), None)
}

pub(super) fn exa_to_mcp_error(e: ExaError) -> McpError {
    match &e {
        ExaError::ApiKeyNotSet => McpError::invalid_params(e.to_string(), None),
        ExaError::RateLimited | ExaError::Api { code: 500..=599, .. } => retriable_error(&e),
        ExaError::Unauthorized(_) => McpError::internal_error(
            format!("{e}; check the EXA_API_KEY environment variable"),
            None,
        ),
        _ => McpError::internal_error(e.to_string(), None),
    }
}

pub(super) fn weather_to_mcp_error(e: WeatherError) -> McpError {
    match &e {
        WeatherError::InvalidRegion(_) | WeatherError::InvalidCoordinates { .. } => {
            McpError::invalid_params(e.to_string(), None)
        }
        WeatherError::Status(429 | 500..=599) => retriable_error(&e),
        _ => McpError::internal_error(e.to_string(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exa_missing_key_is_invalid_params() {
        let err = exa_to_mcp_error(ExaError::ApiKeyNotSet);
        assert!(err.message.contains("EXA_API_KEY"));
        assert_eq!(err.code, rmcp::model::ErrorCode(-32602));
    }

    #[test]
    fn exa_rate_limit_and_5xx_are_retriable() {
        assert!(exa_to_mcp_error(ExaError::RateLimited).message.contains("retriable"));
        let err = exa_to_mcp_error(ExaError::Api {
            code: 502,
            message: "bad gateway".into(),
        });
        assert!(err.message.contains("retriable"));
    }

    #[test]
    fn exa_unauthorized_hints_key() {
        let err = exa_to_mcp_error(ExaError::Unauthorized("denied".into()));
        assert!(err.message.contains("EXA_API_KEY"));
        assert_eq!(err.code, rmcp::model::ErrorCode(-32603));
    }

    #[test]
    fn weather_validation_is_invalid_params() {
        let err = weather_to_mcp_error(WeatherError::InvalidRegion("XYZ".into()));
        assert_eq!(err.code, rmcp::model::ErrorCode(-32602));
        let err = weather_to_mcp_error(WeatherError::InvalidCoordinates {
            latitude: 100.0,
            longitude: 0.0,
        });
        assert_eq!(err.code, rmcp::model::ErrorCode(-32602));
    }

    #[test]
    fn weather_upstream_errors_are_internal() {
        let err = weather_to_mcp_error(WeatherError::Status(503));
        assert!(err.message.contains("retriable"));
        let err = weather_to_mcp_error(WeatherError::Status(404));
        assert!(!err.message.contains("retriable"));
        assert_eq!(err.code, rmcp::model::ErrorCode(-32603));
    }
}
