use super::types::{AlertFeature, ForecastPeriod};

const SEPARATOR: &str = "\n---\n";

/// Number of forecast periods shown.
pub const FORECAST_PERIODS: usize = 5;

pub fn format_alerts(features: &[AlertFeature]) -> String {
    if features.is_empty() {
        return "No active alerts for this state.".to_string();
    }
    features
        .iter()
        .map(format_alert)
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

fn format_alert(feature: &AlertFeature) -> String {
    let props = &feature.properties;
    let or = |value: &Option<String>, fallback: &str| {
        value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(fallback)
            .to_string()
    };
    format!(
        "Event: {}\nArea: {}\nSeverity: {}\nDescription: {}\nInstructions: {}",
        or(&props.event, "Unknown"),
        or(&props.area_desc, "Unknown"),
        or(&props.severity, "Unknown"),
        or(&props.description, "No description available"),
        or(&props.instruction, "No specific instructions provided"),
    )
}

pub fn format_forecast(periods: &[ForecastPeriod]) -> String {
    periods
        .iter()
        .take(FORECAST_PERIODS)
        .map(|p| {
            let temperature = p
                .temperature
                .map_or_else(|| "?".to_string(), |t| t.to_string());
            format!(
                "{}: Temperature: {temperature}°{} Wind: {} {} Forecast: {}",
                p.name, p.temperature_unit, p.wind_speed, p.wind_direction, p.detailed_forecast
            )
        })
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}
