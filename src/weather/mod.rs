//! National Weather Service API: active alerts by area and point forecasts.

pub mod format;
pub mod types;

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use types::{AlertCollection, AlertFeature, ForecastPeriod, ForecastResponse, PointResponse};

const API_BASE: &str = "https://api.weather.gov";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Invalid region '{0}': expected a two-letter state or area code (e.g. 'CA')")]
    InvalidRegion(String),

    #[error("Invalid coordinates ({latitude}, {longitude}): latitude must be within ±90 and longitude within ±180")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    #[error("Weather API returned status {0}")]
    Status(u16),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("No forecast available for this location")]
    MissingForecastUrl,

    #[error("Forecast URL points outside the weather API: {0}")]
    ForeignForecastUrl(String),
}

/// Upper-cases and checks a two-letter area code.
pub fn validate_region(region: &str) -> Result<String, WeatherError> {
    let code = region.trim().to_ascii_uppercase();
    if code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(code)
    } else {
        Err(WeatherError::InvalidRegion(region.to_string()))
    }
}

pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), WeatherError> {
    let valid = latitude.is_finite()
        && longitude.is_finite()
        && (-90.0..=90.0).contains(&latitude)
        && (-180.0..=180.0).contains(&longitude);
    if valid {
        Ok(())
    } else {
        Err(WeatherError::InvalidCoordinates {
            latitude,
            longitude,
        })
    }
}

#[derive(Clone)]
pub struct WeatherClient {
    http: Client,
    base_url: String,
}

impl WeatherClient {
    pub fn new(http: Client) -> Self {
        Self {
            http,
            base_url: API_BASE.to_string(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_base_url(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.to_string(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, WeatherError> {
        let response = self
            .http
            .get(url)
            .header("User-Agent", crate::USER_AGENT)
            .header("Accept", "application/geo+json")
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, url, "weather API error");
            return Err(WeatherError::Status(status.as_u16()));
        }
        Ok(response.json().await?)
    }

    /// Active alerts for a validated area code. `None` when the response has no feature list.
    pub async fn active_alerts(&self, region: &str) -> Result<Option<Vec<AlertFeature>>, WeatherError> {
        let region = validate_region(region)?;
        let url = format!("{}/alerts/active/area/{region}", self.base_url);
        let body: AlertCollection = self.get_json(&url).await?;
        debug!(region = %region, alerts = body.features.as_ref().map_or(0, Vec::len), "alerts fetched");
        Ok(body.features)
    }

    /// Forecast periods for a point, resolved through the `/points` lookup.
    pub async fn forecast(&self, latitude: f64, longitude: f64) -> Result<Vec<ForecastPeriod>, WeatherError> {
        validate_coordinates(latitude, longitude)?;
        let points_url = format!("{}/points/{latitude},{longitude}", self.base_url);
        let point: PointResponse = self.get_json(&points_url).await?;

        let forecast_url = point
            .properties
            .and_then(|p| p.forecast)
            .ok_or(WeatherError::MissingForecastUrl)?;
        self.ensure_same_origin(&forecast_url)?;

        let body: ForecastResponse = self.get_json(&forecast_url).await?;
        debug!(periods = body.properties.periods.len(), "forecast fetched");
        Ok(body.properties.periods)
    }

    /// The forecast URL comes from a response body; only follow it back to the same API.
    fn ensure_same_origin(&self, url: &str) -> Result<(), WeatherError> {
        let foreign = || WeatherError::ForeignForecastUrl(url.to_string());
        let target = Url::parse(url).map_err(|_| foreign())?;
        let base = Url::parse(&self.base_url).map_err(|_| foreign())?;
        if target.origin() == base.origin() {
            Ok(())
        } else {
            warn!(url, "refusing forecast URL on a different origin");
            Err(foreign())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_is_normalized() {
        assert_eq!(validate_region(" ca ").unwrap(), "CA");
        assert_eq!(validate_region("NY").unwrap(), "NY");
    }

    #[test]
    fn bad_regions_are_rejected() {
        for region in ["", "C", "CAL", "C1", "../x", "ñA"] {
            assert!(
                matches!(validate_region(region), Err(WeatherError::InvalidRegion(_))),
                "should reject {region:?}"
            );
        }
    }

    #[test]
    fn coordinates_are_range_checked() {
        assert!(validate_coordinates(39.7456, -97.0892).is_ok());
        assert!(validate_coordinates(90.0, 180.0).is_ok());
        assert!(validate_coordinates(91.0, 0.0).is_err());
        assert!(validate_coordinates(0.0, -180.5).is_err());
        assert!(validate_coordinates(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn foreign_origin_is_refused() {
        let client = WeatherClient::new(Client::new());
        assert!(client.ensure_same_origin("https://api.weather.gov/gridpoints/TOP/31,80/forecast").is_ok());
        assert!(matches!(
            client.ensure_same_origin("https://evil.example.com/forecast"),
            Err(WeatherError::ForeignForecastUrl(_))
        ));
        assert!(client.ensure_same_origin("not a url").is_err());
    }
}
