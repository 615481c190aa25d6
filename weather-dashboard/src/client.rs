//! OpenWeatherMap client
//!
//! Two read-only requests, both in metric units:
//! - current conditions by city name (`/weather`)
//! - hourly forecast by coordinate (`/onecall`, other sections excluded)

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::model::{CurrentConditions, HourlyForecast};

/// Sections of the one-call response the dashboard never reads.
const HOURLY_EXCLUDE: &str = "current,minutely,daily,alerts";

/// Failures talking to the provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Connection failure, timeout, or body read failure
    #[error("Could not reach the weather service: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response
    #[error("Weather service returned {status}: {message}")]
    Status { status: StatusCode, message: String },

    /// Body did not match the expected shape
    #[error("Unexpected response from the weather service: {0}")]
    Decode(#[from] serde_json::Error),

    /// Current-conditions payload without any condition descriptor
    #[error("Unexpected response from the weather service: no weather conditions")]
    MissingConditions,
}

impl ProviderError {
    /// HTTP status for `Status` errors.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ProviderError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Error body the provider sends with non-2xx responses:
/// `{"cod":"404","message":"city not found"}`
#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: String,
}

#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    http: Client,
    config: ClientConfig,
}

impl OpenWeatherClient {
    /// Build a client with the configured per-request timeout.
    pub fn new(config: ClientConfig) -> Result<Self, ProviderError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    /// Current conditions for `city`.
    ///
    /// The caller guarantees a non-blank name.
    pub async fn fetch_current(&self, city: &str) -> Result<CurrentConditions, ProviderError> {
        let url = format!("{}/weather", self.config.base_url);
        debug!(city, "fetching current conditions");

        let current: CurrentConditions = self
            .get_json(
                &url,
                &[
                    ("q", city),
                    ("units", "metric"),
                    ("appid", self.config.api_key.as_str()),
                ],
            )
            .await?;

        if current.weather.is_empty() {
            warn!(city, "current conditions without weather descriptors");
            return Err(ProviderError::MissingConditions);
        }

        Ok(current)
    }

    /// Hourly forecast for a coordinate obtained from [`fetch_current`](Self::fetch_current).
    pub async fn fetch_hourly(&self, lat: f64, lon: f64) -> Result<HourlyForecast, ProviderError> {
        let url = format!("{}/onecall", self.config.base_url);
        debug!(lat, lon, "fetching hourly forecast");

        let lat = lat.to_string();
        let lon = lon.to_string();
        self.get_json(
            &url,
            &[
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
                ("exclude", HOURLY_EXCLUDE),
                ("units", "metric"),
                ("appid", self.config.api_key.as_str()),
            ],
        )
        .await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ProviderError> {
        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .inspect_err(|e| warn!(url, error = %e, "request failed"))?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = error_message(&body);
            warn!(url, %status, %message, "provider returned an error");
            return Err(ProviderError::Status { status, message });
        }

        serde_json::from_str(&body).map_err(|e| {
            warn!(url, error = %e, "failed to decode provider response");
            ProviderError::Decode(e)
        })
    }
}

/// Human-readable message from an error body: the provider's `message`
/// field when present, else the (truncated) raw body.
fn error_message(body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ProviderErrorBody>(body) {
        return parsed.message;
    }

    const MAX: usize = 200;
    let body = body.trim();
    if body.is_empty() {
        return "no details".to_string();
    }
    if body.chars().count() > MAX {
        let truncated: String = body.chars().take(MAX).collect();
        format!("{truncated}...")
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_provider_message() {
        let msg = error_message(r#"{"cod":"404","message":"city not found"}"#);
        assert_eq!(msg, "city not found");
    }

    #[test]
    fn test_error_message_falls_back_to_body() {
        assert_eq!(error_message("Bad Gateway"), "Bad Gateway");
        assert_eq!(error_message("   "), "no details");

        let long = "x".repeat(500);
        let msg = error_message(&long);
        assert_eq!(msg.len(), 203);
        assert!(msg.ends_with("..."));
    }

    #[test]
    fn test_status_display() {
        let err = ProviderError::Status {
            status: StatusCode::NOT_FOUND,
            message: "city not found".into(),
        };
        assert_eq!(
            err.to_string(),
            "Weather service returned 404 Not Found: city not found"
        );
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(ProviderError::MissingConditions.status(), None);
    }
}
