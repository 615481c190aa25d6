//! Provider payloads
//!
//! Shapes match the OpenWeatherMap JSON so responses deserialize directly.
//! Values are immutable snapshots; the state holds them as fetched.

use serde::Deserialize;

/// Number of hourly samples shown in the forecast chart.
pub const CHART_SAMPLE_LIMIT: usize = 24;

/// Geographic coordinate as returned by the provider.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

/// Temperature, humidity and pressure readings (metric units).
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub feels_like: f64,
    /// Relative humidity, 0-100 by provider contract.
    pub humidity: f64,
    /// Sea-level pressure in hPa.
    pub pressure: f64,
}

/// One weather condition descriptor ("light rain", icon "10d").
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Condition {
    pub description: String,
    pub icon: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Wind {
    /// Metres per second.
    pub speed: f64,
}

/// Current conditions for a named location.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CurrentConditions {
    pub name: String,
    #[serde(default)]
    pub coord: Option<Coordinate>,
    pub main: MainReadings,
    /// Ordered condition list; the client rejects an empty list.
    pub weather: Vec<Condition>,
    pub wind: Wind,
}

impl CurrentConditions {
    /// The condition shown in the panel (first in the list).
    pub fn primary_condition(&self) -> Option<&Condition> {
        self.weather.first()
    }
}

/// One hourly forecast sample.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct HourlySample {
    /// Unix timestamp, seconds.
    pub dt: i64,
    pub temp: f64,
    pub humidity: f64,
}

/// Hourly forecast, as many samples as the provider returned.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct HourlyForecast {
    #[serde(default)]
    pub hourly: Vec<HourlySample>,
}

impl HourlyForecast {
    /// Samples used by the chart: the first [`CHART_SAMPLE_LIMIT`] at most.
    pub fn chart_window(&self) -> &[HourlySample] {
        let end = self.hourly.len().min(CHART_SAMPLE_LIMIT);
        &self.hourly[..end]
    }
}
