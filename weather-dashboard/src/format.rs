//! Display formatting for readings and chart series

use chrono::{Local, TimeZone};

use crate::model::HourlyForecast;

pub fn temperature(celsius: f64) -> String {
    format!("{:.1}°C", celsius)
}

pub fn feels_like(celsius: f64) -> String {
    format!("Feels like: {}", temperature(celsius))
}

/// Shortest representation, as the provider sent it ("4.1", "3").
pub fn wind_speed(metres_per_second: f64) -> String {
    format!("{} m/s", metres_per_second)
}

pub fn humidity(percent: f64) -> String {
    format!("{}%", percent)
}

pub fn pressure(hpa: f64) -> String {
    format!("Pressure: {:.0} hPa", hpa)
}

/// Capitalize the first letter of every word: "light rain" -> "Light Rain".
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Local wall-clock `HH:mm` for a unix timestamp.
pub fn hour_label(unix_seconds: i64) -> String {
    match Local.timestamp_opt(unix_seconds, 0).single() {
        Some(time) => time.format("%H:%M").to_string(),
        None => "--:--".to_string(),
    }
}

/// Chart-ready view of the first 24 forecast samples.
///
/// Points are `(index, value)` so samples are evenly spaced on the x axis
/// regardless of gaps in the timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSeries {
    pub labels: Vec<String>,
    pub temperature: Vec<(f64, f64)>,
    pub humidity: Vec<(f64, f64)>,
}

impl ForecastSeries {
    pub fn from_forecast(forecast: &HourlyForecast) -> Self {
        let window = forecast.chart_window();
        Self {
            labels: window.iter().map(|s| hour_label(s.dt)).collect(),
            temperature: window
                .iter()
                .enumerate()
                .map(|(i, s)| (i as f64, s.temp))
                .collect(),
            humidity: window
                .iter()
                .enumerate()
                .map(|(i, s)| (i as f64, s.humidity))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn x_bounds(&self) -> [f64; 2] {
        [0.0, self.len().saturating_sub(1).max(1) as f64]
    }

    /// Shared value axis for both series, not anchored at zero.
    pub fn y_bounds(&self) -> [f64; 2] {
        let values = self
            .temperature
            .iter()
            .chain(self.humidity.iter())
            .map(|&(_, v)| v);

        let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
        if !min.is_finite() || !max.is_finite() {
            return [0.0, 1.0];
        }

        let (lo, hi) = (min.floor(), max.ceil());
        if lo == hi {
            [lo - 1.0, hi + 1.0]
        } else {
            [lo, hi]
        }
    }

    /// Up to `max` labels spread evenly from first to last sample.
    pub fn axis_labels(&self, max: usize) -> Vec<String> {
        let n = self.len();
        if n == 0 || max == 0 {
            return Vec::new();
        }
        if n <= max {
            return self.labels.clone();
        }
        if max == 1 {
            return vec![self.labels[0].clone()];
        }

        (0..max)
            .map(|i| self.labels[i * (n - 1) / (max - 1)].clone())
            .collect()
    }
}
