//! Application state - single source of truth
//!
//! Components receive `&AppState` as props; only the reducer mutates it.

use crate::model::{CurrentConditions, HourlyForecast};

/// Shown when a failure carries no usable message.
pub const FALLBACK_ERROR: &str = "Failed to fetch weather data. Please try again.";

/// Where the search sequence stands, derived from the state fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Nothing fetched yet, or the last search was cancelled
    Idle,
    /// A request sequence is in flight
    Loading,
    /// Current conditions shown (forecast optional)
    Loaded,
    /// Current conditions could not be fetched
    Failed,
}

/// The view state: input text, last results, loading flag and error.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    /// Search box contents
    pub input: String,

    /// Last fetched current conditions
    pub current: Option<CurrentConditions>,

    /// Last fetched hourly forecast
    pub hourly: Option<HourlyForecast>,

    /// True only while a request sequence is in flight
    pub is_loading: bool,

    /// User-visible error from the last search
    pub error: Option<String>,

    /// Incremented on every accepted submission and on cancel.
    /// Results tagged with an older generation are stale and dropped.
    pub generation: u64,

    /// Whether a search continues with the hourly forecast stage
    pub forecast_enabled: bool,

    /// Animation frame counter (loading spinner)
    pub tick_count: u32,
}

impl AppState {
    pub fn new(forecast_enabled: bool) -> Self {
        Self {
            input: String::new(),
            current: None,
            hourly: None,
            is_loading: false,
            error: None,
            generation: 0,
            forecast_enabled,
            tick_count: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.is_loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Failed
        } else if self.current.is_some() {
            Phase::Loaded
        } else {
            Phase::Idle
        }
    }

    /// Trimmed input, or `None` when blank.
    pub fn search_query(&self) -> Option<&str> {
        let query = self.input.trim();
        (!query.is_empty()).then_some(query)
    }

    /// The forecast is only shown together with current conditions.
    pub fn visible_forecast(&self) -> Option<&HourlyForecast> {
        self.current.as_ref().and(self.hourly.as_ref())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(true)
    }
}
