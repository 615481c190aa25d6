//! Actions
//!
//! Naming follows the dispatch convention: intents are plain verbs
//! (`SearchSubmit`), async results carry a `Did` (`CurrentDidLoad`).
//! Every result is tagged with the generation of the search that started it.

use crate::model::{CurrentConditions, HourlyForecast};

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    // ===== Search =====
    /// Search box text changed
    InputChange(String),

    /// Submit the search box contents
    SearchSubmit,

    /// Abandon the in-flight search
    SearchCancel,

    // ===== Async results =====
    CurrentDidLoad {
        generation: u64,
        conditions: CurrentConditions,
    },

    CurrentDidError {
        generation: u64,
        message: String,
    },

    HourlyDidLoad {
        generation: u64,
        forecast: HourlyForecast,
    },

    HourlyDidError {
        generation: u64,
        message: String,
    },

    // ===== Global =====
    /// Spinner animation tick
    Tick,

    Quit,
}

impl weather_dispatch::Action for Action {
    fn name(&self) -> &'static str {
        match self {
            Action::InputChange(_) => "InputChange",
            Action::SearchSubmit => "SearchSubmit",
            Action::SearchCancel => "SearchCancel",
            Action::CurrentDidLoad { .. } => "CurrentDidLoad",
            Action::CurrentDidError { .. } => "CurrentDidError",
            Action::HourlyDidLoad { .. } => "HourlyDidLoad",
            Action::HourlyDidError { .. } => "HourlyDidError",
            Action::Tick => "Tick",
            Action::Quit => "Quit",
        }
    }

    /// Concise form for the log: payload sizes instead of full data.
    fn summary(&self) -> String {
        match self {
            Action::CurrentDidLoad {
                generation,
                conditions,
            } => format!(
                "CurrentDidLoad {{ gen: {}, city: {:?}, temp: {:.1}°C }}",
                generation, conditions.name, conditions.main.temp
            ),
            Action::HourlyDidLoad {
                generation,
                forecast,
            } => format!(
                "HourlyDidLoad {{ gen: {}, samples: {} }}",
                generation,
                forecast.hourly.len()
            ),
            _ => format!("{:?}", self),
        }
    }

    /// The spinner tick fires several times a second.
    fn is_high_frequency(&self) -> bool {
        matches!(self, Action::Tick)
    }
}
