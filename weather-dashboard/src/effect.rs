//! Effects - side effects declared by the reducer
//!
//! The reducer stays pure; `main` turns these into tasks.

/// Side effects requested by state transitions
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Fetch current conditions for a trimmed, non-blank city name
    FetchCurrent { generation: u64, city: String },

    /// Fetch the hourly forecast for the coordinate of a loaded city
    FetchHourly { generation: u64, lat: f64, lon: f64 },

    /// Abort whatever request is in flight
    CancelFetch,
}
