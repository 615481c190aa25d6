//! Weather dashboard
//!
//! Search a city, see its current conditions and a 24-hour temperature and
//! humidity chart. Data comes from OpenWeatherMap.
//!
//! The crate is split along the dispatch loop:
//! - [`client`] talks to the provider
//! - [`reducer`] turns [`action::Action`]s into state changes and [`effect::Effect`]s
//! - [`components`] render [`state::AppState`] and map keys to actions

pub mod action;
pub mod client;
pub mod components;
pub mod config;
pub mod effect;
pub mod format;
pub mod logging;
pub mod model;
pub mod reducer;
pub mod state;
pub mod terminal;

pub use action::Action;
pub use client::{OpenWeatherClient, ProviderError};
pub use effect::Effect;
pub use reducer::reducer;
pub use state::{AppState, Phase};
