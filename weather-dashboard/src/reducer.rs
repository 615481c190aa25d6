//! Reducer - (state, action) -> (changed, effects)
//!
//! All state transitions of a search happen here:
//!
//! ```text
//! Idle/Loaded/Failed --SearchSubmit--> Loading --CurrentDidError--> Failed
//!                                         |
//!                                  CurrentDidLoad
//!                                         |-- no coord / forecast off --> Loaded
//!                                         '-- FetchHourly --> Loading --Hourly*--> Loaded
//! ```
//!
//! Results carry the generation of the submission that started them; anything
//! older than `state.generation` is dropped.

use weather_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, FALLBACK_ERROR};

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Search =====
        Action::InputChange(text) => {
            if state.input == text {
                return DispatchResult::unchanged();
            }
            state.input = text;
            DispatchResult::changed()
        }

        Action::SearchSubmit => {
            // Submit control is disabled while a search is in flight
            if state.is_loading {
                return DispatchResult::unchanged();
            }
            let Some(city) = state.search_query().map(str::to_string) else {
                return DispatchResult::unchanged();
            };

            state.generation += 1;
            state.is_loading = true;
            state.current = None;
            state.hourly = None;
            state.error = None;

            DispatchResult::changed_with(Effect::FetchCurrent {
                generation: state.generation,
                city,
            })
        }

        Action::SearchCancel => {
            if !state.is_loading {
                return DispatchResult::unchanged();
            }
            state.generation += 1;
            state.is_loading = false;
            DispatchResult::changed_with(Effect::CancelFetch)
        }

        // ===== Stage 1: current conditions =====
        Action::CurrentDidLoad {
            generation,
            conditions,
        } => {
            if is_stale(state, generation) {
                return DispatchResult::unchanged();
            }

            let coord = conditions.coord;
            state.current = Some(conditions);

            match coord {
                Some(coord) if state.forecast_enabled => {
                    DispatchResult::changed_with(Effect::FetchHourly {
                        generation,
                        lat: coord.lat,
                        lon: coord.lon,
                    })
                }
                _ => {
                    state.is_loading = false;
                    DispatchResult::changed()
                }
            }
        }

        Action::CurrentDidError {
            generation,
            message,
        } => {
            if is_stale(state, generation) {
                return DispatchResult::unchanged();
            }

            let message = message.trim();
            state.error = Some(if message.is_empty() {
                FALLBACK_ERROR.to_string()
            } else {
                message.to_string()
            });
            state.current = None;
            state.hourly = None;
            state.is_loading = false;
            DispatchResult::changed()
        }

        // ===== Stage 2: hourly forecast =====
        Action::HourlyDidLoad {
            generation,
            forecast,
        } => {
            if is_stale(state, generation) || state.current.is_none() {
                return DispatchResult::unchanged();
            }
            state.hourly = Some(forecast);
            state.is_loading = false;
            DispatchResult::changed()
        }

        // Partial success: keep the current panel, omit the chart
        Action::HourlyDidError { generation, .. } => {
            if is_stale(state, generation) {
                return DispatchResult::unchanged();
            }
            state.hourly = None;
            state.is_loading = false;
            DispatchResult::changed()
        }

        // ===== Global =====
        Action::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // only the spinner animates
            if state.is_loading {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // Handled by the runtime loop
        Action::Quit => DispatchResult::unchanged(),
    }
}

fn is_stale(state: &AppState, generation: u64) -> bool {
    !state.is_loading || generation != state.generation
}
