//! Weather dashboard TUI
//!
//! 1. Key event -> `WeatherDashboard::handle_event()` -> actions
//! 2. Actions dispatched to the `EffectStore`
//! 3. Reducer updates state and returns effects
//! 4. Effects become tasks on the `TaskManager`; results come back as actions
//! 5. If state changed, re-render
//!
//! ```sh
//! OPENWEATHER_API_KEY=... weather-dashboard --city London
//! ```

use std::cell::RefCell;
use std::io;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use ratatui::{layout::Rect, Frame, Terminal};
use tracing::{info, warn};
use weather_dispatch::{
    EffectContext, EffectRuntime, EventKind, EventOutcome, RenderContext, TaskKey,
};

use weather_dashboard::components::{Component, WeatherDashboard, WeatherDashboardProps};
use weather_dashboard::config::{Args, Config};
use weather_dashboard::logging::init_logging;
use weather_dashboard::terminal;
use weather_dashboard::{reducer, Action, AppState, Effect, OpenWeatherClient};

/// Both fetch stages share one key: a new stage or a cancel aborts the old one.
const FETCH_TASK: &str = "weather";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Validate before entering TUI mode
    let config = match Config::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    let _log_guard = init_logging(&config.logging).context("failed to set up logging")?;
    info!(
        base_url = %config.client.base_url,
        timeout = ?config.client.timeout,
        forecast = config.forecast_enabled,
        "starting weather dashboard"
    );

    let client =
        Arc::new(OpenWeatherClient::new(config.client.clone()).context("failed to build HTTP client")?);

    let mut tui = terminal::init().context("failed to set up terminal")?;

    let result = run_app(&mut tui, &config, client).await;

    terminal::restore(&mut tui).context("failed to restore terminal")?;

    if let Err(e) = &result {
        warn!(error = %e, "dashboard exited with an error");
    }
    result.context("terminal I/O failed")
}

struct DashboardUi {
    dashboard: WeatherDashboard,
}

impl DashboardUi {
    fn new() -> Self {
        Self {
            dashboard: WeatherDashboard::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState, ctx: RenderContext) {
        let props = WeatherDashboardProps {
            state,
            is_focused: ctx.is_focused(),
        };
        self.dashboard.render(frame, area, props);
    }

    fn map_event(&mut self, event: &EventKind, state: &AppState) -> EventOutcome<Action> {
        if let EventKind::Resize(..) = event {
            return EventOutcome::ignored().with_render();
        }

        let props = WeatherDashboardProps {
            state,
            is_focused: true,
        };
        // Cursor moves change no state but still need a redraw
        EventOutcome::from_actions(self.dashboard.handle_event(event, props)).with_render()
    }
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
    client: Arc<OpenWeatherClient>,
) -> io::Result<()> {
    let mut runtime = EffectRuntime::new(AppState::new(config.forecast_enabled), reducer);

    // Spinner animation
    runtime
        .subscriptions()
        .interval("tick", config.tick_interval, || Action::Tick);

    if let Some(city) = &config.initial_city {
        runtime.enqueue(Action::InputChange(city.clone()));
        runtime.enqueue(Action::SearchSubmit);
    }

    let ui = RefCell::new(DashboardUi::new());

    runtime
        .run(
            terminal,
            |frame, area, state, render_ctx| {
                ui.borrow_mut().render(frame, area, state, render_ctx);
            },
            |event, state| ui.borrow_mut().map_event(event, state),
            |action| matches!(action, Action::Quit),
            |effect, ctx| handle_effect(effect, ctx, &client),
        )
        .await
}

/// Turn effects into tasks. Every result is tagged with its generation so the
/// reducer can drop anything a newer search has superseded.
fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>, client: &Arc<OpenWeatherClient>) {
    match effect {
        Effect::FetchCurrent { generation, city } => {
            let client = Arc::clone(client);
            ctx.tasks().spawn(FETCH_TASK, async move {
                match client.fetch_current(&city).await {
                    Ok(conditions) => Action::CurrentDidLoad {
                        generation,
                        conditions,
                    },
                    Err(e) => {
                        warn!(%city, error = %e, "current conditions fetch failed");
                        Action::CurrentDidError {
                            generation,
                            message: e.to_string(),
                        }
                    }
                }
            });
        }
        Effect::FetchHourly {
            generation,
            lat,
            lon,
        } => {
            let client = Arc::clone(client);
            ctx.tasks().spawn(FETCH_TASK, async move {
                match client.fetch_hourly(lat, lon).await {
                    Ok(forecast) => Action::HourlyDidLoad {
                        generation,
                        forecast,
                    },
                    Err(e) => {
                        // Not shown to the user: the chart is simply omitted
                        warn!(lat, lon, error = %e, "hourly forecast fetch failed");
                        Action::HourlyDidError {
                            generation,
                            message: e.to_string(),
                        }
                    }
                }
            });
        }
        Effect::CancelFetch => {
            info!("search cancelled");
            ctx.tasks().cancel(&TaskKey::new(FETCH_TASK));
        }
    }
}
