//! Search flows driven through the store, with effects executed against a
//! mock provider.

use std::collections::VecDeque;

use serde_json::json;
use weather_dashboard::components::{Component, WeatherDashboard, WeatherDashboardProps};
use weather_dashboard::config::ClientConfig;
use weather_dashboard::format::{hour_label, ForecastSeries};
use weather_dashboard::model::CurrentConditions;
use weather_dashboard::state::FALLBACK_ERROR;
use weather_dashboard::{reducer, Action, AppState, Effect, OpenWeatherClient, Phase};
use weather_dispatch::testing::RenderHarness;
use weather_dispatch::EffectStore;
use wiremock::matchers::{any, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

type Store = EffectStore<AppState, Action, Effect>;

fn store() -> Store {
    EffectStore::new(AppState::default(), reducer)
}

fn london_json() -> serde_json::Value {
    json!({
        "coord": {"lon": -0.13, "lat": 51.5},
        "weather": [{"description": "light rain", "icon": "10d"}],
        "main": {"temp": 15.2, "feels_like": 14.8, "pressure": 1012, "humidity": 70},
        "wind": {"speed": 4.1},
        "name": "London"
    })
}

fn hourly_json(samples: i64) -> serde_json::Value {
    let hourly: Vec<_> = (0..samples)
        .map(|i| json!({"dt": 1_700_000_000 + i * 3600, "temp": 10.0 + i as f64, "humidity": 60}))
        .collect();
    json!({ "hourly": hourly })
}

/// Type `city`, submit, and run every resulting effect to completion.
/// Returns the effects in the order they were issued.
async fn search(store: &mut Store, client: &OpenWeatherClient, city: &str) -> Vec<Effect> {
    let mut issued = Vec::new();
    let mut queue = VecDeque::from([Action::InputChange(city.into()), Action::SearchSubmit]);

    while let Some(action) = queue.pop_front() {
        for effect in store.dispatch(action).effects {
            issued.push(effect.clone());
            let next = match effect {
                Effect::FetchCurrent { generation, city } => {
                    match client.fetch_current(&city).await {
                        Ok(conditions) => Action::CurrentDidLoad {
                            generation,
                            conditions,
                        },
                        Err(e) => Action::CurrentDidError {
                            generation,
                            message: e.to_string(),
                        },
                    }
                }
                Effect::FetchHourly {
                    generation,
                    lat,
                    lon,
                } => match client.fetch_hourly(lat, lon).await {
                    Ok(forecast) => Action::HourlyDidLoad {
                        generation,
                        forecast,
                    },
                    Err(e) => Action::HourlyDidError {
                        generation,
                        message: e.to_string(),
                    },
                },
                Effect::CancelFetch => continue,
            };
            queue.push_back(next);
        }
    }

    issued
}

async fn provider(current: ResponseTemplate, hourly: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(path("/weather"))
        .respond_with(current)
        .mount(&server)
        .await;
    Mock::given(path("/onecall"))
        .respond_with(hourly)
        .mount(&server)
        .await;
    server
}

fn client_for(server: &MockServer) -> OpenWeatherClient {
    OpenWeatherClient::new(ClientConfig::new("test-key", server.uri())).unwrap()
}

#[tokio::test]
async fn test_london_search_loads_panel_and_chart() {
    let server = provider(
        ResponseTemplate::new(200).set_body_json(london_json()),
        ResponseTemplate::new(200).set_body_json(hourly_json(48)),
    )
    .await;
    let client = client_for(&server);
    let mut store = store();

    let effects = search(&mut store, &client, "London").await;

    assert_eq!(effects.len(), 2);
    assert!(matches!(&effects[0], Effect::FetchCurrent { city, .. } if city == "London"));
    assert!(
        matches!(effects[1], Effect::FetchHourly { lat, lon, .. } if lat == 51.5 && lon == -0.13)
    );

    let state = store.state();
    assert_eq!(state.phase(), Phase::Loaded);
    assert!(state.error.is_none());
    assert_eq!(state.current.as_ref().map(|c| c.name.as_str()), Some("London"));

    let series = ForecastSeries::from_forecast(state.visible_forecast().unwrap());
    assert_eq!(series.len(), 24);
    assert_eq!(series.labels[0], hour_label(1_700_000_000));
    assert_eq!(series.labels[23], hour_label(1_700_000_000 + 23 * 3600));

    let mut harness = RenderHarness::new(120, 30);
    let mut dashboard = WeatherDashboard::new();
    let output = harness.render_to_string_plain(|frame| {
        dashboard.render(
            frame,
            frame.area(),
            WeatherDashboardProps {
                state,
                is_focused: true,
            },
        );
    });
    assert!(output.contains("Current Weather in London"));
    assert!(output.contains("15.2°C"));
    assert!(output.contains("Light Rain"));
    assert!(output.contains("4.1 m/s"));
    assert!(output.contains("70%"));
    assert!(output.contains("24-Hour Forecast"));
}

#[tokio::test]
async fn test_unknown_city_fails_without_panel() {
    let server = provider(
        ResponseTemplate::new(404).set_body_json(json!({"cod": "404", "message": "city not found"})),
        ResponseTemplate::new(200).set_body_json(hourly_json(24)),
    )
    .await;
    let client = client_for(&server);
    let mut store = store();

    let effects = search(&mut store, &client, "Nowhereville").await;

    assert_eq!(effects.len(), 1);
    let state = store.state();
    assert_eq!(state.phase(), Phase::Failed);
    assert!(state.current.is_none());
    assert!(state.hourly.is_none());
    assert!(state
        .error
        .as_deref()
        .is_some_and(|e| e.contains("city not found")));
}

#[tokio::test]
async fn test_hourly_failure_keeps_current_conditions() {
    let server = provider(
        ResponseTemplate::new(200).set_body_json(london_json()),
        ResponseTemplate::new(500).set_body_string("internal error"),
    )
    .await;
    let client = client_for(&server);
    let mut store = store();

    search(&mut store, &client, "London").await;

    let state = store.state();
    assert_eq!(state.phase(), Phase::Loaded);
    assert!(state.current.is_some());
    assert!(state.hourly.is_none());
    assert!(state.error.is_none());
}

#[tokio::test]
async fn test_blank_input_issues_no_request() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let client = client_for(&server);
    let mut store = store();

    let effects = search(&mut store, &client, "   ").await;

    assert!(effects.is_empty());
    assert_eq!(store.state().phase(), Phase::Idle);
    assert!(store.state().error.is_none());
}

#[tokio::test]
async fn test_new_search_after_failure_recovers() {
    let server = MockServer::start().await;
    Mock::given(path("/weather"))
        .respond_with(ResponseTemplate::new(502).set_body_string(""))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(london_json()))
        .mount(&server)
        .await;
    Mock::given(path("/onecall"))
        .respond_with(ResponseTemplate::new(200).set_body_json(hourly_json(24)))
        .mount(&server)
        .await;
    let client = client_for(&server);
    let mut store = store();

    search(&mut store, &client, "London").await;
    assert_eq!(store.state().phase(), Phase::Failed);
    assert!(store.state().error.as_deref().is_some_and(|e| !e.is_empty()));

    search(&mut store, &client, "London").await;
    assert_eq!(store.state().phase(), Phase::Loaded);
    assert!(store.state().error.is_none());
}

#[test]
fn test_late_result_after_cancel_is_discarded() {
    let mut store = store();
    store.dispatch(Action::InputChange("London".into()));
    store.dispatch(Action::SearchSubmit);
    let london_generation = store.state().generation;

    let cancel = store.dispatch(Action::SearchCancel);
    assert_eq!(cancel.effects, vec![Effect::CancelFetch]);

    store.dispatch(Action::InputChange("Paris".into()));
    let submit = store.dispatch(Action::SearchSubmit);
    assert!(matches!(&submit.effects[..], [Effect::FetchCurrent { city, .. }] if city == "Paris"));

    let london: CurrentConditions = serde_json::from_value(london_json()).unwrap();
    let late = store.dispatch(Action::CurrentDidLoad {
        generation: london_generation,
        conditions: london,
    });

    assert!(!late.changed);
    assert!(late.effects.is_empty());
    assert_eq!(store.state().phase(), Phase::Loading);
    assert!(store.state().current.is_none());
}

#[test]
fn test_blank_error_message_uses_fallback() {
    let mut store = store();
    store.dispatch(Action::InputChange("London".into()));
    store.dispatch(Action::SearchSubmit);
    let generation = store.state().generation;

    store.dispatch(Action::CurrentDidError {
        generation,
        message: String::new(),
    });

    assert_eq!(store.state().error.as_deref(), Some(FALLBACK_ERROR));
}
