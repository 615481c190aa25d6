//! Root component
//!
//! Layout, top to bottom: search bar, error line, body, help bar.
//! The body shows the current panel and (when loaded) the forecast chart,
//! side by side on wide terminals and stacked otherwise.

use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use weather_dispatch::EventKind;

use super::{
    Component, CurrentPanel, CurrentPanelProps, ForecastChart, ForecastChartProps, HelpBar,
    HelpBarProps, SearchBar, SearchBarProps,
};
use crate::action::Action;
use crate::model::CurrentConditions;
use crate::state::AppState;

pub const TITLE: &str = "Weather Dashboard";
pub const EMPTY_PROMPT: &str = "Enter a city name and press Enter";
pub const LOADING_TEXT: &str = "Fetching weather...";
pub const SPINNERS: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Minimum body width for the side-by-side layout.
const WIDE_LAYOUT_MIN_WIDTH: u16 = 100;
const PANEL_HEIGHT: u16 = 10;

pub struct WeatherDashboardProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

#[derive(Default)]
pub struct WeatherDashboard {
    search: SearchBar,
}

impl WeatherDashboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn render_body(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(current) = state.current.as_ref() else {
            let (text, style) = if state.is_loading {
                (LOADING_TEXT, Style::default().fg(Color::Yellow))
            } else if state.error.is_none() {
                (EMPTY_PROMPT, Style::default().fg(Color::DarkGray))
            } else {
                return;
            };
            let [row] = Layout::vertical([Constraint::Length(1)])
                .flex(Flex::Center)
                .areas(area);
            let message = Paragraph::new(Line::styled(text, style)).alignment(Alignment::Center);
            frame.render_widget(message, row);
            return;
        };

        match state.visible_forecast() {
            Some(forecast) if area.width >= WIDE_LAYOUT_MIN_WIDTH => {
                let [left, right] =
                    Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
                        .areas(area);
                render_current(frame, left, current);
                ForecastChart.render(frame, right, ForecastChartProps { forecast });
            }
            Some(forecast) => {
                let [top, bottom] =
                    Layout::vertical([Constraint::Length(PANEL_HEIGHT), Constraint::Min(0)])
                        .areas(area);
                render_current(frame, top, current);
                ForecastChart.render(frame, bottom, ForecastChartProps { forecast });
            }
            None => {
                let [top, _] =
                    Layout::vertical([Constraint::Length(PANEL_HEIGHT), Constraint::Min(0)])
                        .areas(area);
                render_current(frame, top, current);
            }
        }
    }
}

fn render_current(frame: &mut Frame, area: Rect, current: &CurrentConditions) {
    CurrentPanel.render(frame, area, CurrentPanelProps { current });
}

impl Component<Action> for WeatherDashboard {
    type Props<'a> = WeatherDashboardProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        self.search.handle_event(
            event,
            SearchBarProps {
                input: &props.state.input,
                is_loading: props.state.is_loading,
                is_focused: props.is_focused,
            },
        )
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;

        let spinner = if state.is_loading {
            format!(" {}", SPINNERS[(state.tick_count as usize / 2) % SPINNERS.len()])
        } else {
            String::new()
        };

        let outer = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
            .title(format!(" {TITLE}{spinner} "))
            .title_style(Style::default().fg(Color::Cyan).bold())
            .title_alignment(Alignment::Center);
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let [search, error, body, help] = Layout::vertical([
            Constraint::Length(3), // Search bar
            Constraint::Length(1), // Error line
            Constraint::Min(1),    // Body
            Constraint::Length(1), // Help bar
        ])
        .areas(inner);

        self.search.render(
            frame,
            search,
            SearchBarProps {
                input: &state.input,
                is_loading: state.is_loading,
                is_focused: props.is_focused,
            },
        );

        if let Some(message) = state.error.as_deref() {
            let line = Line::styled(format!(" {message}"), Style::default().fg(Color::LightRed));
            frame.render_widget(Paragraph::new(line), error);
        }

        self.render_body(frame, body, state);

        HelpBar.render(
            frame,
            help,
            HelpBarProps {
                is_loading: state.is_loading,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weather_dispatch::testing::*;

    fn render(state: &AppState, width: u16, height: u16) -> String {
        let mut harness = RenderHarness::new(width, height);
        let mut dashboard = WeatherDashboard::new();
        harness.render_to_string_plain(|frame| {
            dashboard.render(
                frame,
                frame.area(),
                WeatherDashboardProps {
                    state,
                    is_focused: true,
                },
            );
        })
    }

    #[test]
    fn test_render_idle_prompt() {
        let output = render(&AppState::default(), 80, 24);

        assert!(output.contains(TITLE));
        assert!(output.contains(EMPTY_PROMPT));
        assert!(output.contains("Search"));
    }

    #[test]
    fn test_render_loading() {
        let state = AppState {
            input: "London".into(),
            is_loading: true,
            ..Default::default()
        };
        let output = render(&state, 80, 24);

        assert!(output.contains(LOADING_TEXT));
        assert!(output.contains("Searching..."));
        assert!(SPINNERS.iter().any(|s| output.contains(s)));
        assert!(!output.contains(EMPTY_PROMPT));
    }

    #[test]
    fn test_render_error_line() {
        let state = AppState {
            error: Some("city not found".into()),
            ..Default::default()
        };
        let output = render(&state, 80, 24);

        assert!(output.contains("city not found"));
        assert!(!output.contains("Current Weather in"));
        assert!(!output.contains(EMPTY_PROMPT));
    }

    #[test]
    fn test_keys_route_to_search_bar() {
        let state = AppState {
            input: "Oslo".into(),
            ..Default::default()
        };
        let mut dashboard = WeatherDashboard::new();

        let actions: Vec<Action> = dashboard
            .handle_event(
                &EventKind::Key(key("enter")),
                WeatherDashboardProps {
                    state: &state,
                    is_focused: true,
                },
            )
            .into_iter()
            .collect();

        actions.assert_first(Action::SearchSubmit);
    }
}
