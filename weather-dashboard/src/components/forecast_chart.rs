//! 24-hour temperature and humidity line chart

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Style, Stylize},
    symbols::Marker,
    text::Line,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition, Paragraph},
    Frame,
};

use super::Component;
use crate::action::Action;
use crate::format::ForecastSeries;
use crate::model::{HourlyForecast, CHART_SAMPLE_LIMIT};

pub const TITLE: &str = "24-Hour Forecast";
pub const TEMPERATURE_LABEL: &str = "Temperature (°C)";
pub const HUMIDITY_LABEL: &str = "Humidity (%)";

const TEMPERATURE_COLOR: Color = Color::Rgb(255, 99, 132);
const HUMIDITY_COLOR: Color = Color::Rgb(53, 162, 235);

/// Columns reserved per x-axis label ("HH:MM" plus spacing).
const LABEL_WIDTH: u16 = 8;

/// Number of hour labels that fit on the x axis of a chart `width` columns wide.
///
/// Every sample gets a label once the chart is wide enough; narrower charts
/// label an evenly spaced subset.
fn x_label_slots(width: u16) -> usize {
    let slots = width.saturating_sub(LABEL_WIDTH) / LABEL_WIDTH;
    usize::from(slots).clamp(2, CHART_SAMPLE_LIMIT)
}

pub struct ForecastChartProps<'a> {
    pub forecast: &'a HourlyForecast,
}

pub struct ForecastChart;

impl Component<Action> for ForecastChart {
    type Props<'a> = ForecastChartProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
            .title(format!(" {TITLE} "))
            .title_style(Style::default().fg(Color::White).bold());

        let series = ForecastSeries::from_forecast(props.forecast);
        if series.is_empty() {
            let empty = Paragraph::new(Line::from("No hourly data").dark_gray())
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let datasets = vec![
            Dataset::default()
                .name(TEMPERATURE_LABEL)
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(TEMPERATURE_COLOR))
                .data(&series.temperature),
            Dataset::default()
                .name(HUMIDITY_LABEL)
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(HUMIDITY_COLOR))
                .data(&series.humidity),
        ];

        let label_slots = x_label_slots(area.width);
        let x_axis = Axis::default()
            .style(Style::default().fg(Color::DarkGray))
            .bounds(series.x_bounds())
            .labels(series.axis_labels(label_slots));

        let [lo, hi] = series.y_bounds();
        let y_axis = Axis::default()
            .style(Style::default().fg(Color::DarkGray))
            .bounds([lo, hi])
            .labels(vec![
                format!("{lo:.0}"),
                format!("{:.0}", (lo + hi) / 2.0),
                format!("{hi:.0}"),
            ]);

        let chart = Chart::new(datasets)
            .block(block)
            .x_axis(x_axis)
            .y_axis(y_axis)
            .legend_position(Some(LegendPosition::TopLeft))
            .hidden_legend_constraints((Constraint::Percentage(60), Constraint::Percentage(60)));

        frame.render_widget(chart, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::hour_label;
    use crate::model::HourlySample;
    use weather_dispatch::testing::*;

    fn forecast(samples: i64) -> HourlyForecast {
        HourlyForecast {
            hourly: (0..samples)
                .map(|i| HourlySample {
                    dt: 1_700_000_000 + i * 3600,
                    temp: 8.0 + (i % 6) as f64,
                    humidity: 55.0 + (i % 4) as f64 * 5.0,
                })
                .collect(),
        }
    }

    #[test]
    fn test_render_chart() {
        let forecast = forecast(48);
        let mut render = RenderHarness::new(80, 20);

        let output = render.render_to_string_plain(|frame| {
            ForecastChart.render(frame, frame.area(), ForecastChartProps { forecast: &forecast });
        });

        assert!(output.contains(TITLE));
        assert!(output.contains(TEMPERATURE_LABEL));
        assert!(output.contains(HUMIDITY_LABEL));
        assert!(output.contains(&hour_label(1_700_000_000)));
    }

    #[test]
    fn test_x_label_slots_follow_width() {
        assert_eq!(x_label_slots(0), 2);
        assert_eq!(x_label_slots(40), 4);
        assert_eq!(x_label_slots(80), 9);
        assert_eq!(x_label_slots(200), CHART_SAMPLE_LIMIT);
        assert_eq!(x_label_slots(u16::MAX), CHART_SAMPLE_LIMIT);
    }

    #[test]
    fn test_wide_chart_labels_every_hour() {
        let forecast = forecast(48);
        let mut render = RenderHarness::new(220, 20);

        let output = render.render_to_string_plain(|frame| {
            ForecastChart.render(frame, frame.area(), ForecastChartProps { forecast: &forecast });
        });

        let series = ForecastSeries::from_forecast(&forecast);
        assert_eq!(series.labels.len(), CHART_SAMPLE_LIMIT);
        for label in &series.labels {
            assert!(output.contains(label.as_str()), "missing x label {label}");
        }
    }

    #[test]
    fn test_narrow_chart_labels_subset() {
        let forecast = forecast(48);
        let mut render = RenderHarness::new(80, 20);

        let output = render.render_to_string_plain(|frame| {
            ForecastChart.render(frame, frame.area(), ForecastChartProps { forecast: &forecast });
        });

        let series = ForecastSeries::from_forecast(&forecast);
        assert!(output.contains(series.labels[0].as_str()));
        assert!(output.contains(series.labels[23].as_str()));
        assert!(!output.contains(series.labels[1].as_str()));
    }

    #[test]
    fn test_render_empty_forecast() {
        let forecast = HourlyForecast::default();
        let mut render = RenderHarness::new(40, 8);

        let output = render.render_to_string_plain(|frame| {
            ForecastChart.render(frame, frame.area(), ForecastChartProps { forecast: &forecast });
        });

        assert!(output.contains(TITLE));
        assert!(output.contains("No hourly data"));
    }
}
