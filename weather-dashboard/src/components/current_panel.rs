use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::Component;
use crate::action::Action;
use crate::format;
use crate::model::CurrentConditions;

pub struct CurrentPanelProps<'a> {
    pub current: &'a CurrentConditions,
}

/// Current readings for the searched city
pub struct CurrentPanel;

impl CurrentPanel {
    fn reading(label: &str, value: String, color: Color) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{label:<12}"), Style::default().fg(Color::DarkGray)),
            Span::styled(value, Style::default().fg(color).bold()),
        ])
    }
}

impl Component<Action> for CurrentPanel {
    type Props<'a> = CurrentPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let current = props.current;
        let description = current
            .primary_condition()
            .map(|c| format::title_case(&c.description))
            .unwrap_or_default();

        let lines = vec![
            Self::reading(
                "Temperature",
                format::temperature(current.main.temp),
                Color::LightRed,
            ),
            Self::reading("Conditions", description, Color::LightBlue),
            Self::reading("Wind", format::wind_speed(current.wind.speed), Color::Gray),
            Self::reading(
                "Humidity",
                format::humidity(current.main.humidity),
                Color::Cyan,
            ),
            Line::default(),
            Line::styled(
                format::feels_like(current.main.feels_like),
                Style::default().fg(Color::DarkGray),
            ),
            Line::styled(
                format::pressure(current.main.pressure),
                Style::default().fg(Color::DarkGray),
            ),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
            .title(format!(" Current Weather in {} ", current.name))
            .title_style(Style::default().fg(Color::White).bold());

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}
