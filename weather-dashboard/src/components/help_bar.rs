use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Component;
use crate::action::Action;

pub struct HelpBarProps {
    pub is_loading: bool,
}

pub struct HelpBar;

impl Component<Action> for HelpBar {
    type Props<'a> = HelpBarProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let key = Style::default().fg(Color::Cyan).bold();
        let hint = Style::default().fg(Color::DarkGray);

        let esc = if props.is_loading { " cancel  " } else { " quit  " };
        let help = Line::from(vec![
            Span::styled(" enter", key),
            Span::styled(" search  ", hint),
            Span::styled("esc", key),
            Span::styled(esc, hint),
            Span::styled("ctrl+c", key),
            Span::styled(" quit ", hint),
        ])
        .centered();
        frame.render_widget(Paragraph::new(help), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weather_dispatch::testing::*;

    #[test]
    fn test_esc_hint_follows_loading() {
        let mut render = RenderHarness::new(60, 1);

        let idle = render.render_to_string_plain(|frame| {
            HelpBar.render(frame, frame.area(), HelpBarProps { is_loading: false });
        });
        assert!(idle.contains("esc quit"));

        let loading = render.render_to_string_plain(|frame| {
            HelpBar.render(frame, frame.area(), HelpBarProps { is_loading: true });
        });
        assert!(loading.contains("esc cancel"));
    }
}
