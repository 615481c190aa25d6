//! City input plus the Search / Searching... control

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use weather_dispatch::EventKind;

use super::Component;
use crate::action::Action;

pub const PLACEHOLDER: &str = "Enter city name";
pub const SUBMIT_LABEL: &str = "Search";
pub const SUBMIT_LABEL_LOADING: &str = "Searching...";

pub struct SearchBarProps<'a> {
    pub input: &'a str,
    pub is_loading: bool,
    pub is_focused: bool,
}

/// Single-line city input.
///
/// The cursor is kept as a byte offset from the end of the text, so text set
/// from outside (an initial `--city`) leaves the cursor after the last char.
#[derive(Default)]
pub struct SearchBar {
    from_end: usize,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Byte index of the cursor in `value`.
    fn cursor(&mut self, value: &str) -> usize {
        self.from_end = self.from_end.min(value.len());
        let pos = value.len() - self.from_end;
        if value.is_char_boundary(pos) {
            pos
        } else {
            self.from_end = 0;
            value.len()
        }
    }

    fn edit(&mut self, value: &str, code: KeyCode) -> Option<String> {
        let pos = self.cursor(value);
        let before = &value[..pos];
        let after = &value[pos..];

        match code {
            KeyCode::Char(c) => Some(format!("{before}{c}{after}")),
            KeyCode::Backspace => {
                let (start, _) = before.char_indices().next_back()?;
                Some(format!("{}{after}", &before[..start]))
            }
            KeyCode::Delete => {
                let c = after.chars().next()?;
                self.from_end -= c.len_utf8();
                Some(format!("{before}{}", &after[c.len_utf8()..]))
            }
            KeyCode::Left => {
                if let Some(c) = before.chars().next_back() {
                    self.from_end += c.len_utf8();
                }
                None
            }
            KeyCode::Right => {
                if let Some(c) = after.chars().next() {
                    self.from_end -= c.len_utf8();
                }
                None
            }
            KeyCode::Home => {
                self.from_end = value.len();
                None
            }
            KeyCode::End => {
                self.from_end = 0;
                None
            }
            _ => None,
        }
    }
}

impl Component<Action> for SearchBar {
    type Props<'a> = SearchBarProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }
        let EventKind::Key(key) = event else {
            return None;
        };

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(Action::Quit),
                // Ctrl+U: clear line
                KeyCode::Char('u') => {
                    self.from_end = 0;
                    Some(Action::InputChange(String::new()))
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Enter if props.is_loading => None,
            KeyCode::Enter => Some(Action::SearchSubmit),
            KeyCode::Esc if props.is_loading => Some(Action::SearchCancel),
            KeyCode::Esc => Some(Action::Quit),
            code => self.edit(props.input, code).map(Action::InputChange),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::horizontal([Constraint::Min(10), Constraint::Length(16)]).split(area);

        let border = if props.is_focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(" City ");
        let inner = block.inner(chunks[0]);

        let text = if props.input.is_empty() {
            Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(props.input)
        };
        frame.render_widget(text.block(block), chunks[0]);

        if props.is_focused && inner.width > 0 && inner.height > 0 {
            let pos = self.cursor(props.input);
            let column = props.input[..pos].chars().count() as u16;
            let x = inner.x + column.min(inner.width.saturating_sub(1));
            frame.set_cursor_position((x, inner.y));
        }

        let (label, style) = if props.is_loading {
            (
                SUBMIT_LABEL_LOADING,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM),
            )
        } else {
            (SUBMIT_LABEL, Style::default().fg(Color::White).bold())
        };
        let button = Paragraph::new(label)
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(style));
        frame.render_widget(button, chunks[1]);
    }
}
