//! Test utilities
//!
//! - [`key`]: build a `KeyEvent` from a string (`"enter"`, `"ctrl+c"`, `"a"`)
//! - [`RenderHarness`]: render into a ratatui `TestBackend` and read it back as text
//! - [`ActionAssertions`]: assertions on actions returned by `handle_event`
//!
//! ```ignore
//! let mut render = RenderHarness::new(60, 20);
//! let output = render.render_to_string_plain(|frame| {
//!     component.render(frame, frame.area(), props);
//! });
//! assert!(output.contains("Weather Dashboard"));
//! ```

use std::fmt::Debug;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::{Frame, Terminal};

/// Create a `KeyEvent` from a key string.
///
/// Accepts an optional `ctrl+`, `alt+` or `shift+` prefix followed by a single
/// character or a named key (`enter`, `esc`, `backspace`, `delete`, `left`,
/// `right`, `up`, `down`, `home`, `end`, `tab`, `space`, `f1`..`f12`).
///
/// # Panics
///
/// Panics if the key string cannot be parsed.
pub fn key(s: &str) -> KeyEvent {
    parse_key(s).unwrap_or_else(|| panic!("Invalid key string: {:?}", s))
}

fn parse_key(s: &str) -> Option<KeyEvent> {
    let parts: Vec<&str> = s.split('+').collect();
    let (key_part, modifier_parts) = parts.split_last()?;

    let mut modifiers = KeyModifiers::empty();
    for part in modifier_parts {
        match part.trim().to_lowercase().as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            _ => return None,
        }
    }

    let mut chars = key_part.chars();
    let code = match (chars.next(), chars.next()) {
        (Some(c), None) => KeyCode::Char(c),
        _ => match key_part.to_lowercase().as_str() {
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "backspace" => KeyCode::Backspace,
            "delete" | "del" => KeyCode::Delete,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "tab" => KeyCode::Tab,
            "space" => KeyCode::Char(' '),
            other => {
                let n: u8 = other.strip_prefix('f')?.parse().ok()?;
                if !(1..=12).contains(&n) {
                    return None;
                }
                KeyCode::F(n)
            }
        },
    };

    Some(KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    })
}

/// `KeyEvent` for a character with no modifiers.
pub fn char_key(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// `KeyEvent` for a character with Ctrl held.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Convert a buffer to plain text, one line per row, trailing spaces trimmed.
pub fn buffer_to_string_plain(buffer: &Buffer) -> String {
    let width = buffer.area.width as usize;
    if width == 0 {
        return String::new();
    }

    buffer
        .content()
        .chunks(width)
        .map(|row| {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders into an in-memory terminal of fixed size.
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    /// # Panics
    ///
    /// Panics if the test terminal cannot be created.
    pub fn new(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .unwrap_or_else(|e| panic!("failed to create test terminal: {e}"));
        Self { terminal }
    }

    /// Render a frame and return the resulting buffer.
    ///
    /// # Panics
    ///
    /// Panics if drawing fails.
    pub fn render<F>(&mut self, render_fn: F) -> &Buffer
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal
            .draw(render_fn)
            .unwrap_or_else(|e| panic!("failed to draw test frame: {e}"));
        self.terminal.backend().buffer()
    }

    /// Render a frame and return its text content without styling.
    pub fn render_to_string_plain<F>(&mut self, render_fn: F) -> String
    where
        F: FnOnce(&mut Frame),
    {
        let buffer = self.render(render_fn);
        buffer_to_string_plain(buffer)
    }
}

/// Assertions for action lists returned by components.
pub trait ActionAssertions {
    type Item;

    fn assert_empty(&self);
    fn assert_count(&self, expected: usize);
    fn assert_first(&self, expected: Self::Item);
    fn assert_contains(&self, expected: Self::Item);
}

impl<A> ActionAssertions for Vec<A>
where
    A: PartialEq + Debug,
{
    type Item = A;

    fn assert_empty(&self) {
        assert!(self.is_empty(), "expected no actions, got {:?}", self);
    }

    fn assert_count(&self, expected: usize) {
        assert_eq!(
            self.len(),
            expected,
            "expected {} actions, got {:?}",
            expected,
            self
        );
    }

    fn assert_first(&self, expected: A) {
        assert_eq!(
            self.first(),
            Some(&expected),
            "unexpected first action in {:?}",
            self
        );
    }

    fn assert_contains(&self, expected: A) {
        assert!(
            self.contains(&expected),
            "expected {:?} in {:?}",
            expected,
            self
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_key_simple() {
        let k = key("q");
        assert_eq!(k.code, KeyCode::Char('q'));
        assert_eq!(k.modifiers, KeyModifiers::empty());
    }

    #[test]
    fn test_key_with_ctrl() {
        let k = key("ctrl+c");
        assert_eq!(k.code, KeyCode::Char('c'));
        assert!(k.modifiers.contains(KeyModifiers::CONTROL));
    }

    #[test]
    fn test_key_named() {
        assert_eq!(key("esc").code, KeyCode::Esc);
        assert_eq!(key("enter").code, KeyCode::Enter);
        assert_eq!(key("backspace").code, KeyCode::Backspace);
        assert_eq!(key("f5").code, KeyCode::F(5));
        assert_eq!(key("space").code, KeyCode::Char(' '));
    }

    #[test]
    fn test_parse_key_rejects_unknown() {
        assert!(parse_key("hyper+x").is_none());
        assert!(parse_key("f13").is_none());
        assert!(parse_key("nonsense").is_none());
    }

    #[test]
    fn test_render_harness_plain_text() {
        let mut render = RenderHarness::new(10, 2);
        let output = render.render_to_string_plain(|frame| {
            frame.render_widget(Paragraph::new("hello"), frame.area());
        });
        assert_eq!(output, "hello\n");
    }

    #[test]
    fn test_action_assertions() {
        let actions = vec![1, 2, 3];
        actions.assert_count(3);
        actions.assert_first(1);
        actions.assert_contains(3);

        let none: Vec<i32> = vec![];
        none.assert_empty();
    }
}
