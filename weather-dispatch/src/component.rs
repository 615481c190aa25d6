//! Component trait for pure UI elements

use ratatui::{layout::Rect, Frame};

use crate::event::EventKind;

/// A UI element that renders from props and emits actions
///
/// Rules:
/// 1. Props carry all read-only data needed for rendering
/// 2. `handle_event` returns actions and never mutates app state
/// 3. `render` is a function of props plus internal UI state (cursor position)
///
/// Focus is passed through props rather than through an event context.
pub trait Component<A> {
    /// Data required to render the component (read-only)
    type Props<'a>;

    /// Handle an event and return actions to dispatch
    ///
    /// Returns anything iterable: `None`, `Some(action)`, `vec![...]`.
    /// Render-only components keep the default.
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        None::<A>
    }

    /// Render the component to the frame
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
