use ratatui::Frame;
use ratatui::layout::Rect;

use crate::tui::event::TuiEvent;

/// Something that draws itself into a region of the frame.
///
/// Display-only pieces (title bar, typed line) are rebuilt from a [`View`]
/// every frame. The input line lives in `TuiState` and also keeps its
/// cursor position up to date while rendering, hence `&mut self`.
///
/// [`View`]: crate::tui::ui::View
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that reacts to key presses.
pub trait EventHandler {
    /// What the component reports back to the loop.
    type Event;

    /// Returns `Some` only when the loop has something to act on.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
