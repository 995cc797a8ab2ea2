use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{TitleBar, TypedLine};

/// Everything the frame shows that comes from the animation, captured once
/// per draw so the render pass never touches a lock.
#[derive(Debug, Clone, Default)]
pub struct View {
    pub label: String,
    pub status: String,
    pub text: Option<String>,
    pub cursor_visible: bool,
}

pub fn draw_ui(frame: &mut Frame, view: &View, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(3)]);
    let [title_area, main_area, input_area] = layout.areas(frame.area());

    TitleBar::new(view.label.clone(), view.status.clone()).render(frame, title_area);
    TypedLine::new(view.text.clone(), view.cursor_visible).render(frame, main_area);
    tui.input.render(frame, input_area);
}
