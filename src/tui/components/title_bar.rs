//! # TitleBar Component
//!
//! Single-line status bar above the animation.
//!
//! Stateless: it receives everything as props and renders them. The
//! label says which animation is running, the status says where it is
//! (`typing`, `word 2/3`, `done`, ...).

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    /// Which animation is running (e.g. "text", "sequence")
    pub label: String,
    /// Where the animation is (e.g. "typing", "word 2/3 · looping")
    pub status: String,
}

impl TitleBar {
    pub fn new(label: String, status: String) -> Self {
        Self { label, status }
    }

    fn line(&self) -> Line<'_> {
        let mut spans = vec![
            Span::styled(
                "Typewriter",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" ({})", self.label)),
        ];
        if !self.status.is_empty() {
            spans.push(Span::styled(
                format!(" | {}", self.status),
                Style::default().fg(Color::DarkGray),
            ));
        }
        Line::from(spans)
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.line(), area);
    }
}
