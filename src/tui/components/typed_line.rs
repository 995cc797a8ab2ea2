//! # TypedLine Component
//!
//! The animated text itself, centred in its area with a block cursor that
//! blinks while the caller says so.
//!
//! Text wider than the area is cut from the left, so the characters being
//! typed or erased stay on screen.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthChar;

use crate::tui::component::Component;

pub const CURSOR: &str = "▌";

pub struct TypedLine {
    /// Latest published text; `None` when there is nothing to show
    pub text: Option<String>,
    pub cursor_visible: bool,
}

impl TypedLine {
    pub fn new(text: Option<String>, cursor_visible: bool) -> Self {
        Self {
            text,
            cursor_visible,
        }
    }
}

/// Longest suffix of `text` whose display width fits in `width` columns.
pub fn visible_tail(text: &str, width: usize) -> &str {
    let mut used = 0;
    for (idx, c) in text.char_indices().rev() {
        used += c.width().unwrap_or(0);
        if used > width {
            return &text[idx + c.len_utf8()..];
        }
    }
    text
}

impl Component for TypedLine {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [row] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(area);

        let line = match &self.text {
            Some(text) => {
                // One column stays reserved for the cursor
                let room = (row.width as usize).saturating_sub(1);
                let cursor = if self.cursor_visible { CURSOR } else { " " };
                Line::from(vec![
                    Span::styled(
                        visible_tail(text, room).to_string(),
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(cursor, Style::default().fg(Color::Green)),
                ])
            }
            None => Line::from(Span::styled(
                "(nothing to show)",
                Style::default().fg(Color::DarkGray),
            )),
        };

        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), row);
    }
}
