//! # InputLine Component
//!
//! Single-line text input under the animation.
//!
//! ## Responsibilities
//!
//! - Capture typed and pasted text
//! - Handle Backspace
//! - Emit `InputEvent::Submit` on Enter (blank lines are ignored)
//!
//! The buffer is internal state; the title is a prop set by the parent so
//! it can say what Enter does for the running animation.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::components::typed_line::visible_tail;
use crate::tui::event::TuiEvent;

/// High-level events emitted by the InputLine
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User submitted the text (Enter pressed)
    Submit(String),
}

pub struct InputLine {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Border title (Prop)
    pub title: String,
}

impl InputLine {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            buffer: String::new(),
            title: title.into(),
        }
    }
}

impl Component for InputLine {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(3) as usize;
        let visible = visible_tail(&self.buffer, inner_width);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(self.title.as_str());
        let input = Paragraph::new(visible)
            .block(block)
            .style(Style::default().fg(Color::Cyan));
        frame.render_widget(input, area);

        let cursor_x = area.x + 1 + visible.width() as u16;
        frame.set_cursor_position(Position::new(cursor_x, area.y + 1));
    }
}

impl EventHandler for InputLine {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                None
            }
            TuiEvent::Paste(text) => {
                // Single line: newlines become spaces
                self.buffer.extend(text.chars().map(|c| if c == '\n' { ' ' } else { c }));
                None
            }
            TuiEvent::Backspace => {
                self.buffer.pop();
                None
            }
            TuiEvent::Submit => {
                if self.buffer.trim().is_empty() {
                    return None;
                }
                Some(InputEvent::Submit(std::mem::take(&mut self.buffer)))
            }
            TuiEvent::Quit => None,
        }
    }
}
