//! # TUI Adapter
//!
//! The ratatui-specific layer. Reads the latest frame of a [`Feed`], draws
//! it, and turns key presses into input for the running animation.
//!
//! This is the only module that knows about ratatui; [`plain`] is the
//! no-frills alternative that writes one line to stdout.
//!
//! ## Redraw Strategy
//!
//! Frames come from tokio tasks at their own pace, so the loop does not
//! wait on them: it redraws every ~33ms, snapshotting the feed into a
//! [`ui::View`] each time. The cursor blinks off that same clock.

mod component;
mod components;
mod event;
pub mod feed;
pub mod plain;
mod ui;

pub use feed::Feed;
pub use plain::run_plain;

use log::{debug, info};
use ratatui::DefaultTerminal;
use std::io;
use std::time::{Duration, Instant};

use crate::tui::component::EventHandler;
use crate::tui::components::{InputEvent, InputLine};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::ui::View;

const FRAME_INTERVAL: Duration = Duration::from_millis(33);
const BLINK_PERIOD_MS: u128 = 530;

/// TUI-specific presentation state
pub struct TuiState {
    pub input: InputLine,
    started: Instant,
}

impl TuiState {
    pub fn new(input_hint: &str) -> Self {
        Self {
            input: InputLine::new(input_hint),
            started: Instant::now(),
        }
    }

    /// Solid while the animation moves, blinking once it rests.
    fn cursor_visible(&self, animating: bool) -> bool {
        animating || (self.started.elapsed().as_millis() / BLINK_PERIOD_MS) % 2 == 0
    }
}

fn capture(feed: &Feed, tui: &TuiState) -> View {
    let animating = feed.is_animating();
    View {
        label: feed.label().to_string(),
        status: feed.status(),
        text: feed.current(),
        cursor_visible: tui.cursor_visible(animating),
    }
}

/// Runs the full-screen demo until Esc or Ctrl+C.
pub fn run(mut feed: Feed) -> io::Result<()> {
    let mut tui = TuiState::new(feed.input_hint());
    let mut terminal = ratatui::init();
    info!("TUI started ({})", feed.label());

    let result = event_loop(&mut terminal, &mut feed, &mut tui);

    ratatui::restore();
    info!("TUI stopped");
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    feed: &mut Feed,
    tui: &mut TuiState,
) -> io::Result<()> {
    loop {
        let view = capture(feed, tui);
        terminal.draw(|f| ui::draw_ui(f, &view, tui))?;

        // Process first event + drain all pending events before next draw
        let mut next = poll_event_timeout(FRAME_INTERVAL)?;
        while let Some(event) = next {
            if event == TuiEvent::Quit {
                return Ok(());
            }
            if let Some(InputEvent::Submit(line)) = tui.input.handle_event(&event) {
                debug!("Submitted {:?}", line);
                feed.submit(line);
            }
            next = poll_event_immediate()?;
        }
    }
}
