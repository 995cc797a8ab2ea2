//! # Animation Ticks
//!
//! A timer-driven animation reduced to a pure transition function:
//!
//! ```text
//! state  →  tick(rng)  →  (text to publish, when to wake next)
//! ```
//!
//! The driver owns the clock. Anything implementing [`Animation`] knows
//! nothing about tokio, timers or cancellation, which keeps every rule
//! testable by calling `tick()` in a plain loop.

use rand::Rng;
use std::time::Duration;

/// When the driver should call `tick()` again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wake {
    After(Duration),
    /// The animation has settled; schedule nothing.
    Never,
}

/// The outcome of one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
    /// Text to publish. `None` means "nothing to show".
    pub text: Option<String>,
    pub wake: Wake,
}

impl Tick {
    /// Publish `text` and wake again after `delay`.
    pub fn rearm(text: Option<String>, delay: Duration) -> Self {
        Self {
            text,
            wake: Wake::After(delay),
        }
    }

    /// Publish `text` and stop.
    pub fn settled(text: Option<String>) -> Self {
        Self {
            text,
            wake: Wake::Never,
        }
    }

    pub fn is_settled(&self) -> bool {
        self.wake == Wake::Never
    }
}

/// A state machine advanced one discrete step at a time.
pub trait Animation {
    fn tick<R: Rng>(&mut self, rng: &mut R) -> Tick;
}
