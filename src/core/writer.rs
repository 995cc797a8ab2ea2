//! # Typewriter Stepper
//!
//! The three-state machine behind every animation.
//!
//! ```text
//!              set_target (current non-empty)
//!     ┌──────┐ ─────────────────────────────▶ ┌──────────┐
//!     │ Idle │                                │ Deleting │
//!     └──────┘ ◀──┐                           └────┬─────┘
//!        │        │ current == target              │ current empty
//!        │        │                                ▼
//!        │     ┌──┴─────┐                     ┌─────────┐
//!        └────▶│ Typing │ ◀───────────────────┤ (switch)│
//!  set_target  └────────┘                     └─────────┘
//!  (current empty)
//! ```
//!
//! Each `step()` moves exactly one character. Text is handled per `char`,
//! so multi-byte characters are typed and erased whole.
//!
//! Invariant: `mode == Idle` only when `current == target`.

use rand::Rng;
use std::time::Duration;

use super::animation::{Animation, Tick};
use super::options::TypewriterOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Idle,
    Typing,
    Deleting,
}

#[derive(Debug, Clone, Default)]
pub struct Typewriter {
    current: String,
    target: String,
    mode: Mode,
    options: TypewriterOptions,
}

impl Typewriter {
    pub fn new(options: TypewriterOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Text currently on display.
    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_idle(&self) -> bool {
        self.mode == Mode::Idle
    }

    /// Points the animation at a new target. Setting the current target again
    /// changes nothing.
    pub fn set_target(&mut self, target: impl Into<String>) {
        let target = target.into();
        if target == self.target {
            return;
        }
        self.target = target;
        self.mode = if self.current.is_empty() {
            Mode::Typing
        } else {
            Mode::Deleting
        };
    }

    /// Advances one character and returns the text to display.
    pub fn step(&mut self) -> &str {
        match self.mode {
            Mode::Idle => {}
            Mode::Deleting => {
                self.current.pop();
                if self.current.is_empty() {
                    self.mode = Mode::Typing;
                }
            }
            Mode::Typing => self.type_next(),
        }
        &self.current
    }

    fn type_next(&mut self) {
        if self.current == self.target {
            self.mode = Mode::Idle;
            return;
        }

        let next = self
            .target
            .strip_prefix(self.current.as_str())
            .and_then(|rest| rest.chars().next());

        match next {
            Some(c) => {
                self.current.push(c);
                if self.current == self.target {
                    self.mode = Mode::Idle;
                }
            }
            // Off the target's prefix; erase back to a common start.
            None => self.mode = Mode::Deleting,
        }
    }

    /// Delay before the next step, drawn from the range for the current mode.
    pub fn next_delay<R: Rng>(&self, rng: &mut R) -> Duration {
        match self.mode {
            Mode::Deleting => self.options.deleting_delay.sample(rng),
            Mode::Idle | Mode::Typing => self.options.typing_delay.sample(rng),
        }
    }
}

impl Animation for Typewriter {
    fn tick<R: Rng>(&mut self, rng: &mut R) -> Tick {
        let text = self.step().to_string();
        if self.is_idle() {
            Tick::settled(Some(text))
        } else {
            Tick::rearm(Some(text), self.next_delay(rng))
        }
    }
}
