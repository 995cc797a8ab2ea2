//! # Animation Options
//!
//! Plain value types describing how an animation is timed. Both structs are
//! `PartialEq` so a driver can tell whether the caller actually changed
//! anything before restarting.

use std::time::Duration;

use super::delay::Delay;

/// Default dwell time between two words of a sequence.
pub const DEFAULT_PAUSE_MS: u64 = 1700;

/// Timing for a single-target animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TypewriterOptions {
    pub typing_delay: Delay,
    pub deleting_delay: Delay,
    /// Seed for the delay RNG. `None` seeds from the thread RNG.
    pub seed: Option<u64>,
}

impl TypewriterOptions {
    /// Options with no delay between steps. Handy for tests and scripted output.
    pub fn instant() -> Self {
        Self {
            typing_delay: Delay::zero(),
            deleting_delay: Delay::zero(),
            seed: None,
        }
    }

    pub fn with_typing_delay(mut self, delay: Delay) -> Self {
        self.typing_delay = delay;
        self
    }

    pub fn with_deleting_delay(mut self, delay: Delay) -> Self {
        self.deleting_delay = delay;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Timing and flow for a sequence animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceOptions {
    pub typing_delay: Delay,
    pub deleting_delay: Delay,
    /// Dwell time after a word is fully typed.
    pub pause: Duration,
    /// Wrap around to the first word after the last one.
    pub looping: bool,
    pub seed: Option<u64>,
}

impl Default for SequenceOptions {
    fn default() -> Self {
        Self {
            typing_delay: Delay::default(),
            deleting_delay: Delay::default(),
            pause: Duration::from_millis(DEFAULT_PAUSE_MS),
            looping: true,
            seed: None,
        }
    }
}

impl SequenceOptions {
    pub fn instant() -> Self {
        Self {
            typing_delay: Delay::zero(),
            deleting_delay: Delay::zero(),
            pause: Duration::ZERO,
            ..Self::default()
        }
    }

    /// Sets the pause in milliseconds; negative values clamp to zero.
    pub fn with_pause_ms(mut self, ms: i64) -> Self {
        self.pause = Duration::from_millis(ms.max(0) as u64);
        self
    }

    pub fn with_looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn with_typing_delay(mut self, delay: Delay) -> Self {
        self.typing_delay = delay;
        self
    }

    pub fn with_deleting_delay(mut self, delay: Delay) -> Self {
        self.deleting_delay = delay;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The subset that drives each individual word.
    pub fn writer_options(&self) -> TypewriterOptions {
        TypewriterOptions {
            typing_delay: self.typing_delay,
            deleting_delay: self.deleting_delay,
            seed: self.seed,
        }
    }
}
