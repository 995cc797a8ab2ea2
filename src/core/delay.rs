//! # Per-Character Delays
//!
//! How long the animation waits between two steps. A delay is either a
//! fixed number of milliseconds or an inclusive `[min, max]` range that is
//! sampled once per step.
//!
//! Values are never rejected: negative inputs clamp to zero and a reversed
//! range is put back in order. The only fallible path is parsing text
//! (CLI flags, environment variables), which returns [`DelayParseError`].

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Default lower bound for typing and deleting, in milliseconds.
pub const DEFAULT_DELAY_MIN_MS: u64 = 70;
/// Default upper bound for typing and deleting, in milliseconds.
pub const DEFAULT_DELAY_MAX_MS: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawDelay", into = "RawDelay")]
pub enum Delay {
    /// Always wait exactly this many milliseconds.
    Fixed(u64),
    /// Wait a uniformly drawn number of milliseconds in `min..=max`.
    Range { min: u64, max: u64 },
}

impl Default for Delay {
    fn default() -> Self {
        Delay::Range {
            min: DEFAULT_DELAY_MIN_MS,
            max: DEFAULT_DELAY_MAX_MS,
        }
    }
}

fn clamp_ms(ms: i64) -> u64 {
    ms.max(0) as u64
}

impl Delay {
    /// A fixed delay. Negative values become zero.
    pub fn fixed(ms: i64) -> Self {
        Delay::Fixed(clamp_ms(ms))
    }

    /// A ranged delay. Negative bounds become zero, reversed bounds are swapped.
    pub fn range(a: i64, b: i64) -> Self {
        let (a, b) = (clamp_ms(a), clamp_ms(b));
        Delay::Range {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// No delay at all.
    pub fn zero() -> Self {
        Delay::Fixed(0)
    }

    /// Inclusive bounds in milliseconds.
    pub fn bounds(&self) -> (u64, u64) {
        match *self {
            Delay::Fixed(ms) => (ms, ms),
            Delay::Range { min, max } => (min.min(max), min.max(max)),
        }
    }

    /// Draws one delay. A single uniform draw over `min..=max`.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Duration {
        let (min, max) = self.bounds();
        let ms = if min == max {
            min
        } else {
            rng.random_range(min..=max)
        };
        Duration::from_millis(ms)
    }
}

impl fmt::Display for Delay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delay::Fixed(ms) => write!(f, "{ms}ms"),
            Delay::Range { min, max } => write!(f, "{min}..={max}ms"),
        }
    }
}

// ============================================================================
// Serde shape: `80` or `[70, 100]`
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
enum RawDelay {
    Fixed(i64),
    Range([i64; 2]),
}

impl From<RawDelay> for Delay {
    fn from(raw: RawDelay) -> Self {
        match raw {
            RawDelay::Fixed(ms) => Delay::fixed(ms),
            RawDelay::Range([a, b]) => Delay::range(a, b),
        }
    }
}

impl From<Delay> for RawDelay {
    fn from(delay: Delay) -> Self {
        match delay {
            Delay::Fixed(ms) => RawDelay::Fixed(ms as i64),
            Delay::Range { min, max } => RawDelay::Range([min as i64, max as i64]),
        }
    }
}

// ============================================================================
// Parsing: `80`, `70..100`, `70..=100`
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelayParseError {
    input: String,
}

impl fmt::Display for DelayParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid delay '{}': expected milliseconds like 80 or a range like 70..100",
            self.input
        )
    }
}

impl std::error::Error for DelayParseError {}

impl FromStr for Delay {
    type Err = DelayParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || DelayParseError {
            input: s.to_string(),
        };
        let trimmed = s.trim();

        match trimmed.split_once("..") {
            Some((lo, hi)) => {
                let hi = hi.strip_prefix('=').unwrap_or(hi);
                let lo: i64 = lo.trim().parse().map_err(|_| err())?;
                let hi: i64 = hi.trim().parse().map_err(|_| err())?;
                Ok(Delay::range(lo, hi))
            }
            None => trimmed.parse().map(Delay::fixed).map_err(|_| err()),
        }
    }
}
