//! Typewriter text animation: reveal a string one character at a time,
//! erase it, and type the next one.
//!
//! ```rust,ignore
//! let mut hello = typewriter::animate_text("hello", TypewriterOptions::default());
//! hello.settle().await;
//! assert_eq!(hello.current().as_deref(), Some("hello"));
//! ```

use clap::ValueEnum;

pub mod core;
pub mod driver;
pub mod tui;

#[cfg(test)]
pub mod test_support;

pub use crate::core::delay::Delay;
pub use crate::core::options::{SequenceOptions, TypewriterOptions};
pub use crate::core::writer::{Mode, Typewriter};
pub use driver::{SequenceAnimator, TextAnimator, animate_sequence, animate_text};

#[derive(Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Output {
    /// Full-screen terminal UI
    #[default]
    Tui,
    /// One rewritten line on stdout
    Plain,
}
