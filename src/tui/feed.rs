//! # Feed
//!
//! The one animation an adapter is showing. Both adapters (full-screen and
//! plain) read frames through it, and the TUI routes submitted input to it.

use tokio::sync::watch;

use crate::core::writer::Mode;
use crate::driver::{SequenceAnimator, TextAnimator};

pub enum Feed {
    Text(TextAnimator),
    Sequence(SequenceAnimator),
}

impl Feed {
    pub fn current(&self) -> Option<String> {
        match self {
            Feed::Text(animator) => animator.current(),
            Feed::Sequence(animator) => animator.current(),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<String>> {
        match self {
            Feed::Text(animator) => animator.subscribe(),
            Feed::Sequence(animator) => animator.subscribe(),
        }
    }

    pub fn is_animating(&self) -> bool {
        match self {
            Feed::Text(animator) => animator.is_animating(),
            Feed::Sequence(animator) => animator.is_animating(),
        }
    }

    pub async fn settle(&mut self) {
        match self {
            Feed::Text(animator) => animator.settle().await,
            Feed::Sequence(animator) => animator.settle().await,
        }
    }

    /// Applies a submitted line: a new target for text, an extra word for a
    /// sequence (which restarts it from the first word).
    pub fn submit(&mut self, line: String) {
        match self {
            Feed::Text(animator) => animator.set_target(line),
            Feed::Sequence(animator) => {
                let mut words = animator.words().to_vec();
                words.push(line);
                let options = *animator.options();
                animator.set_words(words, options);
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Feed::Text(_) => "text",
            Feed::Sequence(_) => "sequence",
        }
    }

    /// Short progress description for the title bar.
    pub fn status(&self) -> String {
        match self {
            Feed::Text(animator) => {
                let mode = match animator.mode() {
                    Mode::Idle => "idle",
                    Mode::Typing => "typing",
                    Mode::Deleting => "deleting",
                };
                format!("{mode} → {:?}", animator.target())
            }
            Feed::Sequence(animator) => {
                let count = animator.words().len();
                if count == 0 {
                    return "no words".to_string();
                }
                let flow = if animator.options().looping { "looping" } else { "once" };
                let state = if animator.is_animating() { "" } else { " · done" };
                format!("word {}/{count} · {flow}{state}", animator.index() + 1)
            }
        }
    }

    /// What Enter does, shown on the input line.
    pub fn input_hint(&self) -> &'static str {
        match self {
            Feed::Text(_) => "Enter: retarget · Esc: quit",
            Feed::Sequence(_) => "Enter: add word · Esc: quit",
        }
    }
}
