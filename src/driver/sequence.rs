//! # Sequence Animator
//!
//! Drives a [`Sequence`] through its word list.
//!
//! ## Reset policy
//!
//! `set_words` compares the new words and options with the running ones by
//! value. Equal input is ignored. Anything else cancels the running session
//! on the spot, even halfway through a word or a pause, and starts over at
//! index 0 with a fresh stepper, so the display restarts from empty.

use log::debug;
use std::sync::{Arc, Mutex};
use tokio::sync::watch;

use super::{Publisher, Runner, lock, rng_from_seed};
use crate::core::options::SequenceOptions;
use crate::core::sequence::Sequence;

/// Handle to a running word-sequence animation.
///
/// Dropping the handle cancels the animation.
pub struct SequenceAnimator {
    words: Vec<String>,
    options: SequenceOptions,
    publisher: Publisher,
    receiver: watch::Receiver<Option<String>>,
    runner: Option<Runner<Sequence>>,
}

/// Starts cycling through `words`.
///
/// An empty list publishes `None` and schedules nothing. Otherwise this must
/// be called inside a tokio runtime.
pub fn animate_sequence<I, S>(words: I, options: SequenceOptions) -> SequenceAnimator
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let (tx, rx) = watch::channel(None);
    let mut animator = SequenceAnimator {
        words: words.into_iter().map(Into::into).collect(),
        options,
        publisher: Arc::new(tx),
        receiver: rx,
        runner: None,
    };
    animator.restart();
    animator
}

impl SequenceAnimator {
    /// Replaces the word list and options, restarting from the first word if
    /// either changed.
    pub fn set_words<I, S>(&mut self, words: I, options: SequenceOptions)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if self.runner.is_some() && words == self.words && options == self.options {
            return;
        }
        self.words = words;
        self.options = options;
        self.restart();
    }

    fn restart(&mut self) {
        if let Some(mut runner) = self.runner.take() {
            runner.cancel();
        }
        debug!(
            "sequence: starting over {} word(s), loop={}",
            self.words.len(),
            self.options.looping
        );
        let machine = Sequence::new(self.words.clone(), self.options);
        self.runner = Some(Runner::start(
            Arc::new(Mutex::new(machine)),
            Arc::clone(&self.publisher),
            rng_from_seed(self.options.seed),
            "sequence",
        ));
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn options(&self) -> &SequenceOptions {
        &self.options
    }

    /// Index of the word currently being typed, erased or paused on.
    pub fn index(&self) -> usize {
        self.runner
            .as_ref()
            .map(|r| lock(r.machine()).index())
            .unwrap_or(0)
    }

    /// Last published text. `None` for an empty word list.
    pub fn current(&self) -> Option<String> {
        self.receiver.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<String>> {
        self.publisher.subscribe()
    }

    /// True while a step or a pause is scheduled.
    pub fn is_animating(&self) -> bool {
        self.runner.as_ref().is_some_and(|r| r.is_running())
    }

    /// Resolves once the sequence stops. Never resolves while looping over a
    /// non-empty list. Cancel-safe.
    pub async fn settle(&mut self) {
        if let Some(runner) = self.runner.as_mut() {
            runner.settle().await;
        }
    }

    pub fn cancel(&mut self) {
        if let Some(mut runner) = self.runner.take() {
            runner.cancel();
        }
    }
}
