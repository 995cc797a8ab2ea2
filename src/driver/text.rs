//! # Single-Target Animator
//!
//! Drives one [`Typewriter`] toward a target that can change at any time.
//! The stepper outlives individual sessions: retargeting cancels the
//! running session, points the same stepper at the new text and starts a
//! fresh one, so whatever is on screen is erased before the new text types.

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::{Arc, Mutex};
use tokio::sync::watch;

use super::{Publisher, Runner, lock, rng_from_seed};
use crate::core::options::TypewriterOptions;
use crate::core::writer::{Mode, Typewriter};

/// Handle to a running single-target animation.
///
/// Dropping the handle cancels the animation.
pub struct TextAnimator {
    writer: Arc<Mutex<Typewriter>>,
    publisher: Publisher,
    receiver: watch::Receiver<Option<String>>,
    runner: Option<Runner<Typewriter>>,
    rng: StdRng,
}

/// Starts animating toward `target`.
///
/// The first step runs before this returns; later steps run on tokio timers,
/// so this must be called inside a tokio runtime unless the target is empty.
pub fn animate_text(target: impl Into<String>, options: TypewriterOptions) -> TextAnimator {
    let (tx, rx) = watch::channel(None);
    let mut animator = TextAnimator {
        writer: Arc::new(Mutex::new(Typewriter::new(options))),
        publisher: Arc::new(tx),
        receiver: rx,
        runner: None,
        rng: rng_from_seed(options.seed),
    };
    animator.restart(target.into());
    animator
}

impl TextAnimator {
    /// Retargets the animation. The same target again is a no-op unless the
    /// animation was cancelled, in which case it resumes.
    pub fn set_target(&mut self, target: impl Into<String>) {
        let target = target.into();
        if self.runner.is_some() && lock(&self.writer).target() == target {
            return;
        }
        self.restart(target);
    }

    fn restart(&mut self, target: String) {
        if let Some(mut runner) = self.runner.take() {
            runner.cancel();
        }
        debug!("text: targeting {:?}", target);
        lock(&self.writer).set_target(target);

        let rng = StdRng::from_rng(&mut self.rng);
        self.runner = Some(Runner::start(
            Arc::clone(&self.writer),
            Arc::clone(&self.publisher),
            rng,
            "text",
        ));
    }

    /// Last published text. `None` until the first step has run.
    pub fn current(&self) -> Option<String> {
        self.receiver.borrow().clone()
    }

    /// A receiver that is notified on every published step.
    pub fn subscribe(&self) -> watch::Receiver<Option<String>> {
        self.publisher.subscribe()
    }

    pub fn target(&self) -> String {
        lock(&self.writer).target().to_string()
    }

    pub fn mode(&self) -> Mode {
        lock(&self.writer).mode()
    }

    /// True while a step is scheduled.
    pub fn is_animating(&self) -> bool {
        self.runner.as_ref().is_some_and(|r| r.is_running())
    }

    /// Resolves once the text matches the target. Cancel-safe.
    pub async fn settle(&mut self) {
        if let Some(runner) = self.runner.as_mut() {
            runner.settle().await;
        }
    }

    /// Stops the animation. Nothing is published after this returns.
    pub fn cancel(&mut self) {
        if let Some(mut runner) = self.runner.take() {
            runner.cancel();
        }
    }
}
