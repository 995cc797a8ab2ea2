//! # Animation Driver
//!
//! Puts an [`Animation`] on the clock. One session = one tokio task that
//! sleeps, ticks, publishes, and sleeps again until the animation settles
//! or the session is cancelled.
//!
//! ```text
//! start() ──tick──▶ publish ──Wake::After(d)──▶ spawn ─┐
//!                      │                               │
//!                      └─Wake::Never──▶ done           ▼
//!                                          ┌── sleep(d) ◀──┐
//!                                          ▼               │
//!                                        tick ─▶ publish ──┘
//! ```
//!
//! ## Cancellation
//!
//! Every session owns a flag. The loop reads it under the machine lock
//! right before ticking and publishing, and `cancel()` sets it under the
//! same lock, so once `cancel()` returns nothing more is published. The
//! flag is also checked before each re-arm; the task is aborted after.
//!
//! Published values go through a `tokio::sync::watch` channel: readers see
//! the latest text, which is all a renderer needs.

mod sequence;
mod text;

pub use sequence::{SequenceAnimator, animate_sequence};
pub use text::{TextAnimator, animate_text};

use log::{debug, trace, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::core::animation::{Animation, Wake};

pub(crate) type Publisher = Arc<watch::Sender<Option<String>>>;

/// Seeded when asked, otherwise seeded from the thread RNG.
pub(crate) fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

/// Locks a machine, recovering the state if a previous holder panicked.
pub(crate) fn lock<A>(machine: &Mutex<A>) -> std::sync::MutexGuard<'_, A> {
    machine.lock().unwrap_or_else(PoisonError::into_inner)
}

/// One tick under the lock. `None` means stop: settled or cancelled.
fn advance<A: Animation>(
    machine: &Mutex<A>,
    publisher: &watch::Sender<Option<String>>,
    cancelled: &AtomicBool,
    rng: &mut StdRng,
) -> Option<Duration> {
    let mut machine = lock(machine);
    if cancelled.load(Ordering::Acquire) {
        return None;
    }
    let tick = machine.tick(rng);
    trace!("tick: {:?}", tick);
    publisher.send_replace(tick.text);
    match tick.wake {
        Wake::After(delay) => Some(delay),
        Wake::Never => None,
    }
}

async fn run_loop<A: Animation>(
    machine: Arc<Mutex<A>>,
    publisher: Publisher,
    cancelled: Arc<AtomicBool>,
    mut rng: StdRng,
    mut delay: Duration,
    label: &'static str,
) {
    loop {
        if cancelled.load(Ordering::Acquire) {
            return;
        }
        tokio::time::sleep(delay).await;
        match advance(&machine, &publisher, &cancelled, &mut rng) {
            Some(next) => delay = next,
            None => {
                debug!("{label}: session ended");
                return;
            }
        }
    }
}

/// A running (or settled) session over a shared machine.
pub(crate) struct Runner<A> {
    machine: Arc<Mutex<A>>,
    cancelled: Arc<AtomicBool>,
    task: Option<JoinHandle<()>>,
    label: &'static str,
}

impl<A: Animation + Send + 'static> Runner<A> {
    /// Ticks once right away, then spawns the timer loop if the animation
    /// wants to wake again. Settling on the first tick schedules nothing.
    pub(crate) fn start(
        machine: Arc<Mutex<A>>,
        publisher: Publisher,
        mut rng: StdRng,
        label: &'static str,
    ) -> Self {
        let cancelled = Arc::new(AtomicBool::new(false));
        debug!("{label}: session started");

        let task = match advance(&machine, &publisher, &cancelled, &mut rng) {
            Some(delay) => Some(tokio::spawn(run_loop(
                Arc::clone(&machine),
                publisher,
                Arc::clone(&cancelled),
                rng,
                delay,
                label,
            ))),
            None => {
                debug!("{label}: settled on first tick");
                None
            }
        };

        Self {
            machine,
            cancelled,
            task,
            label,
        }
    }
}

impl<A> Runner<A> {
    pub(crate) fn machine(&self) -> &Arc<Mutex<A>> {
        &self.machine
    }

    /// True while a wake-up is scheduled.
    pub(crate) fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Waits for the session to settle. Cancel-safe: dropping this future
    /// leaves the session untouched.
    pub(crate) async fn settle(&mut self) {
        if let Some(task) = self.task.as_mut() {
            if let Err(e) = task.await {
                if e.is_panic() {
                    warn!("{}: animation task panicked: {}", self.label, e);
                }
            }
            self.task = None;
        }
    }

    /// Stops the session. No publication happens after this returns.
    pub(crate) fn cancel(&mut self) {
        {
            let _guard = lock(&self.machine);
            self.cancelled.store(true, Ordering::Release);
        }
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("{}: session cancelled", self.label);
        }
    }
}

impl<A> Drop for Runner<A> {
    fn drop(&mut self) {
        self.cancel();
    }
}
