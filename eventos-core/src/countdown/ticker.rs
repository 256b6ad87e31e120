//! Periodic re-evaluation of a countdown on the tokio runtime.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use super::clock::Clock;
use super::engine::{Countdown, CountdownState};
use crate::constants::TICK_PERIOD;
use crate::error::TargetError;

/// Start ticking toward `target_text`.
///
/// The first evaluation runs before this function returns; later ones run
/// once per [`TICK_PERIOD`] on a spawned task until the target is reached or
/// the returned handle is cancelled or dropped. An absent or invalid target
/// calls `on_error` and never ticks.
///
/// Must be called from within a tokio runtime.
pub fn start_countdown<T, E>(
    target_text: Option<&str>,
    clock: Arc<dyn Clock>,
    mut on_tick: T,
    on_error: E,
) -> CountdownHandle
where
    T: FnMut(&CountdownState) + Send + 'static,
    E: FnOnce(&TargetError),
{
    let mut countdown = match Countdown::parse(target_text) {
        Ok(countdown) => countdown,
        Err(err) => {
            on_error(&err);
            return CountdownHandle::idle();
        }
    };

    let first = countdown.tick(clock.now());
    on_tick(&first);
    if first.expired {
        return CountdownHandle::idle();
    }

    let task = tokio::spawn(async move {
        let mut interval = tokio::time::interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            interval.tick().await;
            let state = countdown.tick(clock.now());
            on_tick(&state);
            if state.expired {
                break;
            }
        }
    });

    CountdownHandle { task: Some(task) }
}

/// Owns the ticker of one running countdown.
///
/// Cancelling consumes the handle, and dropping it cancels too, so a ticker
/// can never outlive the display it writes into.
#[must_use = "dropping the handle cancels the countdown"]
#[derive(Debug)]
pub struct CountdownHandle {
    task: Option<JoinHandle<()>>,
}

impl CountdownHandle {
    fn idle() -> Self {
        CountdownHandle { task: None }
    }

    /// Whether a ticker is still scheduled.
    pub fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    pub fn cancel(mut self) {
        self.abort();
    }

    /// Wait until the countdown expires on its own.
    ///
    /// Returns immediately for countdowns that never started ticking. `false`
    /// means the ticker died instead, e.g. because a tick callback panicked.
    pub async fn finished(&mut self) -> bool {
        let Some(task) = self.task.as_mut() else {
            return true;
        };

        let outcome = task.await;
        self.task = None;
        match outcome {
            Ok(()) => true,
            Err(err) => {
                if err.is_panic() {
                    tracing::warn!(error = %err, "countdown ticker panicked");
                }
                false
            }
        }
    }

    fn abort(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for CountdownHandle {
    fn drop(&mut self) {
        self.abort();
    }
}

/// A display position that shows at most one countdown at a time.
#[derive(Debug, Default)]
pub struct CountdownSlot {
    handle: Option<CountdownHandle>,
}

impl CountdownSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a countdown here, cancelling whatever this slot was running.
    pub fn start<T, E>(
        &mut self,
        target_text: Option<&str>,
        clock: Arc<dyn Clock>,
        on_tick: T,
        on_error: E,
    ) where
        T: FnMut(&CountdownState) + Send + 'static,
        E: FnOnce(&TargetError),
    {
        self.stop();
        self.handle = Some(start_countdown(target_text, clock, on_tick, on_error));
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.cancel();
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle.as_ref().is_some_and(CountdownHandle::is_active)
    }

    pub async fn finished(&mut self) -> bool {
        match self.handle.as_mut() {
            Some(handle) => handle.finished().await,
            None => true,
        }
    }
}
