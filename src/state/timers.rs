//! Delayed form actions
//!
//! The form needs two one-shot timers after a successful submit. The
//! controller only asks a [`Scheduler`] for them; the app owns a
//! [`TokioScheduler`] whose tasks report back over a channel so every
//! effect still runs on the UI loop.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

/// Purpose of a pending timer. At most one timer per purpose is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Hide the success banner
    HideBanner,
    /// Reset the whole form
    ResetForm,
}

/// Schedules one-shot timers by purpose
#[cfg_attr(test, mockall::automock)]
pub trait Scheduler {
    /// Arm the timer for `timer`, replacing any pending one of that kind
    fn schedule(&mut self, timer: TimerKind, delay: Duration);

    /// Disarm the timer for `timer` if it is pending
    fn cancel(&mut self, timer: TimerKind);
}

/// Scheduler backed by tokio tasks
#[derive(Debug)]
pub struct TokioScheduler {
    tx: UnboundedSender<TimerKind>,
    handles: HashMap<TimerKind, JoinHandle<()>>,
}

impl TokioScheduler {
    /// Create a scheduler and the receiver its expired timers arrive on
    pub fn new() -> (Self, UnboundedReceiver<TimerKind>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let scheduler = Self {
            tx,
            handles: HashMap::new(),
        };
        (scheduler, rx)
    }

    /// Whether a timer of this kind is still running
    #[cfg(test)]
    pub fn is_pending(&self, timer: TimerKind) -> bool {
        self.handles
            .get(&timer)
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&mut self, timer: TimerKind, delay: Duration) {
        self.cancel(timer);

        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the app is shutting down
            let _ = tx.send(timer);
        });
        self.handles.insert(timer, handle);
        tracing::debug!("Scheduled {timer:?} in {}ms", delay.as_millis());
    }

    fn cancel(&mut self, timer: TimerKind) {
        if let Some(handle) = self.handles.remove(&timer) {
            if !handle.is_finished() {
                tracing::debug!("Cancelled pending {timer:?}");
            }
            handle.abort();
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for (_, handle) in self.handles.drain() {
            handle.abort();
        }
    }
}
