//! Cancellable delayed work.
//!
//! A [`Deferred`] marks a point in time after which some follow-up (resetting
//! the form, surfacing a result) should happen. It never runs anything on its
//! own: the owner either polls [`Deferred::is_due`] or awaits
//! [`Deferred::wait`]. Each deferred carries a [`CancellationToken`], normally a
//! child of its owner's token, so tearing the owner down cancels every pending
//! follow-up and nothing fires afterwards.

use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

#[derive(Debug)]
pub struct Deferred {
    deadline: Instant,
    cancel: CancellationToken,
}

impl Deferred {
    pub fn after(delay: Duration, cancel: CancellationToken) -> Self {
        tracing::debug!(delay_ms = delay.as_millis() as u64, "deferred scheduled");
        Self {
            deadline: Instant::now() + delay,
            cancel,
        }
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// True once the delay elapsed, unless cancelled.
    pub fn is_due(&self) -> bool {
        !self.is_cancelled() && Instant::now() >= self.deadline
    }

    pub fn cancel(&self) {
        if !self.cancel.is_cancelled() {
            tracing::debug!("deferred cancelled");
        }
        self.cancel.cancel();
    }

    /// Waits for the deadline. Returns `false` if cancelled first.
    pub async fn wait(&self) -> bool {
        if self.is_cancelled() {
            return false;
        }
        tokio::select! {
            _ = self.cancel.cancelled() => false,
            _ = tokio::time::sleep_until(self.deadline) => !self.is_cancelled(),
        }
    }
}

impl Drop for Deferred {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
