//! Delayed re-read of goal sets after an update notification.
//!
//! The store may still be writing when it announces a change, so lists wait a
//! fixed delay before reading again. Each new notification restarts the wait.

use chrono::{DateTime, Duration, Utc};

/// Tracks whether a pending refresh has waited long enough.
#[derive(Debug, Clone)]
pub struct RefreshDebouncer {
    delay: Duration,
    pending_since: Option<DateTime<Utc>>,
}

impl RefreshDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending_since: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record an update notification received at `now`.
    pub fn notify(&mut self, now: DateTime<Utc>) {
        self.pending_since = Some(now);
    }

    pub fn is_pending(&self) -> bool {
        self.pending_since.is_some()
    }

    /// Whether a refresh is pending and its delay has elapsed.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.pending_since
            .map(|since| now - since >= self.delay)
            .unwrap_or(false)
    }

    /// Consume a due refresh. Returns false if none is due.
    pub fn take_due(&mut self, now: DateTime<Utc>) -> bool {
        if self.is_due(now) {
            self.pending_since = None;
            true
        } else {
            false
        }
    }
}
