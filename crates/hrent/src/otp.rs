//! One-time code entry with a resend cooldown.

use std::time::{Duration, Instant};

/// Time a user must wait before asking for another code.
pub const RESEND_COOLDOWN: Duration = Duration::from_secs(30);

/// Tracks when the last code was sent.
#[derive(Debug, Clone, Copy)]
pub struct ResendTimer {
    sent_at: Instant,
}

impl ResendTimer {
    /// Starts the cooldown at `now`.
    pub const fn started_at(now: Instant) -> Self {
        Self { sent_at: now }
    }

    /// Starts the cooldown now.
    pub fn start() -> Self {
        Self::started_at(Instant::now())
    }

    /// Time left before a resend is allowed, zero once it is.
    pub fn remaining_at(&self, now: Instant) -> Duration {
        RESEND_COOLDOWN.saturating_sub(now.saturating_duration_since(self.sent_at))
    }

    /// [`Self::remaining_at`] using the current time.
    pub fn remaining(&self) -> Duration {
        self.remaining_at(Instant::now())
    }

    /// Restarts the cooldown after a resend.
    pub fn restart(&mut self) {
        self.sent_at = Instant::now();
    }
}

/// Countdown label, e.g. `00:07`.
pub fn countdown_label(remaining: Duration) -> String {
    let secs = remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0);
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
