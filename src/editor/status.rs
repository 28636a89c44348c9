//! Status bar message with a single auto-clear deadline.

use crate::constants::STATUS_CLEAR_SECS;
use crate::error::Feedback;

/// The most recent feedback message and when it expires.
///
/// Showing a message replaces both the text and the deadline, so at most one clear is
/// ever pending and an older message can never wipe a newer one.
#[derive(Debug, Clone, Default)]
pub struct StatusLine {
    current: Option<Feedback>,
    clear_at: Option<f64>,
    now: f64,
}

impl StatusLine {
    /// Shows `feedback` until [`STATUS_CLEAR_SECS`] after the current time.
    pub fn show(&mut self, feedback: Feedback) {
        if feedback.message.is_empty() {
            return;
        }
        self.current = Some(feedback);
        self.clear_at = Some(self.now + STATUS_CLEAR_SECS);
    }

    /// Advances the clock to `now` (seconds) and clears an expired message.
    pub fn tick(&mut self, now: f64) {
        self.now = now;
        if self.clear_at.is_some_and(|at| now >= at) {
            self.current = None;
            self.clear_at = None;
        }
    }

    /// The message currently on display.
    pub fn current(&self) -> Option<&Feedback> {
        self.current.as_ref()
    }

    /// Seconds until the pending clear fires, if one is pending.
    pub fn remaining(&self) -> Option<f64> {
        self.clear_at.map(|at| (at - self.now).max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_clears_after_delay() {
        let mut status = StatusLine::default();
        status.tick(10.0);
        status.show(Feedback::ok("hello"));
        status.tick(10.0 + STATUS_CLEAR_SECS - 0.1);
        assert_eq!(status.current().map(|f| f.message.as_str()), Some("hello"));
        status.tick(10.0 + STATUS_CLEAR_SECS);
        assert!(status.current().is_none());
        assert!(status.remaining().is_none());
    }

    #[test]
    fn test_latest_message_wins() {
        let mut status = StatusLine::default();
        status.show(Feedback::ok("first"));
        status.tick(2.0);
        status.show(Feedback::rejected("second"));
        // the first message's deadline would have fired here
        status.tick(STATUS_CLEAR_SECS + 0.5);
        let shown = status.current().expect("second message still visible");
        assert_eq!(shown.message, "second");
        assert!(!shown.success);
        assert!((status.remaining().unwrap_or_default() - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_empty_message_is_ignored() {
        let mut status = StatusLine::default();
        status.show(Feedback::ok("kept"));
        status.show(Feedback::ok(""));
        assert_eq!(status.current().map(|f| f.message.as_str()), Some("kept"));
    }
}
