//! Alert queue and display state
//!
//! Alerts are appended in receipt order and shown one at a time. The shown
//! alert records when it was popped; once its own dwell has elapsed the next
//! advance drops it and promotes the head of the queue.
//!
//! Time is passed in by the caller so the state machine stays deterministic.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use super::alert_payload::Alert;

/// The alert currently on screen
#[derive(Debug, Clone)]
pub struct ShownAlert {
    pub alert: Alert,
    pub shown_at: Instant,
}

impl ShownAlert {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.alert.dwell
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.alert
            .dwell
            .saturating_sub(now.saturating_duration_since(self.shown_at))
    }
}

#[derive(Debug, Default)]
pub struct AlertQueue {
    pending: VecDeque<Alert>,
    current: Option<ShownAlert>,
}

impl AlertQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an alert at the tail; never touches the shown alert
    pub fn enqueue(&mut self, alert: Alert) {
        log::debug!(
            "Queued alert ({} pending): {}",
            self.pending.len() + 1,
            alert.text
        );
        self.pending.push_back(alert);
    }

    /// Advance the display state machine
    ///
    /// Expires the shown alert when its dwell has elapsed, then promotes the
    /// queue head if nothing is shown. Returns true when the displayed alert
    /// changed.
    pub fn advance(&mut self, now: Instant) -> bool {
        let mut changed = false;

        if let Some(shown) = &self.current
            && shown.is_expired(now)
        {
            log::debug!("Alert expired: {}", shown.alert.text);
            self.current = None;
            changed = true;
        }

        if self.current.is_none() && self.promote(now) {
            changed = true;
        }

        changed
    }

    /// Drop the shown alert immediately and promote the next one
    ///
    /// Returns true when something was on screen.
    pub fn skip(&mut self, now: Instant) -> bool {
        match self.current.take() {
            Some(shown) => {
                log::debug!("Alert skipped: {}", shown.alert.text);
                self.promote(now);
                true
            }
            None => false,
        }
    }

    fn promote(&mut self, now: Instant) -> bool {
        match self.pending.pop_front() {
            Some(alert) => {
                log::debug!("Showing alert for {:?}: {}", alert.dwell, alert.text);
                self.current = Some(ShownAlert {
                    alert,
                    shown_at: now,
                });
                true
            }
            None => false,
        }
    }

    pub fn current(&self) -> Option<&ShownAlert> {
        self.current.as_ref()
    }

    /// Text on screen, or the empty string when idle
    pub fn current_text(&self) -> &str {
        self.current
            .as_ref()
            .map(|shown| shown.alert.text.as_str())
            .unwrap_or("")
    }

    /// Number of alerts waiting behind the shown one
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn is_idle(&self) -> bool {
        self.current.is_none()
    }

    /// Time left before the shown alert expires
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.current.as_ref().map(|shown| shown.remaining(now))
    }
}

#[cfg(test)]
#[path = "alert_queue_tests.rs"]
mod alert_queue_tests;
