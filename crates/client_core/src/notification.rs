//! Transient success/error alerts.

use std::{
    collections::BTreeMap,
    sync::Mutex,
    time::{Duration, Instant},
};

pub const DEFAULT_ALERT_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

struct Alert {
    message: String,
    shown_at: Instant,
}

/// One alert region per severity. A message stays visible for the display
/// duration and is replaced by any newer message of the same severity.
pub struct AlertBoard {
    duration: Duration,
    slots: Mutex<BTreeMap<Severity, Alert>>,
}

impl Default for AlertBoard {
    fn default() -> Self {
        Self::new(DEFAULT_ALERT_DURATION)
    }
}

impl AlertBoard {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            slots: Mutex::new(BTreeMap::new()),
        }
    }

    pub fn show_at(&self, notification: Notification, now: Instant) {
        let mut slots = self.slots.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        slots.insert(
            notification.severity,
            Alert {
                message: notification.message,
                shown_at: now,
            },
        );
    }

    /// Visible alerts at `now`, success first. Expired alerts are cleared.
    pub fn active_at(&self, now: Instant) -> Vec<Notification> {
        let mut slots = self.slots.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        slots.retain(|_, alert| now.saturating_duration_since(alert.shown_at) < self.duration);
        slots
            .iter()
            .map(|(severity, alert)| Notification {
                severity: *severity,
                message: alert.message.clone(),
            })
            .collect()
    }

    pub fn active(&self) -> Vec<Notification> {
        self.active_at(Instant::now())
    }
}

impl Notifier for AlertBoard {
    fn notify(&self, notification: Notification) {
        self.show_at(notification, Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alerts_clear_after_display_duration() {
        let board = AlertBoard::default();
        let start = Instant::now();
        board.show_at(Notification::success("Todo created successfully"), start);

        assert_eq!(
            board.active_at(start + Duration::from_millis(2_900)),
            vec![Notification::success("Todo created successfully")]
        );
        assert!(board.active_at(start + DEFAULT_ALERT_DURATION).is_empty());
    }

    #[test]
    fn newer_alert_replaces_same_severity_only() {
        let board = AlertBoard::new(Duration::from_secs(10));
        let start = Instant::now();
        board.show_at(Notification::error("Failed to fetch todos"), start);
        board.show_at(Notification::success("Todos loaded successfully"), start);
        board.show_at(Notification::error("Failed to delete todo"), start);

        assert_eq!(
            board.active_at(start),
            vec![
                Notification::success("Todos loaded successfully"),
                Notification::error("Failed to delete todo"),
            ]
        );
    }
}
