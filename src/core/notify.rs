//! Notification sink.
//!
//! Fire-and-forget user-facing messages. Implementations must not fail the
//! calling operation, so the methods return nothing.

use std::sync::{Mutex, PoisonError};

/// Message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Warning,
    Error,
}

/// User-facing notifications.
pub trait Notifier {
    fn success(&self, message: &str);
    fn labeled_warning(&self, label: &str, message: &str);
    fn labeled_error(&self, label: &str, message: &str);
}

/// A recorded notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub level: Level,
    pub label: Option<String>,
    pub message: String,
}

/// Notifier that keeps every message in memory.
#[derive(Debug, Default)]
pub struct Recorder {
    entries: Mutex<Vec<Entry>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every notification so far, in order.
    pub fn entries(&self) -> Vec<Entry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Notifications at `level`.
    pub fn at(&self, level: Level) -> Vec<Entry> {
        self.entries()
            .into_iter()
            .filter(|e| e.level == level)
            .collect()
    }

    fn push(&self, level: Level, label: Option<&str>, message: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Entry {
                level,
                label: label.map(str::to_string),
                message: message.to_string(),
            });
    }
}

impl Notifier for Recorder {
    fn success(&self, message: &str) {
        self.push(Level::Success, None, message);
    }

    fn labeled_warning(&self, label: &str, message: &str) {
        self.push(Level::Warning, Some(label), message);
    }

    fn labeled_error(&self, label: &str, message: &str) {
        self.push(Level::Error, Some(label), message);
    }
}
