//! Short-lived diagnostic messages shown over the viewer

use chrono::{DateTime, Duration, Utc};
use std::collections::VecDeque;

/// How long informational messages stay on screen
pub const INFO_TTL_SECS: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub at: DateTime<Utc>,
}

/// Bounded log keeping only the newest messages
#[derive(Debug, Clone)]
pub struct DiagnosticLog {
    capacity: usize,
    entries: VecDeque<Diagnostic>,
}

impl DiagnosticLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, severity: Severity, message: impl Into<String>) {
        self.push_at(severity, message, Utc::now());
    }

    /// Push with an explicit timestamp
    pub fn push_at(&mut self, severity: Severity, message: impl Into<String>, at: DateTime<Utc>) {
        let message = message.into();
        match severity {
            Severity::Error => log::error!("{}", message),
            Severity::Warning => log::warn!("{}", message),
            Severity::Info | Severity::Success => log::info!("{}", message),
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(Diagnostic { severity, message, at });
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Severity::Info, message);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Severity::Success, message);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(Severity::Warning, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Severity::Error, message);
    }

    /// Drop informational messages older than [`INFO_TTL_SECS`]
    pub fn expire(&mut self, now: DateTime<Utc>) {
        let ttl = Duration::seconds(INFO_TTL_SECS);
        self.entries
            .retain(|d| d.severity != Severity::Info || now - d.at < ttl);
    }

    pub fn entries(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Whether any message contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.entries.iter().any(|d| d.message.contains(needle))
    }
}

impl Default for DiagnosticLog {
    fn default() -> Self {
        Self::new(5)
    }
}
