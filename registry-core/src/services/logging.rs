//! Logging service - structured event journal kept in memory
//!
//! Records what happened to the registry, not who the users are: entries
//! carry event names and user ids only. Names, emails and ages are never
//! logged.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Get current unix timestamp in milliseconds
fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// A log event to be recorded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEvent {
    pub event: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl LogEvent {
    /// Create a new log event with just an event name
    pub fn new(event: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            user_id: None,
            error_message: None,
        }
    }

    /// Attach the id of the affected user
    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Set error information
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }
}

/// A log entry as stored in the journal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: u64,
    pub timestamp: i64,
    pub event: String,
    pub user_id: Option<String>,
    pub error_message: Option<String>,
}

/// Service for structured event logging
#[derive(Debug, Default)]
pub struct LoggingService {
    entries: Vec<LogEntry>,
    next_id: u64,
}

impl LoggingService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log an event
    ///
    /// The entry id and timestamp are assigned here. Ids increase
    /// monotonically for the lifetime of the service.
    pub fn log(&mut self, event: LogEvent) {
        self.next_id += 1;
        self.entries.push(LogEntry {
            id: self.next_id,
            timestamp: now_ms(),
            event: event.event,
            user_id: event.user_id,
            error_message: event.error_message,
        });
    }

    /// Log a simple event with just a name
    pub fn log_event(&mut self, event: &str) {
        self.log(LogEvent::new(event))
    }

    /// Log an error
    pub fn log_error(&mut self, event: &str, message: &str) {
        self.log(LogEvent::new(event).with_error(message))
    }

    /// Most recent entries first, up to `limit`
    pub fn get_recent(&self, limit: usize) -> Vec<LogEntry> {
        self.entries.iter().rev().take(limit).cloned().collect()
    }

    /// Most recent entries carrying an error, up to `limit`
    pub fn get_errors(&self, limit: usize) -> Vec<LogEntry> {
        self.entries
            .iter()
            .rev()
            .filter(|e| e.error_message.is_some())
            .take(limit)
            .cloned()
            .collect()
    }

    /// Get the total number of log entries
    pub fn count(&self) -> u64 {
        self.entries.len() as u64
    }
}
