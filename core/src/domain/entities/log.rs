//! Log entry entity mirroring the audit log table consumed by external sinks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};

/// Maximum stored length of the thread column
pub const MAX_THREAD_LEN: usize = 255;
/// Maximum stored length of the level column
pub const MAX_LEVEL_LEN: usize = 50;
/// Maximum stored length of the logger column
pub const MAX_LOGGER_LEN: usize = 255;
/// Maximum stored length of the message column
pub const MAX_MESSAGE_LEN: usize = 4000;
/// Maximum stored length of the exception column
pub const MAX_EXCEPTION_LEN: usize = 2000;

/// An append-only audit record
///
/// This entity only defines the shape of the log table; the user service
/// performs no audit logging itself. Sinks implementing
/// [`LogRepository`](crate::repositories::LogRepository) own the storage
/// behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Unique identifier, assigned by storage (0 until persisted)
    pub id: i64,

    /// Timestamp the entry was recorded
    pub date: DateTime<Utc>,

    /// Originating thread name
    pub thread: String,

    /// Severity label (e.g. INFO, ERROR)
    pub level: String,

    /// Name of the logger that produced the entry
    pub logger: String,

    /// Log message, bounded length
    pub message: String,

    /// Optional exception detail
    pub exception: Option<String>,
}

impl LogEntry {
    /// Creates a new log entry dated now; the id is assigned by storage
    pub fn new(
        thread: impl Into<String>,
        level: impl Into<String>,
        logger: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            date: Utc::now(),
            thread: thread.into(),
            level: level.into(),
            logger: logger.into(),
            message: message.into(),
            exception: None,
        }
    }

    /// Attaches exception detail to the entry
    pub fn with_exception(mut self, exception: impl Into<String>) -> Self {
        self.exception = Some(exception.into());
        self
    }

    /// Validates required fields and column length bounds
    pub fn validate(&self) -> DomainResult<()> {
        Self::check_required("thread", &self.thread, MAX_THREAD_LEN)?;
        Self::check_required("level", &self.level, MAX_LEVEL_LEN)?;
        Self::check_required("logger", &self.logger, MAX_LOGGER_LEN)?;
        Self::check_required("message", &self.message, MAX_MESSAGE_LEN)?;
        if let Some(exception) = &self.exception {
            if exception.chars().count() > MAX_EXCEPTION_LEN {
                return Err(DomainError::Validation {
                    message: format!("exception exceeds {} characters", MAX_EXCEPTION_LEN),
                });
            }
        }
        Ok(())
    }

    fn check_required(field: &str, value: &str, max_len: usize) -> DomainResult<()> {
        if value.is_empty() {
            return Err(DomainError::Validation {
                message: format!("{} is required", field),
            });
        }
        if value.chars().count() > max_len {
            return Err(DomainError::Validation {
                message: format!("{} exceeds {} characters", field, max_len),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_log_entry() {
        let entry = LogEntry::new("worker-1", "INFO", "sd_core::services", "user lookup");

        assert_eq!(entry.id, 0);
        assert_eq!(entry.thread, "worker-1");
        assert_eq!(entry.level, "INFO");
        assert_eq!(entry.logger, "sd_core::services");
        assert_eq!(entry.message, "user lookup");
        assert!(entry.exception.is_none());
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn test_with_exception() {
        let entry = LogEntry::new("worker-1", "ERROR", "sd_core::services", "lookup failed")
            .with_exception("connection refused");

        assert_eq!(entry.exception.as_deref(), Some("connection refused"));
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_required_fields() {
        let entry = LogEntry::new("", "INFO", "sd_core", "message");
        let err = entry.validate().unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));
        assert!(err.to_string().contains("thread is required"));
    }

    #[test]
    fn test_validate_rejects_over_length_fields() {
        let entry = LogEntry::new("worker-1", "I".repeat(MAX_LEVEL_LEN + 1), "sd_core", "message");
        assert!(entry.validate().is_err());

        let entry = LogEntry::new("worker-1", "INFO", "sd_core", "m".repeat(MAX_MESSAGE_LEN));
        assert!(entry.validate().is_ok());

        let entry = LogEntry::new("worker-1", "INFO", "sd_core", "m".repeat(MAX_MESSAGE_LEN + 1));
        assert!(entry.validate().is_err());

        let entry = LogEntry::new("worker-1", "INFO", "sd_core", "message")
            .with_exception("e".repeat(MAX_EXCEPTION_LEN + 1));
        assert!(entry.validate().is_err());
    }
}
