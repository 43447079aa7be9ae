//! Log repository trait defining the interface for the audit sink.

use async_trait::async_trait;

use crate::domain::entities::log::LogEntry;
use crate::errors::DomainResult;

/// Repository trait for the append-only log table
///
/// The user service does not write audit records itself; this contract exists
/// for the layers that do. Entries are validated against the column bounds
/// before storage.
#[async_trait]
pub trait LogRepository: Send + Sync {
    /// Append an entry to the log
    ///
    /// # Returns
    /// * `Ok(())` - Entry persisted
    /// * `Err(DomainError)` - Validation or storage failure
    async fn append(&self, entry: &LogEntry) -> DomainResult<()>;

    /// Fetch the most recent entries, newest first
    async fn find_recent(&self, limit: usize) -> DomainResult<Vec<LogEntry>>;
}
