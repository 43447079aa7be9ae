//! No-op implementation of LogRepository for when audit logging is not needed

use async_trait::async_trait;

use crate::domain::entities::log::LogEntry;
use crate::errors::DomainResult;

use super::LogRepository;

/// No-op implementation of LogRepository
///
/// This implementation discards every entry and is used when no audit sink is
/// configured.
pub struct NoOpLogRepository;

impl NoOpLogRepository {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpLogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LogRepository for NoOpLogRepository {
    async fn append(&self, _entry: &LogEntry) -> DomainResult<()> {
        Ok(())
    }

    async fn find_recent(&self, _limit: usize) -> DomainResult<Vec<LogEntry>> {
        Ok(Vec::new())
    }
}

// Also implement for () to allow simple type defaults
#[async_trait]
impl LogRepository for () {
    async fn append(&self, _entry: &LogEntry) -> DomainResult<()> {
        Ok(())
    }

    async fn find_recent(&self, _limit: usize) -> DomainResult<Vec<LogEntry>> {
        Ok(Vec::new())
    }
}
