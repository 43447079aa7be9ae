//! Mock implementation of LogRepository for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::log::LogEntry;
use crate::errors::DomainResult;

use super::LogRepository;

/// Mock log repository for testing
///
/// Stores entries in memory, assigning sequential ids on append the way
/// storage would.
pub struct MockLogRepository {
    entries: Arc<RwLock<Vec<LogEntry>>>,
}

impl MockLogRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Every entry appended so far, oldest first
    pub async fn entries(&self) -> Vec<LogEntry> {
        self.entries.read().await.clone()
    }
}

impl Default for MockLogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LogRepository for MockLogRepository {
    async fn append(&self, entry: &LogEntry) -> DomainResult<()> {
        entry.validate()?;
        let mut entries = self.entries.write().await;
        let mut stored = entry.clone();
        stored.id = entries.len() as i64 + 1;
        entries.push(stored);
        Ok(())
    }

    async fn find_recent(&self, limit: usize) -> DomainResult<Vec<LogEntry>> {
        let entries = self.entries.read().await;
        Ok(entries.iter().rev().take(limit).cloned().collect())
    }
}
