//! Unit tests for the mock log repository

use crate::domain::entities::log::{LogEntry, MAX_MESSAGE_LEN};
use crate::errors::DomainError;
use crate::repositories::log::{LogRepository, MockLogRepository, NoOpLogRepository};

#[tokio::test]
async fn test_append_assigns_sequential_ids() {
    let repo = MockLogRepository::new();

    let first = LogEntry::new("worker-1", "INFO", "sd_core::services", "first");
    let second = LogEntry::new("worker-1", "WARN", "sd_core::services", "second");
    repo.append(&first).await.unwrap();
    repo.append(&second).await.unwrap();

    let entries = repo.entries().await;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id, 1);
    assert_eq!(entries[1].id, 2);
    assert_eq!(entries[1].message, "second");
}

#[tokio::test]
async fn test_append_rejects_invalid_entry() {
    let repo = MockLogRepository::new();

    let entry = LogEntry::new("worker-1", "INFO", "sd_core", "m".repeat(MAX_MESSAGE_LEN + 1));
    let err = repo.append(&entry).await.unwrap_err();
    assert!(matches!(err, DomainError::Validation { .. }));
    assert!(repo.entries().await.is_empty());
}

#[tokio::test]
async fn test_find_recent_newest_first() {
    let repo = MockLogRepository::new();
    for i in 0..5 {
        let entry = LogEntry::new("worker-1", "INFO", "sd_core", format!("entry {}", i));
        repo.append(&entry).await.unwrap();
    }

    let recent = repo.find_recent(2).await.unwrap();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].message, "entry 4");
    assert_eq!(recent[1].message, "entry 3");
}

#[tokio::test]
async fn test_noop_discards_entries() {
    let repo = NoOpLogRepository::new();

    let entry = LogEntry::new("worker-1", "ERROR", "sd_core", "dropped")
        .with_exception("boom");
    repo.append(&entry).await.unwrap();
    assert!(repo.find_recent(10).await.unwrap().is_empty());

    // unit type stands in where no sink is wired at all
    ().append(&entry).await.unwrap();
    assert!(().find_recent(10).await.unwrap().is_empty());
}
