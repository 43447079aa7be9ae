//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult};

use super::r#trait::UserRepository;

/// Mock user repository for testing
///
/// Backed by an in-memory vector seeded through the inherent helpers. The
/// name lookups return the first match in insertion order; duplicate-name
/// tie-breaking is deliberately left implementation-defined, as it is for
/// real storage. `fail_all` makes every operation return a repository error
/// for propagation tests.
pub struct MockUserRepository {
    users: Arc<RwLock<Vec<User>>>,
    last_enabled_filter: Arc<RwLock<Option<bool>>>,
    fail_all: Arc<RwLock<bool>>,
}

impl MockUserRepository {
    /// Create a new, empty mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(Vec::new())),
            last_enabled_filter: Arc::new(RwLock::new(None)),
            fail_all: Arc::new(RwLock::new(false)),
        }
    }

    /// Create a mock repository seeded with the given users
    pub async fn with_users(users: Vec<User>) -> Self {
        let repo = Self::new();
        *repo.users.write().await = users;
        repo
    }

    /// Add a user to the backing store
    pub async fn insert(&self, user: User) {
        self.users.write().await.push(user);
    }

    /// Make every subsequent operation fail with a repository error
    pub async fn set_fail_all(&self, fail: bool) {
        *self.fail_all.write().await = fail;
    }

    /// The `is_enabled` flag the repository was last queried with
    pub async fn last_enabled_filter(&self) -> Option<bool> {
        *self.last_enabled_filter.read().await
    }

    async fn check_available(&self) -> DomainResult<()> {
        if *self.fail_all.read().await {
            return Err(DomainError::Repository {
                message: "storage unavailable".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_all(&self) -> DomainResult<Vec<User>> {
        self.check_available().await?;
        let users = self.users.read().await;
        Ok(users.clone())
    }

    async fn find_all_by_enabled(&self, is_enabled: bool) -> DomainResult<Vec<User>> {
        self.check_available().await?;
        *self.last_enabled_filter.write().await = Some(is_enabled);
        let users = self.users.read().await;
        Ok(users
            .iter()
            .filter(|u| u.is_enabled == is_enabled)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<User>> {
        self.check_available().await?;
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<User>> {
        self.check_available().await?;
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.name == name).cloned())
    }

    async fn validate_credentials(
        &self,
        name: &str,
        password: &str,
    ) -> DomainResult<Option<bool>> {
        self.check_available().await?;
        let users = self.users.read().await;
        Ok(users
            .iter()
            .find(|u| u.name == name && u.password == password)
            .map(|_| true))
    }
}
