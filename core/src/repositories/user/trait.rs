//! User repository trait defining the interface for user data access.
//!
//! This module defines the repository pattern interface for User entities.
//! The trait is async-first and uses Result types for proper error handling;
//! absence of a matching record is an ordinary `None`, not an error.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainResult;

/// Repository trait for User entity read and validation operations
///
/// This trait defines the contract for data access operations related to
/// users. Implementations should handle the actual database operations while
/// maintaining the abstraction boundary between domain and infrastructure
/// layers. The service layer consumes this contract as an opaque capability
/// and does not know or control the storage medium.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch every user record, including disabled and soft-deleted ones
    ///
    /// # Returns
    /// * `Ok(users)` - The raw, unfiltered set of records
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_all(&self) -> DomainResult<Vec<User>>;

    /// Fetch users filtered by their enabled flag
    ///
    /// # Arguments
    /// * `is_enabled` - Match records whose `is_enabled` equals this value
    ///
    /// # Returns
    /// * `Ok(users)` - Records matching the flag
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_all_by_enabled(&self, is_enabled: bool) -> DomainResult<Vec<User>>;

    /// Find a user by their unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with the given id
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<User>>;

    /// Find a user by name
    ///
    /// Names are not guaranteed unique. When several records share the name,
    /// which one is returned is implementation-defined; callers receive
    /// exactly one user or none. An empty name matches nothing unless a
    /// record actually carries an empty name.
    ///
    /// # Returns
    /// * `Ok(Some(User))` - A user with that exact name
    /// * `Ok(None)` - No user with the given name
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_name(&self, name: &str) -> DomainResult<Option<User>>;

    /// Check a name/password pair against stored credentials
    ///
    /// # Returns
    /// * `Ok(Some(is_valid))` - The check completed; `is_valid` is the verdict
    /// * `Ok(None)` - The check could not be completed, e.g. no record
    ///   matches the given credentials
    /// * `Err(DomainError)` - Database or other error occurred
    async fn validate_credentials(&self, name: &str, password: &str)
        -> DomainResult<Option<bool>>;
}
