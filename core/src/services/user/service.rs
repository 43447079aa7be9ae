//! Business-logic service for user lookups and credential validation.
//!
//! The service is a thin mediation layer over [`UserRepository`]: it forwards
//! each call one-to-one and relays the repository's outcome unmodified. It is
//! the seam where input validation, error translation, and future rules
//! (excluding soft-deleted users, combined filters) belong; today it adds
//! none of them.

use std::sync::Arc;

use crate::domain::entities::user::User;
use crate::errors::DomainResult;
use crate::repositories::UserRepository;

/// Service mediating between callers and user storage
///
/// Stateless apart from the injected repository reference, so a single
/// instance (or clones of it) can be shared freely across concurrent
/// callers. No call retries, queues, or suspends at this layer; repository
/// errors propagate to the caller untranslated.
pub struct UserService<R>
where
    R: UserRepository,
{
    repository: Arc<R>,
}

impl<R> UserService<R>
where
    R: UserRepository,
{
    /// Create a new user service backed by the given repository
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Fetch every user record
    ///
    /// Returns the repository's raw result: soft-deleted and disabled
    /// records are not filtered here. Callers needing an "active only" view
    /// must use [`get_all_users_by`](Self::get_all_users_by).
    pub async fn get_all_users(&self) -> DomainResult<Vec<User>> {
        tracing::debug!("fetching all users");
        self.repository.find_all().await
    }

    /// Fetch users filtered by their enabled flag
    ///
    /// The flag is forwarded to the repository verbatim.
    pub async fn get_all_users_by(&self, is_enabled: bool) -> DomainResult<Vec<User>> {
        tracing::debug!(is_enabled, "fetching users by enabled flag");
        self.repository.find_all_by_enabled(is_enabled).await
    }

    /// Find a user by their unique identifier
    ///
    /// The id is not validated here; any value is forwarded and absence is
    /// reported as `Ok(None)`.
    pub async fn get_user_by_id(&self, id: i64) -> DomainResult<Option<User>> {
        tracing::debug!(user_id = id, "fetching user by id");
        self.repository.find_by_id(id).await
    }

    /// Find a user by name
    ///
    /// Empty names are not special-cased; they are forwarded and match only
    /// if a record actually carries an empty name. When several records
    /// share the name, which one comes back is the repository's decision;
    /// exactly one user or none is surfaced.
    pub async fn get_user_by_name(&self, name: &str) -> DomainResult<Option<User>> {
        tracing::debug!(name, "fetching user by name");
        self.repository.find_by_name(name).await
    }

    /// Check a name/password pair against stored credentials
    ///
    /// Both values are forwarded exactly as given; no normalization,
    /// hashing, or rate limiting happens here. `Ok(None)` means the
    /// repository could not complete the check (no matching record); the
    /// verdict inside `Some` is only meaningful in that completed case.
    pub async fn validate_user(
        &self,
        name: &str,
        password: &str,
    ) -> DomainResult<Option<bool>> {
        tracing::debug!(name, "validating user credentials");
        self.repository.validate_credentials(name, password).await
    }
}
