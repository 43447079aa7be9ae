//! User entity representing a registered user in the StaffDir system.

use serde::{Deserialize, Serialize};

/// User entity representing a registered user
///
/// The identifier is assigned by storage and immutable afterwards. Names are
/// a secondary lookup key and are not guaranteed unique; which record a
/// name-based lookup resolves to is the repository's decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user, assigned by storage
    pub id: i64,

    /// Display name, used as a secondary lookup key
    pub name: String,

    /// Password as stored
    pub password: String,

    /// Role label; enforcement happens outside this layer
    pub role: String,

    /// Whether the account is active
    pub is_enabled: bool,

    /// Soft-delete flag; deleted records still appear in raw listings
    pub is_deleted: bool,
}

impl User {
    /// Creates a new User instance
    pub fn new(
        id: i64,
        name: impl Into<String>,
        password: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            password: password.into(),
            role: role.into(),
            is_enabled: true,
            is_deleted: false,
        }
    }

    /// Enables the user account
    pub fn enable(&mut self) {
        self.is_enabled = true;
    }

    /// Disables the user account
    pub fn disable(&mut self) {
        self.is_enabled = false;
    }

    /// Marks the user as soft-deleted
    pub fn mark_deleted(&mut self) {
        self.is_deleted = true;
    }

    /// Clears the soft-delete flag
    pub fn restore(&mut self) {
        self.is_deleted = false;
    }

    /// Checks if the user is enabled and not soft-deleted
    pub fn is_active(&self) -> bool {
        self.is_enabled && !self.is_deleted
    }
}
