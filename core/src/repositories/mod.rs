//! Repository interfaces for data persistence.
//!
//! Concrete storage-backed implementations live in the infra layer; this
//! crate only defines the contracts plus in-memory doubles for testing.

pub mod log;
pub mod user;

pub use log::{LogRepository, NoOpLogRepository};
pub use user::UserRepository;

#[cfg(test)]
pub use log::MockLogRepository;
#[cfg(test)]
pub use user::MockUserRepository;
