//! # StaffDir Core
//!
//! Core business logic and domain layer for the StaffDir backend.
//! This crate contains domain entities, business services, repository
//! interfaces, and error types that form the foundation of the application
//! architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::log::LogEntry;
pub use domain::entities::user::User;
pub use errors::{DomainError, DomainResult};
pub use repositories::{LogRepository, NoOpLogRepository, UserRepository};
pub use services::UserService;
