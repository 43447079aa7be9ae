//! Business services containing domain logic and use cases.

pub mod user;

// Re-export commonly used types
pub use user::UserService;
