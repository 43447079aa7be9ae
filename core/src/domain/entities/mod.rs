//! Domain entities representing core business objects.

pub mod log;
pub mod user;

// Re-export commonly used types
pub use log::{
    LogEntry, MAX_EXCEPTION_LEN, MAX_LEVEL_LEN, MAX_LOGGER_LEN, MAX_MESSAGE_LEN, MAX_THREAD_LEN,
};
pub use user::User;
