//! Log repository module.

mod r#trait;
pub use r#trait::LogRepository;

mod noop;
pub use noop::NoOpLogRepository;

mod mock;
pub use mock::MockLogRepository;

#[cfg(test)]
mod tests;
