//! User service module mediating between callers and user storage.

mod service;

pub use service::UserService;
