//! Error handling
//!
//! Defines error types and the denial boundary for the identity provider.

pub mod handlers;
pub mod types;

pub use handlers::deny;
pub use types::*;
