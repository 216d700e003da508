//! Error handlers
//!
//! Collapses internal failure causes into the caller-facing denial.

use crate::error::types::{AuthError, Unauthorized};
use log::error;

/// Log the cause of a failed login and return the uniform denial.
pub fn deny(err: &AuthError) -> Unauthorized {
    error!("Authentication error: {}", err);
    Unauthorized
}
