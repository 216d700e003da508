//! Error types
//!
//! Internal causes of a failed login, secret store failures, and the single
//! opaque error returned to the caller.

use std::fmt;

/// Secret store errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    NotFound(String),
    AccessDenied(String),
    NoSecretString(String),
    Service(String),
    Timeout(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound(name) => write!(f, "Secret not found: {}", name),
            StoreError::AccessDenied(name) => write!(f, "Access denied to secret: {}", name),
            StoreError::NoSecretString(name) => {
                write!(f, "Secret has no string value: {}", name)
            }
            StoreError::Service(msg) => write!(f, "Secret store error: {}", msg),
            StoreError::Timeout(name) => write!(f, "Timed out fetching secret: {}", name),
        }
    }
}

impl std::error::Error for StoreError {}

/// Authentication failure causes, kept for logging only
#[derive(Debug)]
pub enum AuthError {
    MissingCredentials,
    SecretNotFound(String),
    SecretMalformed(String),
    UserNotFound(String),
    PasswordMismatch(String),
    Store(StoreError),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::MissingCredentials => write!(f, "Missing username or password"),
            AuthError::SecretNotFound(name) => write!(f, "User registry not found: {}", name),
            AuthError::SecretMalformed(msg) => write!(f, "User registry malformed: {}", msg),
            AuthError::UserNotFound(u) => write!(f, "User not found: {}", u),
            AuthError::PasswordMismatch(u) => write!(f, "Invalid password for user: {}", u),
            AuthError::Store(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for AuthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AuthError::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for AuthError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound(name) => AuthError::SecretNotFound(name),
            StoreError::NoSecretString(name) => {
                AuthError::SecretMalformed(format!("no string value in {}", name))
            }
            other => AuthError::Store(other),
        }
    }
}

impl From<serde_json::Error> for AuthError {
    fn from(error: serde_json::Error) -> Self {
        AuthError::SecretMalformed(error.to_string())
    }
}

/// The only error a caller ever sees.
///
/// Carries no detail so the response does not reveal whether the user exists,
/// whether the store was reachable, or which check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unauthorized;

impl fmt::Display for Unauthorized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unauthorized")
    }
}

impl std::error::Error for Unauthorized {}
