//! Password verification
//!
//! A record is checked by exactly one method: its `password_hash` when the key
//! is present, otherwise its plaintext `password`. A `null` hash never
//! matches. Both comparisons are ordinary string equality.

use super::credentials::UserRecord;
use crate::error::AuthError;
use sha2::{Digest, Sha256};

/// Lower-case hex SHA-256 digest of a password
pub fn sha256_hex(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Checks the submitted password against the user's stored credential.
pub fn validate_password(
    username: &str,
    password: &str,
    record: &UserRecord,
) -> Result<(), AuthError> {
    let matches = match &record.password_hash {
        Some(stored_hash) => stored_hash.as_deref() == Some(sha256_hex(password).as_str()),
        None => password == record.password.as_deref().unwrap_or(""),
    };

    if matches {
        Ok(())
    } else {
        Err(AuthError::PasswordMismatch(username.to_string()))
    }
}
