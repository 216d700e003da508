//! Authentication result types
//!
//! Defines the authorization data returned to the file-transfer service.

use super::credentials::UserRecord;
use crate::config::ProviderConfig;
use serde::Serialize;

/// Authorization data for a successfully authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AuthorizationResult {
    /// Serialized as `null` when neither the record nor the configuration names a role
    pub role: Option<String>,
    pub home_directory: String,
    pub policy: String,
    pub public_keys: Vec<String>,
}

impl AuthorizationResult {
    /// Fill in the record's attributes, defaulting anything it leaves out
    pub fn for_user(username: &str, record: &UserRecord, config: &ProviderConfig) -> Self {
        Self {
            role: record
                .role_arn
                .clone()
                .or_else(|| config.default_role_arn.clone()),
            home_directory: record
                .home_directory
                .clone()
                .unwrap_or_else(|| config.default_home_directory(username)),
            policy: record.policy.clone().unwrap_or_default(),
            public_keys: record.public_keys.clone().unwrap_or_default(),
        }
    }
}
