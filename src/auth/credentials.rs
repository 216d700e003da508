//! User registry records
//!
//! The registry is a JSON object stored as a single secret, mapping each
//! username to its credential and authorization attributes.

use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

/// Distinguishes a key set to `null` (`Some(None)`) from a missing key (`None`)
fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// One user's stored credential and authorization attributes
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub password: Option<String>,
    /// Hex-encoded SHA-256 of the password. When the key is present, even as
    /// `null`, it is the only credential checked.
    #[serde(default, deserialize_with = "present")]
    pub password_hash: Option<Option<String>>,
    #[serde(default)]
    pub role_arn: Option<String>,
    #[serde(default)]
    pub home_directory: Option<String>,
    #[serde(default)]
    pub policy: Option<String>,
    #[serde(default)]
    pub public_keys: Option<Vec<String>>,
}

/// Username to record mapping, fetched fresh for every login
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct UserRegistry {
    users: HashMap<String, UserRecord>,
}

impl UserRegistry {
    /// Parse the registry document held in the secret
    pub fn from_json(document: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(document)
    }

    /// Exact, case-sensitive lookup
    pub fn get(&self, username: &str) -> Option<&UserRecord> {
        self.users.get(username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_record() {
        let registry = UserRegistry::from_json(
            r#"{
                "alice": {
                    "password": "secret",
                    "role_arn": "arn:aws:iam::123456789012:role/alice",
                    "home_directory": "/bucket/home/alice",
                    "policy": "{\"Version\":\"2012-10-17\"}",
                    "public_keys": ["ssh-ed25519 AAAA alice@laptop", "ssh-rsa BBBB alice@ci"]
                }
            }"#,
        )
        .unwrap();

        let alice = registry.get("alice").unwrap();
        assert_eq!(alice.password.as_deref(), Some("secret"));
        assert_eq!(alice.password_hash, None);
        assert_eq!(
            alice.role_arn.as_deref(),
            Some("arn:aws:iam::123456789012:role/alice")
        );
        assert_eq!(alice.home_directory.as_deref(), Some("/bucket/home/alice"));
        assert_eq!(alice.policy.as_deref(), Some("{\"Version\":\"2012-10-17\"}"));
        assert_eq!(
            alice.public_keys.as_deref(),
            Some(
                &[
                    "ssh-ed25519 AAAA alice@laptop".to_string(),
                    "ssh-rsa BBBB alice@ci".to_string()
                ][..]
            )
        );
    }

    #[test]
    fn test_sparse_record_and_unknown_fields() {
        let registry =
            UserRegistry::from_json(r#"{"bob": {"password_hash": "ab12", "team": "ops"}}"#)
                .unwrap();
        let bob = registry.get("bob").unwrap();
        assert_eq!(bob.password_hash, Some(Some("ab12".to_string())));
        assert_eq!(bob.password, None);
        assert_eq!(bob.public_keys, None);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let registry = UserRegistry::from_json(r#"{"Alice": {"password": "x"}}"#).unwrap();
        assert!(registry.get("Alice").is_some());
        assert!(registry.get("alice").is_none());
    }

    #[test]
    fn test_rejects_malformed_documents() {
        assert!(UserRegistry::from_json("not json").is_err());
        assert!(UserRegistry::from_json(r#"["alice"]"#).is_err());
        assert!(UserRegistry::from_json(r#"{"alice": "secret"}"#).is_err());
        assert!(UserRegistry::from_json(r#"{"alice": {"public_keys": "ssh-rsa"}}"#).is_err());
    }

    #[test]
    fn test_empty_registry() {
        let registry = UserRegistry::from_json("{}").unwrap();
        assert_eq!(registry, UserRegistry::default());
    }

    #[test]
    fn test_null_hash_is_kept_apart_from_missing_hash() {
        let registry = UserRegistry::from_json(
            r#"{"dan": {"password": "plain", "password_hash": null}, "eve": {"password": "plain"}}"#,
        )
        .unwrap();
        assert_eq!(registry.get("dan").unwrap().password_hash, Some(None));
        assert_eq!(registry.get("eve").unwrap().password_hash, None);
    }
}
