//! Secret store access
//!
//! The user registry lives in an external key/value secret store. The verifier
//! only sees the [`SecretStore`] trait.

pub mod memory;
pub mod secrets_manager;

pub use memory::InMemorySecretStore;
pub use secrets_manager::SecretsManagerStore;

use crate::error::StoreError;
use async_trait::async_trait;

/// Reads named secrets as strings
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Fetch the string value of `name` from the store endpoint in `region`.
    async fn get_secret_string(&self, region: &str, name: &str) -> Result<String, StoreError>;
}
