//! In-memory secret store
//!
//! Holds secrets in a map and counts fetches. Serves as the test double for
//! the verifier.

use super::SecretStore;
use crate::error::StoreError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[derive(Debug, Default)]
pub struct InMemorySecretStore {
    secrets: HashMap<String, String>,
    failure: Option<StoreError>,
    delay: Option<Duration>,
    fetches: AtomicUsize,
    last_region: Mutex<Option<String>>,
}

impl InMemorySecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `name`
    pub fn with_secret(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.secrets.insert(name.into(), value.into());
        self
    }

    /// Fail every fetch with `error`
    pub fn failing(error: StoreError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    /// Sleep before answering each fetch
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of fetches performed so far
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    /// Region passed to the most recent fetch
    pub fn last_region(&self) -> Option<String> {
        self.last_region
            .lock()
            .ok()
            .and_then(|region| region.clone())
    }
}

#[async_trait]
impl SecretStore for InMemorySecretStore {
    async fn get_secret_string(&self, region: &str, name: &str) -> Result<String, StoreError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_region.lock() {
            *last = Some(region.to_string());
        }

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(err) = &self.failure {
            return Err(err.clone());
        }

        self.secrets
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }
}
