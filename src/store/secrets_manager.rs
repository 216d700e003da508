//! AWS Secrets Manager backed store

use super::SecretStore;
use crate::error::StoreError;
use async_trait::async_trait;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_sdk_secretsmanager::Client;
use aws_sdk_secretsmanager::config::Region;
use aws_sdk_secretsmanager::error::{DisplayErrorContext, ProvideErrorMetadata};
use log::debug;

const ACCESS_DENIED_CODE: &str = "AccessDeniedException";

/// Secrets Manager client factory.
///
/// Credentials and retry settings are loaded once; a client pointed at the
/// requested region is built for each fetch.
#[derive(Debug, Clone)]
pub struct SecretsManagerStore {
    sdk_config: SdkConfig,
}

impl SecretsManagerStore {
    pub async fn from_env() -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest()).load().await;
        Self::new(sdk_config)
    }

    pub fn new(sdk_config: SdkConfig) -> Self {
        Self { sdk_config }
    }

    fn client_for(&self, region: &str) -> Client {
        let conf = aws_sdk_secretsmanager::config::Builder::from(&self.sdk_config)
            .region(Region::new(region.to_string()))
            .build();
        Client::from_conf(conf)
    }
}

#[async_trait]
impl SecretStore for SecretsManagerStore {
    async fn get_secret_string(&self, region: &str, name: &str) -> Result<String, StoreError> {
        debug!("Fetching secret {} in {}", name, region);

        let output = self
            .client_for(region)
            .get_secret_value()
            .secret_id(name)
            .send()
            .await
            .map_err(|err| {
                let err = err.into_service_error();
                if err.is_resource_not_found_exception() {
                    StoreError::NotFound(name.to_string())
                } else if err.code() == Some(ACCESS_DENIED_CODE) {
                    StoreError::AccessDenied(name.to_string())
                } else {
                    StoreError::Service(DisplayErrorContext(&err).to_string())
                }
            })?;

        output
            .secret_string()
            .map(str::to_string)
            .ok_or_else(|| StoreError::NoSecretString(name.to_string()))
    }
}
