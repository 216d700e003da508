//! SFTP Identity Provider - Entry Point
//!
//! Custom identity provider for a managed SFTP service, run as a Lambda
//! function. Users are looked up in a registry held in AWS Secrets Manager.

use lambda_runtime::{Error, LambdaEvent, service_fn};
use log::{error, info};
use serde_json::Value;
use std::sync::Arc;

use sftp_identity_provider::store::SecretsManagerStore;
use sftp_identity_provider::utils::setup_logging;
use sftp_identity_provider::{
    AuthorizationResult, CallContext, CredentialVerifier, LoginRequest, ProviderConfig,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_logging();

    let config = match ProviderConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Launching identity provider (secret: {}, bucket: {})",
        config.secret_name, config.s3_bucket_name
    );

    let store = SecretsManagerStore::from_env().await;
    let verifier = Arc::new(CredentialVerifier::new(config, store));

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let verifier = Arc::clone(&verifier);
        async move { handle_login(&verifier, event).await }
    }))
    .await
}

async fn handle_login(
    verifier: &CredentialVerifier<SecretsManagerStore>,
    event: LambdaEvent<Value>,
) -> Result<AuthorizationResult, Error> {
    let request = LoginRequest::from_event(event.payload);
    let context = CallContext::new(event.context.invoked_function_arn);
    Ok(verifier.authenticate(&request, &context).await?)
}
