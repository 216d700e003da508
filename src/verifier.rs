//! Credential verifier
//!
//! Authenticates one login attempt against the user registry and returns the
//! user's authorization data. Every failure, whatever its cause, reaches the
//! caller as [`Unauthorized`].

use crate::auth::{
    AuthorizationResult, CallContext, LoginRequest, UserRegistry, validate_password,
};
use crate::config::ProviderConfig;
use crate::error::{AuthError, StoreError, Unauthorized, deny};
use crate::store::SecretStore;
use log::{debug, info};

pub struct CredentialVerifier<S> {
    config: ProviderConfig,
    store: S,
}

impl<S: SecretStore> CredentialVerifier<S> {
    pub fn new(config: ProviderConfig, store: S) -> Self {
        Self { config, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Authenticate a login attempt.
    ///
    /// The registry is fetched anew on every call; nothing is cached between
    /// invocations.
    pub async fn authenticate(
        &self,
        request: &LoginRequest,
        context: &CallContext,
    ) -> Result<AuthorizationResult, Unauthorized> {
        debug!(
            "Login attempt for {:?} (protocol: {:?}, server: {:?}, source: {:?})",
            request.username, request.protocol, request.server_id, request.source_ip
        );

        match self.try_authenticate(request, context).await {
            Ok(result) => {
                info!("User {} authenticated", request.username);
                Ok(result)
            }
            Err(err) => Err(deny(&err)),
        }
    }

    async fn try_authenticate(
        &self,
        request: &LoginRequest,
        context: &CallContext,
    ) -> Result<AuthorizationResult, AuthError> {
        if !request.has_credentials() {
            return Err(AuthError::MissingCredentials);
        }

        let region = self.config.resolve_region(context.region());
        let registry = self.fetch_registry(&region).await?;

        let record = registry
            .get(&request.username)
            .ok_or_else(|| AuthError::UserNotFound(request.username.clone()))?;

        validate_password(&request.username, &request.password, record)?;

        Ok(AuthorizationResult::for_user(
            &request.username,
            record,
            &self.config,
        ))
    }

    async fn fetch_registry(&self, region: &str) -> Result<UserRegistry, AuthError> {
        let name = &self.config.secret_name;
        let document = tokio::time::timeout(
            self.config.fetch_timeout(),
            self.store.get_secret_string(region, name),
        )
        .await
        .map_err(|_| StoreError::Timeout(name.clone()))??;

        Ok(UserRegistry::from_json(&document)?)
    }
}
