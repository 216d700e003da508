//! Configuration management for the SFTP identity provider
//!
//! Loaded once at startup from built-in defaults, an optional
//! `identity-provider.toml`, and environment variables (highest precedence).

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_SECRET_NAME: &str = "sftp-users";
pub const DEFAULT_BUCKET_NAME: &str = "sftp-tcm-sunflower";
pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 5;

/// Identity provider configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Name of the secret holding the user registry.
    /// Environment: SECRETS_MANAGER_SECRET_NAME
    #[serde(rename = "secrets_manager_secret_name")]
    pub secret_name: String,

    /// Role granted to users whose record has no `role_arn`.
    /// Environment: DEFAULT_ROLE_ARN
    #[serde(default)]
    pub default_role_arn: Option<String>,

    /// Bucket used to derive `/{bucket}/{username}` home directories.
    /// Environment: S3_BUCKET_NAME
    pub s3_bucket_name: String,

    /// Secret store region. Falls back to the region of the invoked function.
    /// Environment: SECRETS_MANAGER_REGION
    #[serde(rename = "secrets_manager_region", default)]
    pub region: Option<String>,

    /// Upper bound on a single registry fetch.
    /// Environment: SECRETS_MANAGER_TIMEOUT_SECS
    #[serde(rename = "secrets_manager_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            secret_name: DEFAULT_SECRET_NAME.to_string(),
            default_role_arn: None,
            s3_bucket_name: DEFAULT_BUCKET_NAME.to_string(),
            region: None,
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
        }
    }
}

impl ProviderConfig {
    /// Load configuration from `identity-provider.toml` (optional) with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("identity-provider").required(false))
            .add_source(Environment::default());
        Self::from_builder(builder)
    }

    /// Apply defaults underneath the given sources, then deserialize and validate
    pub(crate) fn from_builder(
        builder: ConfigBuilder<DefaultState>,
    ) -> Result<Self, config::ConfigError> {
        let settings = builder
            .set_default("secrets_manager_secret_name", DEFAULT_SECRET_NAME)?
            .set_default("s3_bucket_name", DEFAULT_BUCKET_NAME)?
            .set_default(
                "secrets_manager_timeout_secs",
                DEFAULT_FETCH_TIMEOUT_SECS as i64,
            )?
            .build()?;

        let config: ProviderConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.secret_name.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "secrets_manager_secret_name cannot be empty".into(),
            ));
        }

        if self.s3_bucket_name.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "s3_bucket_name cannot be empty".into(),
            ));
        }

        if self.fetch_timeout_secs == 0 {
            return Err(config::ConfigError::Message(
                "secrets_manager_timeout_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Configured region, else the one named in the call context, else `us-east-1`
    pub fn resolve_region(&self, context_region: Option<&str>) -> String {
        self.region
            .as_deref()
            .filter(|r| !r.is_empty())
            .or(context_region)
            .unwrap_or(DEFAULT_REGION)
            .to_string()
    }

    /// Home directory assigned to a user whose record does not name one
    pub fn default_home_directory(&self, username: &str) -> String {
        format!("/{}/{}", self.s3_bucket_name, username)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}
