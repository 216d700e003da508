pub mod auth;
pub mod config;
pub mod error;
pub mod store;
pub mod utils;
pub mod verifier;

pub use auth::{AuthorizationResult, CallContext, LoginRequest};
pub use config::ProviderConfig;
pub use error::Unauthorized;
pub use verifier::CredentialVerifier;
