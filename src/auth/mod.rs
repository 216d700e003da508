//! Authentication system
//!
//! Login events, user registry records, password verification and the
//! authorization data handed back on success.

pub mod credentials;
pub mod request;
pub mod results;
pub mod validator;

pub use credentials::{UserRecord, UserRegistry};
pub use request::{CallContext, LoginRequest};
pub use results::AuthorizationResult;
pub use validator::{sha256_hex, validate_password};
