//! Inbound login event and call context

use serde::Deserialize;
use serde_json::Value;

/// Login attempt forwarded by the file-transfer service.
///
/// Missing fields deserialize as empty strings so that a short event is
/// rejected by credential validation rather than by the runtime.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(default)]
    pub server_id: Option<String>,
    #[serde(default)]
    pub source_ip: Option<String>,
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    /// Read a raw invocation payload.
    ///
    /// A payload that does not deserialize (wrong field types, not an object)
    /// yields an empty request, which is then denied like missing credentials.
    pub fn from_event(payload: Value) -> Self {
        serde_json::from_value(payload).unwrap_or_default()
    }

    /// Both username and password are present and non-empty
    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

/// Runtime metadata about the current invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallContext {
    pub invoked_function_arn: Option<String>,
}

impl CallContext {
    pub fn new(invoked_function_arn: impl Into<String>) -> Self {
        Self {
            invoked_function_arn: Some(invoked_function_arn.into()),
        }
    }

    /// Region named in the fourth field of `arn:partition:service:region:...`
    pub fn region(&self) -> Option<&str> {
        self.invoked_function_arn
            .as_deref()?
            .split(':')
            .nth(3)
            .filter(|region| !region.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_from_function_arn() {
        let context =
            CallContext::new("arn:aws:lambda:eu-west-2:123456789012:function:sftp-idp");
        assert_eq!(context.region(), Some("eu-west-2"));
    }

    #[test]
    fn test_region_missing_or_malformed() {
        assert_eq!(CallContext::default().region(), None);
        assert_eq!(CallContext::new("not-an-arn").region(), None);
        assert_eq!(CallContext::new("arn:aws:lambda").region(), None);
        assert_eq!(CallContext::new("arn:aws:lambda::123").region(), None);
    }

    #[test]
    fn test_event_deserialization() {
        let request: LoginRequest = serde_json::from_str(
            r#"{"username":"alice","password":"secret","protocol":"SFTP",
                "serverId":"s-1234","sourceIp":"10.0.0.1"}"#,
        )
        .unwrap();
        assert_eq!(request.username, "alice");
        assert_eq!(request.password, "secret");
        assert_eq!(request.protocol.as_deref(), Some("SFTP"));
        assert_eq!(request.server_id.as_deref(), Some("s-1234"));
        assert_eq!(request.source_ip.as_deref(), Some("10.0.0.1"));
        assert!(request.has_credentials());
    }

    #[test]
    fn test_malformed_event_means_no_credentials() {
        let request =
            LoginRequest::from_event(serde_json::json!({"username": "alice", "password": 123}));
        assert!(!request.has_credentials());
        assert_eq!(request.username, "");

        let request = LoginRequest::from_event(serde_json::json!(["alice", "secret"]));
        assert!(!request.has_credentials());
        assert!(!LoginRequest::from_event(Value::Null).has_credentials());
    }

    #[test]
    fn test_event_payload_with_credentials() {
        let payload = serde_json::json!({"username": "alice", "password": "secret"});
        let request = LoginRequest::from_event(payload);
        assert_eq!(request.username, "alice");
        assert_eq!(request.password, "secret");
    }

    #[test]
    fn test_missing_fields_mean_no_credentials() {
        let request: LoginRequest = serde_json::from_str(r#"{"username":"alice"}"#).unwrap();
        assert!(!request.has_credentials());
        assert!(!LoginRequest::new("", "secret").has_credentials());
        assert!(!LoginRequest::new("alice", "").has_credentials());
    }
}
