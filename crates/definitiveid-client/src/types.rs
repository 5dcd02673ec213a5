use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Production registry origin
pub const DEFAULT_BASE_URL: &str = "https://definitiveid.wsg127.com";
const DEFAULT_USER_AGENT: &str = concat!("definitiveid-client/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// DID Document as returned by the registry.
///
/// Kept untyped so every upstream field passes through unchanged.
pub type DidDocument = serde_json::Value;

/// Settings for [`crate::RegistryClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Universal Resolver error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    InvalidDid,
    NotFound,
    ResolutionError,
    InvalidDidDocument,
    InternalError,
}

impl ErrorKind {
    /// Wire code, as it appears in the `error` field of error bodies
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidDid => "invalidDid",
            Self::NotFound => "notFound",
            Self::ResolutionError => "resolutionError",
            Self::InvalidDidDocument => "invalidDidDocument",
            Self::InternalError => "internalError",
        }
    }

    /// HTTP status the driver answers with for this kind
    pub fn http_status(&self) -> u16 {
        match self {
            Self::InvalidDid => 400,
            Self::NotFound => 404,
            Self::ResolutionError | Self::InvalidDidDocument | Self::InternalError => 500,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_serializes_camel_case() {
        let json = serde_json::to_value(ErrorKind::InvalidDidDocument).unwrap();
        assert_eq!(json, "invalidDidDocument");
        assert_eq!(
            serde_json::to_value(ErrorKind::InvalidDid).unwrap(),
            ErrorKind::InvalidDid.as_str()
        );
    }

    #[test]
    fn test_error_kind_status() {
        assert_eq!(ErrorKind::InvalidDid.http_status(), 400);
        assert_eq!(ErrorKind::NotFound.http_status(), 404);
        assert_eq!(ErrorKind::ResolutionError.http_status(), 500);
        assert_eq!(ErrorKind::InvalidDidDocument.http_status(), 500);
        assert_eq!(ErrorKind::InternalError.http_status(), 500);
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(
            config.user_agent,
            format!("definitiveid-client/{}", env!("CARGO_PKG_VERSION"))
        );
    }
}
