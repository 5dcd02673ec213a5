use std::fmt;

use crate::types::ErrorKind;

/// Errors from resolving a DID against the registry
#[derive(Debug)]
pub enum ResolveError {
    /// Registry answered 404
    NotFound(String),
    /// Registry answered with another non-success status
    UpstreamStatus(u16),
    /// Success status, but the body is not a usable DID Document
    InvalidDocument,
    /// Connection, timeout, or body read failure
    Transport(reqwest::Error),
    /// The HTTP client could not be constructed
    Build(reqwest::Error),
}

impl ResolveError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::UpstreamStatus(_) | Self::Transport(_) => ErrorKind::ResolutionError,
            Self::InvalidDocument => ErrorKind::InvalidDidDocument,
            Self::Build(_) => ErrorKind::InternalError,
        }
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(did) => write!(f, "DID not found: {did}"),
            Self::UpstreamStatus(status) => write!(f, "API returned status {status}"),
            Self::InvalidDocument => write!(f, "Invalid DID Document from registry"),
            Self::Transport(e) => write!(f, "{e}"),
            Self::Build(e) => write!(f, "Failed to create HTTP client: {e}"),
        }
    }
}

impl std::error::Error for ResolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(e) | Self::Build(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ResolveError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e)
    }
}

pub type Result<T> = std::result::Result<T, ResolveError>;
