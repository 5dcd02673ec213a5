//! Error types for the did:andorra driver

use std::fmt;

use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use definitiveid_client::{ErrorKind, ResolveError};
use did_andorra_syntax::DidSyntaxError;

use crate::types::ErrorResponse;

/// Startup and runtime errors of the driver process
#[derive(Debug)]
pub enum DriverError {
    Config(String),
    Client(ResolveError),
    Io(Box<std::io::Error>),
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
            Self::Client(e) => write!(f, "Registry client error: {}", e),
            Self::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Client(e) => Some(e),
            Self::Io(e) => Some(e.as_ref()),
            Self::Config(_) => None,
        }
    }
}

impl From<ResolveError> for DriverError {
    fn from(e: ResolveError) -> Self {
        Self::Client(e)
    }
}

impl From<std::io::Error> for DriverError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(Box::new(e))
    }
}

impl From<tracing_subscriber::filter::ParseError> for DriverError {
    fn from(e: tracing_subscriber::filter::ParseError) -> Self {
        Self::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DriverError>;

/// Error rendered to HTTP clients as `{error, message}`
#[derive(Debug)]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<DidSyntaxError> for ApiError {
    fn from(e: DidSyntaxError) -> Self {
        Self::new(ErrorKind::InvalidDid, e.to_string())
    }
}

impl From<PathRejection> for ApiError {
    fn from(e: PathRejection) -> Self {
        Self::new(ErrorKind::InvalidDid, e.body_text())
    }
}

impl From<ResolveError> for ApiError {
    fn from(e: ResolveError) -> Self {
        Self::new(e.kind(), e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.kind.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (
            status,
            Json(ErrorResponse {
                error: self.kind,
                message: self.message,
            }),
        )
            .into_response()
    }
}
