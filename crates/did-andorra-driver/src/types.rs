//! Response bodies for the driver endpoints

use definitiveid_client::ErrorKind;
use serde::Serialize;

/// Media type of a resolved DID Document
pub const DID_LD_JSON: &str = "application/did+ld+json";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub method: &'static str,
    pub version: &'static str,
}

/// Body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorKind,
    pub message: String,
}
