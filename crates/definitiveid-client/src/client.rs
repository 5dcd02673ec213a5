use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{ResolveError, Result};
use crate::types::{ClientConfig, DidDocument};

const IDENTITY_PATH: &str = "/definitiveid_services/rest/Public/Identity";

/// Client for the DefinitiveID public identity endpoint
#[derive(Debug, Clone)]
pub struct RegistryClient {
    client: reqwest::Client,
    base_url: String,
}

impl RegistryClient {
    /// Create a client pointed at the production registry
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client with a custom registry origin
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Self::with_config(ClientConfig {
            base_url: base_url.to_string(),
            ..ClientConfig::default()
        })
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .build()
            .map_err(ResolveError::Build)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the DID Document for `did`.
    ///
    /// The identifier is expected to be validated already; it is placed into
    /// the request path as given. A successful body is returned verbatim.
    pub async fn resolve(&self, did: &str) -> Result<DidDocument> {
        let url = format!("{}{}/{}", self.base_url, IDENTITY_PATH, did);
        debug!(url = %url, "Requesting DID Document");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ResolveError::NotFound(did.to_string()));
        }
        if !status.is_success() {
            return Err(ResolveError::UpstreamStatus(status.as_u16()));
        }

        let body = response.bytes().await?;
        let document: Value = serde_json::from_slice(&body).map_err(|e| {
            warn!(did = %did, error = %e, "Registry returned a non-JSON body");
            ResolveError::InvalidDocument
        })?;

        if !has_id(&document) {
            warn!(did = %did, "Registry document has no id");
            return Err(ResolveError::InvalidDocument);
        }

        Ok(document)
    }
}

/// Whether the document carries a truthy `id` field.
///
/// `null`, `false`, `0` and `""` count as missing.
fn has_id(document: &Value) -> bool {
    match document.get("id") {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}
