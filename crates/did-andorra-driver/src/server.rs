//! HTTP server for the Universal Resolver driver interface
//!
//! Provides /health and /1.0/identifiers/{did}. Every other route answers
//! with a `notFound` error body.

use std::any::Any;
use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::header,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use definitiveid_client::{ErrorKind, RegistryClient};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::error::ApiError;
use crate::types::{HealthResponse, DID_LD_JSON};

/// Shared state for the HTTP server
pub struct ServerState {
    pub client: RegistryClient,
}

impl ServerState {
    pub fn new(client: RegistryClient) -> Self {
        Self { client }
    }
}

pub type SharedState = Arc<ServerState>;

/// Create the HTTP router
pub fn create_router(state: SharedState) -> Router {
    let router = Router::new()
        .route("/health", get(health).fallback(not_found))
        .route(
            "/1.0/identifiers/{*did}",
            get(resolve_identifier).fallback(not_found),
        )
        .fallback(not_found)
        .with_state(state);

    with_layers(router)
}

fn with_layers(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Start the HTTP server and run until SIGINT or SIGTERM
pub async fn start_server(state: SharedState, port: u16) -> std::io::Result<()> {
    let router = create_router(state);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting HTTP server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for SIGINT");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("SIGINT received, shutting down"),
        _ = terminate => info!("SIGTERM received, shutting down"),
    }
}

/// Health check endpoint
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        method: "did:andorra",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Resolve a DID to its DID Document
async fn resolve_identifier(
    State(state): State<SharedState>,
    did: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(did) = did.map_err(|e| {
        warn!(reason = %e.body_text(), "Rejected undecodable identifier");
        ApiError::from(e)
    })?;
    info!(did = %did, "Resolving DID");

    let did = did_andorra_syntax::validate(&did).map_err(|e| {
        warn!(did = %did, reason = %e, "Rejected invalid DID");
        ApiError::from(e)
    })?;

    let document = state.client.resolve(did.as_str()).await.map_err(|e| {
        error!(did = %did, kind = %e.kind(), error = %e, "Resolution failed");
        ApiError::from(e)
    })?;

    info!(
        did = %did,
        nrtad = did.nrtad_number(),
        role = ?did.role(),
        "Resolved DID"
    );

    Ok(([(header::CONTENT_TYPE, DID_LD_JSON)], Json(document)).into_response())
}

async fn not_found() -> ApiError {
    ApiError::new(
        ErrorKind::NotFound,
        "Endpoint not found. Use /1.0/identifiers/{did} to resolve a DID.",
    )
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unexpected error occurred".to_string()
    };

    error!(error = %message, "Request handler panicked");
    ApiError::new(ErrorKind::InternalError, message).into_response()
}
