//! HTTP server module

mod error;
mod health;
mod transfers;

use std::{net::SocketAddr, sync::Arc};

use axum::{Router, routing::get};
pub use error::ServerError;

use crate::{config::ServerConfig, engine::TransferPipeline, providers::TransferSource};

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct ApiState {
    /// The pipeline each `/api/transfers` request runs from scratch.
    pub pipeline: Arc<TransferPipeline<dyn TransferSource>>,
}

/// Builds the application router.
pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/transfers", get(transfers::transfers))
        .with_state(state)
}

/// Runs the HTTP server based on the provided server configuration.
pub async fn run_server_from_config(
    config: &ServerConfig,
    pipeline: Arc<TransferPipeline<dyn TransferSource>>,
) -> Result<(), ServerError> {
    let addr: SocketAddr = config
        .listen_address
        .parse()
        .map_err(|e| ServerError::InvalidAddress(config.listen_address.clone(), e))?;

    let app = router(ApiState { pipeline });

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(ServerError::Bind)?;
    tracing::info!(address = %addr, "HTTP server listening.");

    axum::serve(listener, app.into_make_service()).await.map_err(ServerError::Serve)
}
