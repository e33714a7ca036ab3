//! Command-line entry points of the transfer ranker.

pub mod fetch;
pub mod serve;

use std::sync::Arc;

pub use fetch::{FetchArgs, FetchSelection};
pub use serve::ServeArgs;
use thiserror::Error;

use crate::{
    config::AppConfig,
    engine::{PipelineError, TransferPipeline},
    http_server::ServerError,
    providers::{EndpointSelectionError, EvmRpcSource, TransferSource, select_endpoint},
};

/// Errors surfaced by the subcommands.
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    /// No RPC endpoint could be selected.
    #[error("Endpoint selection error: {0}")]
    Endpoint(#[from] EndpointSelectionError),

    /// The pipeline could not be built or its run failed.
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// The HTTP server stopped.
    #[error("Server error: {0}")]
    Server(#[from] ServerError),

    /// The response could not be rendered.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The one-shot run answered with a failure body.
    #[error("Run failed: {0}")]
    RunFailed(String),
}

/// Selects an RPC endpoint once and wraps it in a pipeline.
///
/// The returned pipeline owns the only client handle; every run shares it.
pub fn build_pipeline(config: &AppConfig) -> Result<TransferPipeline<dyn TransferSource>, Error> {
    tracing::debug!(rpc_urls = ?config.rpc_urls, "Selecting RPC endpoint...");
    let selection =
        select_endpoint(&config.rpc_urls, config.endpoint_fallback, &config.rpc_retry_config)?;
    tracing::info!(
        endpoint = %selection.endpoint,
        is_fallback = selection.is_fallback,
        rejected = selection.rejected.len(),
        retry_policy = ?config.rpc_retry_config,
        "EVM data source initialized."
    );

    let source: Arc<dyn TransferSource> = Arc::new(EvmRpcSource::new(selection.provider));
    Ok(TransferPipeline::new(source, config.pipeline.clone())?)
}
