//! The end-to-end ingestion-and-ranking run.
//!
//! Resolver -> log fetcher -> selection -> enricher -> ranker, with the outcome
//! packaged into a [`TransfersResponse`]. Nothing is carried over between runs.

use std::sync::Arc;

use thiserror::Error;

use super::{
    BlockRange,
    enricher::{BatchEnricher, DroppedLog},
    log_fetcher::fetch_transfer_logs,
    range::resolve_range,
    ranker::rank_transfers,
    selection::select_candidates,
};
use crate::{
    config::{PipelineConfig, PipelineConfigError},
    models::{TransferEvent, TransfersResponse},
    providers::traits::{DataSourceError, TransferSource},
};

/// Errors that fail a whole run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The pipeline configuration is unusable.
    #[error("Invalid pipeline configuration: {0}")]
    InvalidConfig(#[from] PipelineConfigError),

    /// The chain head could not be fetched.
    #[error("Failed to fetch current block number: {0}")]
    HeadLookup(#[source] DataSourceError),

    /// The ranged log query failed or was rejected by the provider.
    #[error("Failed to fetch transfer logs: {0}")]
    LogQuery(#[source] DataSourceError),
}

/// The result of a successful run.
#[derive(Debug)]
pub struct RankedTransfers {
    /// The scanned block window.
    pub range: BlockRange,
    /// Number of logs returned by the range query, before any cap.
    pub total_logs: usize,
    /// Number of logs enriched successfully.
    pub total_found: usize,
    /// The top transfers by value, largest first.
    pub transfers: Vec<TransferEvent>,
    /// Logs that were selected but contributed nothing.
    pub dropped: Vec<DroppedLog>,
}

/// Runs the transfer pipeline against a `TransferSource`.
pub struct TransferPipeline<S: TransferSource + ?Sized> {
    source: Arc<S>,
    config: PipelineConfig,
}

impl<S: TransferSource + ?Sized> TransferPipeline<S> {
    /// Creates a new `TransferPipeline`, rejecting unusable configurations.
    pub fn new(source: Arc<S>, config: PipelineConfig) -> Result<Self, PipelineError> {
        config.validate()?;
        Ok(Self { source, config })
    }

    /// Returns the pipeline configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Performs one full run.
    #[tracing::instrument(skip(self), fields(token = %self.config.token_symbol), level = "info")]
    pub async fn run(&self) -> Result<RankedTransfers, PipelineError> {
        let config = &self.config;

        let range = resolve_range(self.source.as_ref(), config.block_window)
            .await
            .map_err(PipelineError::HeadLookup)?;

        let logs = fetch_transfer_logs(
            self.source.as_ref(),
            config.contract_address,
            config.transfer_topic,
            range,
        )
        .await
        .map_err(PipelineError::LogQuery)?;
        let total_logs = logs.len();

        let (candidates, mut dropped) =
            select_candidates(&logs, config.prefix_cap, config.selection);
        if total_logs > config.prefix_cap {
            tracing::info!(
                total_logs,
                prefix_cap = config.prefix_cap,
                policy = ?config.selection,
                "Log count exceeds the enrichment cap; only a subset is enriched."
            );
        }

        let enricher =
            BatchEnricher::new(Arc::clone(&self.source), config.batch_size, config.batch_delay);
        let outcome = enricher.enrich(candidates).await;
        dropped.extend(outcome.dropped);

        let total_found = outcome.transfers.len();
        let transfers = rank_transfers(outcome.transfers, config.result_cap);

        tracing::info!(
            from_block = range.from,
            to_block = range.to,
            total_logs,
            total_found,
            dropped = dropped.len(),
            returned = transfers.len(),
            "Transfer ranking complete."
        );

        Ok(RankedTransfers { range, total_logs, total_found, transfers, dropped })
    }

    /// Performs one run and packages the outcome for clients.
    pub async fn respond(&self) -> TransfersResponse {
        assemble_response(&self.config.token_symbol, self.run().await)
    }
}

/// Wraps a run's outcome into the client-facing contract.
///
/// Failures carry a short summary plus the underlying message and never any
/// partial results.
pub fn assemble_response(
    token_symbol: &str,
    result: Result<RankedTransfers, PipelineError>,
) -> TransfersResponse {
    match result {
        Ok(ranked) => TransfersResponse::ranked(ranked.total_logs, ranked.total_found, ranked.transfers),
        Err(e) => {
            tracing::error!(error = %e, "Error fetching {} transfers.", token_symbol);
            TransfersResponse::failure(format!("Failed to fetch {token_symbol} transfers"), e.to_string())
        }
    }
}
