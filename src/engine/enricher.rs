//! The `BatchEnricher` joins decoded transfers with their transaction, receipt
//! and block data.
//!
//! Candidates are processed in fixed-size batches. Inside a batch every lookup
//! runs concurrently; batches run one after another with a fixed pause in
//! between, which is the only rate limiting applied to the provider.

use std::{sync::Arc, time::Duration};

use alloy::primitives::TxHash;
use futures::future;
use thiserror::Error;

use crate::{
    models::{DecodeError, TransferCandidate, TransferEvent},
    providers::traits::{DataSourceError, TransferSource},
};

/// Why a log contributed nothing to the result.
#[derive(Debug, Error)]
pub enum DropReason {
    /// The log is not a well-formed Transfer.
    #[error("decode failed: {0}")]
    Decode(#[from] DecodeError),

    /// One of the transaction, receipt or block lookups failed.
    #[error("lookup failed: {0}")]
    Lookup(#[from] DataSourceError),
}

/// A log that was discarded, kept for observability.
#[derive(Debug)]
pub struct DroppedLog {
    /// The emitting transaction, when the log carried one.
    pub transaction_hash: Option<TxHash>,
    /// Why it was discarded.
    pub reason: DropReason,
}

/// The result of enriching a set of candidates.
#[derive(Debug, Default)]
pub struct EnrichmentOutcome {
    /// Successfully enriched transfers, in completion order.
    pub transfers: Vec<TransferEvent>,
    /// Candidates whose lookups failed.
    pub dropped: Vec<DroppedLog>,
}

/// Enriches transfer candidates under bounded concurrency.
pub struct BatchEnricher<S: TransferSource + ?Sized> {
    source: Arc<S>,
    batch_size: usize,
    batch_delay: Duration,
}

impl<S: TransferSource + ?Sized> BatchEnricher<S> {
    /// Creates a new `BatchEnricher`. A `batch_size` of zero is treated as one.
    pub fn new(source: Arc<S>, batch_size: usize, batch_delay: Duration) -> Self {
        Self { source, batch_size: batch_size.max(1), batch_delay }
    }

    /// Enriches every candidate, batch by batch.
    ///
    /// A failed lookup only drops its own candidate; it never aborts the batch.
    #[tracing::instrument(skip_all, fields(candidates = candidates.len()), level = "debug")]
    pub async fn enrich(&self, candidates: Vec<TransferCandidate>) -> EnrichmentOutcome {
        let mut outcome = EnrichmentOutcome::default();

        for (index, batch) in candidates.chunks(self.batch_size).enumerate() {
            if index > 0 && !self.batch_delay.is_zero() {
                tokio::time::sleep(self.batch_delay).await;
            }

            tracing::debug!(batch = index, size = batch.len(), "Enriching batch.");
            let results =
                future::join_all(batch.iter().cloned().map(|c| self.enrich_one(c))).await;

            for result in results {
                match result {
                    Ok(transfer) => outcome.transfers.push(transfer),
                    Err(dropped) => {
                        tracing::warn!(
                            tx_hash = ?dropped.transaction_hash,
                            error = %dropped.reason,
                            "Dropping transfer log."
                        );
                        outcome.dropped.push(dropped);
                    }
                }
            }
        }

        outcome
    }

    async fn enrich_one(&self, candidate: TransferCandidate) -> Result<TransferEvent, DroppedLog> {
        let hash = candidate.transaction_hash;
        let lookups = tokio::try_join!(
            self.source.fetch_transaction(hash),
            self.source.fetch_receipt(hash),
            self.source.fetch_block(candidate.block_number),
        );

        match lookups {
            Ok((transaction, receipt, block)) =>
                Ok(TransferEvent::assemble(candidate, transaction, receipt, block)),
            Err(e) => Err(DroppedLog { transaction_hash: Some(hash), reason: e.into() }),
        }
    }
}
