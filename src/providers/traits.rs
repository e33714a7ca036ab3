//! This module defines the interface for fetching Transfer data from an
//! EVM-compatible blockchain.

use alloy::primitives::{Address, B256, TxHash};
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

use crate::{
    engine::BlockRange,
    models::{BlockSummary, Log, ReceiptSummary, TransactionSummary},
};

/// Custom error type for data source operations.
#[derive(Error, Debug)]
pub enum DataSourceError {
    /// Error when interacting with the provider.
    #[error("Provider error: {0}")]
    Provider(#[from] Box<dyn std::error::Error + Send + Sync>),

    /// The node does not know the transaction.
    #[error("Transaction not found: {0}")]
    TransactionNotFound(TxHash),

    /// The node has no receipt for the transaction.
    #[error("Receipt not found: {0}")]
    ReceiptNotFound(TxHash),

    /// Indicates that the requested block was not found.
    #[error("Block not found: {0}")]
    BlockNotFound(u64),
}

/// A ranged log query for a single contract and event signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogQuery {
    /// The emitting contract.
    pub address: Address,
    /// The required `topics[0]`.
    pub event_signature: B256,
    /// Inclusive block window.
    pub range: BlockRange,
}

/// A source of the chain data the transfer pipeline consumes.
///
/// Implementations must be safe to call concurrently; the enricher issues
/// several lookups at once against a shared handle.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TransferSource: Send + Sync {
    /// Fetches the current block number from the data source.
    async fn get_current_block_number(&self) -> Result<u64, DataSourceError>;

    /// Runs one ranged log query.
    async fn fetch_logs(&self, query: LogQuery) -> Result<Vec<Log>, DataSourceError>;

    /// Fetches a transaction by hash.
    async fn fetch_transaction(&self, hash: TxHash)
    -> Result<TransactionSummary, DataSourceError>;

    /// Fetches a transaction receipt by hash.
    async fn fetch_receipt(&self, hash: TxHash) -> Result<ReceiptSummary, DataSourceError>;

    /// Fetches a block header by number.
    async fn fetch_block(&self, number: u64) -> Result<BlockSummary, DataSourceError>;
}
