use std::time::Duration;

use alloy::primitives::{Address, B256, address, b256};
use serde::Deserialize;
use thiserror::Error;

use super::deserialize_duration_from_ms;

/// `keccak256("Transfer(address,address,uint256)")`
pub const TRANSFER_EVENT_SIGNATURE: B256 =
    b256!("ddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef");

/// The MORPHO token on Ethereum mainnet.
pub const MORPHO_ADDRESS: Address = address!("58d97b57bb95320f9a05dc918aef65434969c2b2");

/// Roughly one week of blocks at 12 seconds per block.
pub const BLOCKS_PER_WEEK: u64 = 50_400;

fn default_token_symbol() -> String {
    "MORPHO".to_string()
}

fn default_contract_address() -> Address {
    MORPHO_ADDRESS
}

fn default_transfer_topic() -> B256 {
    TRANSFER_EVENT_SIGNATURE
}

fn default_block_window() -> u64 {
    BLOCKS_PER_WEEK
}

fn default_batch_size() -> usize {
    10
}

fn default_batch_delay() -> Duration {
    Duration::from_millis(100)
}

fn default_prefix_cap() -> usize {
    100
}

fn default_result_cap() -> usize {
    50
}

/// Decides which logs are enriched when the query returns more than
/// `prefix_cap` of them.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Enrich the first `prefix_cap` logs in provider order, then rank.
    /// Larger transfers outside that prefix are never considered.
    #[default]
    TruncateThenRank,
    /// Decode every log, order the candidates by value and enrich only the
    /// `prefix_cap` largest.
    RankThenTruncate,
}

/// Errors raised by [`PipelineConfig::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineConfigError {
    /// Batches must contain at least one log.
    #[error("batch_size must be greater than zero")]
    ZeroBatchSize,
}

/// Parameters of a single ingestion-and-ranking run.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PipelineConfig {
    /// Display symbol of the token, used in failure summaries.
    #[serde(default = "default_token_symbol")]
    pub token_symbol: String,

    /// The token contract whose Transfer events are ranked.
    #[serde(default = "default_contract_address")]
    pub contract_address: Address,

    /// The `topics[0]` value identifying the Transfer event.
    #[serde(default = "default_transfer_topic")]
    pub transfer_topic: B256,

    /// Number of blocks behind the head to scan.
    #[serde(default = "default_block_window")]
    pub block_window: u64,

    /// Number of logs enriched concurrently in one batch.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Pause between two consecutive batches.
    #[serde(
        rename = "batch_delay_ms",
        default = "default_batch_delay",
        deserialize_with = "deserialize_duration_from_ms"
    )]
    pub batch_delay: Duration,

    /// Maximum number of logs that are ever enriched per run.
    #[serde(default = "default_prefix_cap")]
    pub prefix_cap: usize,

    /// Maximum number of transfers returned.
    #[serde(default = "default_result_cap")]
    pub result_cap: usize,

    /// How the `prefix_cap` interacts with ranking.
    #[serde(default)]
    pub selection: SelectionPolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            token_symbol: default_token_symbol(),
            contract_address: default_contract_address(),
            transfer_topic: default_transfer_topic(),
            block_window: default_block_window(),
            batch_size: default_batch_size(),
            batch_delay: default_batch_delay(),
            prefix_cap: default_prefix_cap(),
            result_cap: default_result_cap(),
            selection: SelectionPolicy::default(),
        }
    }
}

impl PipelineConfig {
    /// Checks the invariants the engine relies on.
    pub fn validate(&self) -> Result<(), PipelineConfigError> {
        if self.batch_size == 0 {
            return Err(PipelineConfigError::ZeroBatchSize);
        }
        Ok(())
    }
}
