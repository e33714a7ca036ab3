//! A builder for creating `Block` instances for testing.

use alloy::{
    primitives::B256,
    rpc::types::{Block, BlockTransactions, Header},
};

/// A builder for creating `Block` instances for testing.
#[derive(Debug, Clone, Default)]
pub struct BlockBuilder {
    header: Header,
}

impl BlockBuilder {
    /// Creates a new `BlockBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the block number.
    pub fn number(mut self, number: u64) -> Self {
        self.header.inner.number = number;
        self
    }

    /// Sets the block hash.
    pub fn hash(mut self, hash: B256) -> Self {
        self.header.hash = hash;
        self
    }

    /// Sets the block timestamp, in seconds.
    pub fn timestamp(mut self, timestamp: u64) -> Self {
        self.header.inner.timestamp = timestamp;
        self
    }

    /// Builds the `Block` with the provided values. Transactions are left as
    /// an empty hash list.
    pub fn build(self) -> Block {
        Block {
            header: self.header,
            transactions: BlockTransactions::Hashes(Vec::new()),
            uncles: Default::default(),
            withdrawals: Default::default(),
        }
    }
}
