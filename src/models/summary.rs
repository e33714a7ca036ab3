//! The slices of transaction, receipt and block data that enrichment needs.

use alloy::{
    consensus::Transaction as _,
    primitives::TxHash,
    rpc::types::{Block, Transaction, TransactionReceipt},
};

/// Pricing data of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionSummary {
    /// The gas price reported by the node, if any.
    pub gas_price: Option<u128>,
}

impl From<&Transaction> for TransactionSummary {
    fn from(tx: &Transaction) -> Self {
        // Nodes report the effective price for mined dynamic-fee transactions.
        let gas_price = tx.effective_gas_price.or_else(|| tx.inner.gas_price());
        Self { gas_price }
    }
}

/// Execution data of a mined transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReceiptSummary {
    /// The transaction hash.
    pub transaction_hash: TxHash,
    /// Gas consumed by the transaction.
    pub gas_used: u64,
}

impl From<&TransactionReceipt> for ReceiptSummary {
    fn from(receipt: &TransactionReceipt) -> Self {
        Self { transaction_hash: receipt.transaction_hash, gas_used: receipt.gas_used }
    }
}

/// Header data of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSummary {
    /// The block number.
    pub number: u64,
    /// Unix timestamp in seconds.
    pub timestamp: u64,
}

impl From<&Block> for BlockSummary {
    fn from(block: &Block) -> Self {
        Self { number: block.header.inner.number, timestamp: block.header.inner.timestamp }
    }
}
