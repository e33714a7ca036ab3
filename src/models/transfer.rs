//! ERC-20 Transfer data structures and their decoding from raw logs.

use std::{fmt, str::FromStr};

use alloy::primitives::{Address, B256, TxHash};
use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use thiserror::Error;

use super::{
    Log,
    summary::{BlockSummary, ReceiptSummary, TransactionSummary},
};

/// A raw token amount of arbitrary width.
///
/// Serialized as a base-10 string so that amounts beyond `u64`/`f64` range
/// survive JSON transport. No decimals are applied.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TransferValue(BigUint);

impl TransferValue {
    /// Interprets `bytes` as a big-endian unsigned integer.
    pub fn from_be_slice(bytes: &[u8]) -> Self {
        Self(BigUint::from_bytes_be(bytes))
    }

    /// Returns `true` if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<u128> for TransferValue {
    fn from(value: u128) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<BigUint> for TransferValue {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

impl FromStr for TransferValue {
    type Err = num_bigint::ParseBigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<BigUint>().map(Self)
    }
}

impl fmt::Display for TransferValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Serialize for TransferValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TransferValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// (De)serializes integers as decimal strings.
mod decimal_string {
    use std::{fmt::Display, str::FromStr};

    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<T: Display, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Reasons a log cannot be read as an ERC-20 Transfer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// `topics[1]` and `topics[2]` must carry the indexed `from`/`to`.
    #[error("expected at least 3 topics, found {0}")]
    MissingTopics(usize),

    /// The log is pending and has no transaction hash.
    #[error("log has no transaction hash")]
    MissingTransactionHash,

    /// The log is pending and has no block number.
    #[error("log has no block number")]
    MissingBlockNumber,

    /// The non-indexed `value` payload is absent.
    #[error("log data is empty")]
    EmptyData,
}

/// A Transfer decoded from a log, before any network enrichment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferCandidate {
    /// Hash of the emitting transaction.
    pub transaction_hash: TxHash,
    /// Number of the block containing the log.
    pub block_number: u64,
    /// Sender.
    pub from: Address,
    /// Recipient.
    pub to: Address,
    /// Raw amount transferred.
    pub value: TransferValue,
}

/// Extracts the address held in the low 20 bytes of an indexed topic word.
pub fn address_from_topic(topic: &B256) -> Address {
    Address::from_word(*topic)
}

impl TryFrom<&Log> for TransferCandidate {
    type Error = DecodeError;

    fn try_from(log: &Log) -> Result<Self, Self::Error> {
        let topics = log.topics();
        if topics.len() < 3 {
            return Err(DecodeError::MissingTopics(topics.len()));
        }
        let transaction_hash = log.transaction_hash().ok_or(DecodeError::MissingTransactionHash)?;
        let block_number = log.block_number().ok_or(DecodeError::MissingBlockNumber)?;
        let data = log.data();
        if data.is_empty() {
            return Err(DecodeError::EmptyData);
        }

        Ok(Self {
            transaction_hash,
            block_number,
            from: address_from_topic(&topics[1]),
            to: address_from_topic(&topics[2]),
            value: TransferValue::from_be_slice(data),
        })
    }
}

/// An enriched Transfer, as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferEvent {
    /// Hash of the emitting transaction.
    pub transaction_hash: TxHash,
    /// Number of the block containing the log.
    pub block_number: u64,
    /// Sender.
    pub from: Address,
    /// Recipient.
    pub to: Address,
    /// Raw amount transferred.
    pub value: TransferValue,
    /// Block timestamp in unix seconds.
    pub timestamp: u64,
    /// Gas consumed by the transaction.
    #[serde(with = "decimal_string")]
    pub gas_used: u64,
    /// Gas price of the transaction, `0` when the node reports none.
    #[serde(with = "decimal_string")]
    pub gas_price: u128,
}

impl TransferEvent {
    /// Joins a decoded candidate with its enrichment lookups.
    pub fn assemble(
        candidate: TransferCandidate,
        transaction: TransactionSummary,
        receipt: ReceiptSummary,
        block: BlockSummary,
    ) -> Self {
        Self {
            transaction_hash: candidate.transaction_hash,
            block_number: candidate.block_number,
            from: candidate.from,
            to: candidate.to,
            value: candidate.value,
            timestamp: block.timestamp,
            gas_used: receipt.gas_used,
            gas_price: transaction.gas_price.unwrap_or_default(),
        }
    }
}
