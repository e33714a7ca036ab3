//! A builder for creating `Log` instances for testing.

use crate::{config::TRANSFER_EVENT_SIGNATURE, models::Log};
use alloy::{
    primitives::{Address, B256, Bytes, LogData, U256},
    rpc::types::Log as AlloyLog,
};

/// A builder for creating `Log` instances for testing.
#[derive(Debug, Clone, Default)]
pub struct LogBuilder {
    address: Address,
    topics: Vec<B256>,
    data: Bytes,
    transaction_hash: Option<B256>,
    block_number: Option<u64>,
    log_index: Option<u64>,
}

impl LogBuilder {
    /// Creates a new `LogBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a Transfer log: signature, padded `from`/`to` topics and the
    /// amount as a 32-byte word.
    pub fn transfer(from: Address, to: Address, value: U256) -> Self {
        Self::new()
            .topics(vec![TRANSFER_EVENT_SIGNATURE, from.into_word(), to.into_word()])
            .data(Bytes::from(value.to_be_bytes::<32>().to_vec()))
    }

    /// Sets the address of the contract that emitted the log.
    pub fn address(mut self, address: Address) -> Self {
        self.address = address;
        self
    }

    /// Adds a topic to the log.
    pub fn topic(mut self, topic: B256) -> Self {
        self.topics.push(topic);
        self
    }

    /// Sets the topics of the log.
    pub fn topics(mut self, topics: Vec<B256>) -> Self {
        self.topics = topics;
        self
    }

    /// Sets the data of the log.
    pub fn data(mut self, data: Bytes) -> Self {
        self.data = data;
        self
    }

    /// Sets the transaction hash of the log.
    pub fn transaction_hash(mut self, hash: B256) -> Self {
        self.transaction_hash = Some(hash);
        self
    }

    /// Sets the block number of the log.
    pub fn block_number(mut self, number: u64) -> Self {
        self.block_number = Some(number);
        self
    }

    /// Sets the log index of the log.
    pub fn log_index(mut self, index: u64) -> Self {
        self.log_index = Some(index);
        self
    }

    /// Builds the `AlloyLog` with the provided values.
    pub fn build(self) -> Log {
        AlloyLog {
            inner: alloy::primitives::Log {
                address: self.address,
                data: LogData::new_unchecked(self.topics, self.data),
            },
            transaction_hash: self.transaction_hash,
            transaction_index: None,
            block_hash: None,
            block_number: self.block_number,
            log_index: self.log_index,
            removed: false,
            block_timestamp: None,
        }
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    #[test]
    fn test_transfer_log_layout() {
        let from = address!("1111111111111111111111111111111111111111");
        let to = address!("2222222222222222222222222222222222222222");
        let log = LogBuilder::transfer(from, to, U256::from(0xbeef))
            .address(address!("58d97b57bb95320f9a05dc918aef65434969c2b2"))
            .transaction_hash(B256::repeat_byte(7))
            .block_number(42)
            .build();

        assert_eq!(log.topics(), &[TRANSFER_EVENT_SIGNATURE, from.into_word(), to.into_word()]);
        assert_eq!(log.data().len(), 32);
        assert_eq!(&log.data()[30..], &[0xbe, 0xef]);
        assert_eq!(log.transaction_hash(), Some(B256::repeat_byte(7)));
        assert_eq!(log.block_number(), Some(42));
    }

    #[test]
    fn test_log_builder_defaults_to_pending() {
        let log = LogBuilder::new().topic(B256::repeat_byte(1)).build();

        assert_eq!(log.topics().len(), 1);
        assert!(log.data().is_empty());
        assert_eq!(log.block_number(), None);
        assert_eq!(log.transaction_hash(), None);
    }
}
