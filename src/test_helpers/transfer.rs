//! Fixtures for Transfer logs, candidates and enriched events.

use alloy::primitives::{Address, B256, U256};

use super::{FakeTransferSource, LogBuilder};
use crate::models::{Log, TransferCandidate, TransferEvent};

/// Returns a distinct, non-zero transaction hash for `seed`.
pub fn test_tx_hash(seed: u64) -> B256 {
    B256::from(U256::from(seed) + U256::from(1))
}

fn test_address(seed: u64, role: u8) -> Address {
    let mut bytes = [role; 20];
    bytes[12..].copy_from_slice(&seed.to_be_bytes());
    Address::from(bytes)
}

/// Creates a well-formed Transfer log in block `1000 + seed` emitted by
/// transaction `test_tx_hash(seed)`.
pub fn create_test_transfer_log(seed: u64, value: u128) -> Log {
    LogBuilder::transfer(test_address(seed, 0xaa), test_address(seed, 0xbb), U256::from(value))
        .transaction_hash(test_tx_hash(seed))
        .block_number(1_000 + seed)
        .log_index(seed)
        .build()
}

/// Creates the candidate `create_test_transfer_log(seed, value)` decodes to.
pub fn create_test_transfer_candidate(seed: u64, value: u128) -> TransferCandidate {
    TransferCandidate {
        transaction_hash: test_tx_hash(seed),
        block_number: 1_000 + seed,
        from: test_address(seed, 0xaa),
        to: test_address(seed, 0xbb),
        value: value.into(),
    }
}

/// Creates an enriched transfer with the given decimal `value`.
///
/// # Panics
///
/// Panics if `value` is not a base-10 integer.
pub fn create_test_transfer_event(seed: u64, value: &str) -> TransferEvent {
    let candidate = create_test_transfer_candidate(seed, 0);
    TransferEvent {
        transaction_hash: candidate.transaction_hash,
        block_number: candidate.block_number,
        from: candidate.from,
        to: candidate.to,
        value: value.parse().expect("test value must be a decimal integer"),
        timestamp: FakeTransferSource::timestamp_of(candidate.block_number),
        gas_used: FakeTransferSource::GAS_USED,
        gas_price: FakeTransferSource::GAS_PRICE,
    }
}
