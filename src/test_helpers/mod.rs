//! A set of helpers for testing

mod block;
mod log;
mod receipt;
mod source;
mod transfer;

pub use block::BlockBuilder;
pub use log::LogBuilder;
pub use receipt::ReceiptBuilder;
pub use source::FakeTransferSource;
pub use transfer::{
    create_test_transfer_candidate, create_test_transfer_event, create_test_transfer_log,
    test_tx_hash,
};
