//! This module contains the data models for the transfer ranker.

pub mod log;
pub mod response;
pub mod summary;
pub mod transfer;

pub use log::Log;
pub use response::{FailureBody, RankedBody, TransfersResponse};
pub use summary::{BlockSummary, ReceiptSummary, TransactionSummary};
pub use transfer::{DecodeError, TransferCandidate, TransferEvent, TransferValue};
