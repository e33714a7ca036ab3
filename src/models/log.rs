//! The raw log shape returned by a ranged `eth_getLogs` query.

use alloy::{
    primitives::{B256, Bytes, TxHash},
    rpc::types::Log as AlloyLog,
};
use serde::{Deserialize, Serialize};

/// An RPC log, wrapped so the engine depends on a handful of accessors rather
/// than on alloy's full type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct Log(pub AlloyLog);

impl Log {
    /// Indexed topics; `topics[0]` is the event signature.
    pub fn topics(&self) -> &[B256] {
        self.0.topics()
    }

    /// The non-indexed payload.
    pub fn data(&self) -> &Bytes {
        &self.0.data().data
    }

    /// Block containing the log, `None` while pending.
    pub fn block_number(&self) -> Option<u64> {
        self.0.block_number
    }

    /// Emitting transaction, `None` while pending.
    pub fn transaction_hash(&self) -> Option<TxHash> {
        self.0.transaction_hash
    }
}

impl From<AlloyLog> for Log {
    fn from(log: AlloyLog) -> Self {
        Self(log)
    }
}
