//! Orders enriched transfers by value.

use crate::models::TransferEvent;

/// Sorts `transfers` by value, largest first, and keeps at most `limit`.
///
/// Values are compared as arbitrary-precision integers. The sort is stable,
/// so equal values keep their relative input order.
pub fn rank_transfers(mut transfers: Vec<TransferEvent>, limit: usize) -> Vec<TransferEvent> {
    transfers.sort_by(|a, b| b.value.cmp(&a.value));
    transfers.truncate(limit);
    transfers
}
