//! Chooses which logs are worth enriching.

use super::enricher::{DropReason, DroppedLog};
use crate::{
    config::SelectionPolicy,
    models::{Log, TransferCandidate},
};

/// Decodes logs into candidates and applies the enrichment cap.
///
/// Under [`SelectionPolicy::TruncateThenRank`] only the first `cap` logs are
/// looked at. Under [`SelectionPolicy::RankThenTruncate`] every log is decoded
/// and the `cap` largest candidates are kept, largest first.
pub fn select_candidates(
    logs: &[Log],
    cap: usize,
    policy: SelectionPolicy,
) -> (Vec<TransferCandidate>, Vec<DroppedLog>) {
    let window = match policy {
        SelectionPolicy::TruncateThenRank => &logs[..logs.len().min(cap)],
        SelectionPolicy::RankThenTruncate => logs,
    };

    let mut candidates = Vec::with_capacity(window.len().min(cap));
    let mut dropped = Vec::new();
    for log in window {
        match TransferCandidate::try_from(log) {
            Ok(candidate) => candidates.push(candidate),
            Err(e) => dropped.push(DroppedLog {
                transaction_hash: log.transaction_hash(),
                reason: DropReason::Decode(e),
            }),
        }
    }

    if policy == SelectionPolicy::RankThenTruncate {
        candidates.sort_by(|a, b| b.value.cmp(&a.value));
        candidates.truncate(cap);
    }

    (candidates, dropped)
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{Address, B256, U256};

    use super::*;
    use crate::test_helpers::{LogBuilder, create_test_transfer_log};

    fn values(candidates: &[TransferCandidate]) -> Vec<String> {
        candidates.iter().map(|c| c.value.to_string()).collect()
    }

    #[test]
    fn test_truncate_then_rank_keeps_provider_prefix() {
        let logs: Vec<Log> = (0..5).map(|i| create_test_transfer_log(i, 10 * (i as u128 + 1))).collect();

        let (candidates, dropped) = select_candidates(&logs, 3, SelectionPolicy::TruncateThenRank);

        assert_eq!(values(&candidates), vec!["10", "20", "30"]);
        assert!(dropped.is_empty());
    }

    #[test]
    fn test_rank_then_truncate_keeps_largest() {
        let logs: Vec<Log> = (0..5).map(|i| create_test_transfer_log(i, 10 * (i as u128 + 1))).collect();

        let (candidates, dropped) = select_candidates(&logs, 3, SelectionPolicy::RankThenTruncate);

        assert_eq!(values(&candidates), vec!["50", "40", "30"]);
        assert!(dropped.is_empty());
    }

    #[test]
    fn test_undecodable_logs_are_dropped_with_reason() {
        let broken = LogBuilder::new()
            .topic(B256::repeat_byte(1))
            .transaction_hash(B256::repeat_byte(0xee))
            .block_number(1)
            .build();
        let logs = vec![create_test_transfer_log(0, 5), broken];

        let (candidates, dropped) = select_candidates(&logs, 10, SelectionPolicy::TruncateThenRank);

        assert_eq!(candidates.len(), 1);
        assert_eq!(dropped.len(), 1);
        assert_eq!(dropped[0].transaction_hash, Some(B256::repeat_byte(0xee)));
        assert!(matches!(dropped[0].reason, DropReason::Decode(_)));
    }

    #[test]
    fn test_logs_past_the_cap_are_never_decoded() {
        let pending = LogBuilder::transfer(Address::ZERO, Address::ZERO, U256::from(1)).build();
        let logs = vec![create_test_transfer_log(0, 1), pending];

        let (candidates, dropped) = select_candidates(&logs, 1, SelectionPolicy::TruncateThenRank);

        assert_eq!(candidates.len(), 1);
        assert!(dropped.is_empty());
    }

    #[test]
    fn test_zero_cap_selects_nothing() {
        let logs = vec![create_test_transfer_log(0, 1)];
        for policy in [SelectionPolicy::TruncateThenRank, SelectionPolicy::RankThenTruncate] {
            let (candidates, _) = select_candidates(&logs, 0, policy);
            assert!(candidates.is_empty());
        }
    }
}
