//! Resolves the block window to scan from the current chain head.

use crate::providers::traits::{DataSourceError, TransferSource};

/// An inclusive block range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRange {
    /// First block, inclusive.
    pub from: u64,
    /// Last block, inclusive.
    pub to: u64,
}

impl BlockRange {
    /// The `window` blocks leading up to and including `head`, clamped at
    /// genesis for short chains.
    pub fn trailing(head: u64, window: u64) -> Self {
        Self { from: head.saturating_sub(window), to: head }
    }
}

/// Fetches the chain head and derives the scan window from it.
#[tracing::instrument(skip(source), level = "debug")]
pub async fn resolve_range<S>(source: &S, window: u64) -> Result<BlockRange, DataSourceError>
where
    S: TransferSource + ?Sized,
{
    let head = source.get_current_block_number().await?;
    let range = BlockRange::trailing(head, window);
    tracing::debug!(from_block = range.from, to_block = range.to, "Resolved block range.");
    Ok(range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::traits::MockTransferSource;

    #[test]
    fn test_trailing_range() {
        assert_eq!(BlockRange::trailing(21_000_000, 50_400), BlockRange {
            from: 20_949_600,
            to: 21_000_000
        });
    }

    #[test]
    fn test_trailing_range_clamps_to_genesis() {
        assert_eq!(BlockRange::trailing(120, 50_400), BlockRange { from: 0, to: 120 });
    }

    #[tokio::test]
    async fn test_resolve_range_uses_head() {
        let mut source = MockTransferSource::new();
        source.expect_get_current_block_number().times(1).returning(|| Ok(1_000));

        let range = resolve_range(&source, 10).await.unwrap();

        assert_eq!(range, BlockRange { from: 990, to: 1_000 });
    }

    #[tokio::test]
    async fn test_resolve_range_propagates_head_failure() {
        let mut source = MockTransferSource::new();
        source
            .expect_get_current_block_number()
            .returning(|| Err(DataSourceError::BlockNotFound(0)));

        let result = resolve_range(&source, 10).await;

        assert!(matches!(result, Err(DataSourceError::BlockNotFound(0))));
    }
}
