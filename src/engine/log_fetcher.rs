//! Issues the single ranged Transfer log query for the target contract.

use alloy::primitives::{Address, B256};

use super::BlockRange;
use crate::{
    models::Log,
    providers::traits::{DataSourceError, LogQuery, TransferSource},
};

/// Fetches every log matching `contract` and `event_signature` in `range`.
///
/// The provider's ordering is kept as-is. Rejections (for instance a range
/// the provider considers too wide) are returned to the caller unchanged; the
/// range is never split.
#[tracing::instrument(skip(source), level = "debug")]
pub async fn fetch_transfer_logs<S>(
    source: &S,
    contract: Address,
    event_signature: B256,
    range: BlockRange,
) -> Result<Vec<Log>, DataSourceError>
where
    S: TransferSource + ?Sized,
{
    let query = LogQuery { address: contract, event_signature, range };
    let logs = source.fetch_logs(query).await?;
    tracing::info!(
        from_block = range.from,
        to_block = range.to,
        log_count = logs.len(),
        "Fetched transfer logs."
    );
    Ok(logs)
}
