//! The JSON contract returned to clients of the transfers endpoint.

use serde::{Deserialize, Serialize};

use super::TransferEvent;

/// Body of a successful run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedBody {
    /// Always `true`.
    pub success: bool,
    /// Number of entries in `transfers`.
    pub count: usize,
    /// Number of logs that were enriched successfully.
    pub total_found: usize,
    /// Number of logs returned by the range query.
    pub total_logs: usize,
    /// The ranked transfers, largest first.
    pub transfers: Vec<TransferEvent>,
}

/// Body of a failed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureBody {
    /// Always `false`.
    pub success: bool,
    /// Short human-readable summary.
    pub error: String,
    /// The underlying error message.
    pub details: String,
}

/// Either the ranked list or a failure summary. Partial results are never
/// returned on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TransfersResponse {
    /// The pipeline completed.
    Ranked(RankedBody),
    /// The pipeline failed somewhere upstream.
    Failure(FailureBody),
}

impl TransfersResponse {
    /// Builds a success response; `count` is derived from `transfers`.
    pub fn ranked(total_logs: usize, total_found: usize, transfers: Vec<TransferEvent>) -> Self {
        Self::Ranked(RankedBody {
            success: true,
            count: transfers.len(),
            total_found,
            total_logs,
            transfers,
        })
    }

    /// Builds a failure response.
    pub fn failure(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self::Failure(FailureBody { success: false, error: error.into(), details: details.into() })
    }

    /// Returns `true` for a success response.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Ranked(_))
    }
}
