use serde::Deserialize;

/// Configuration for the transport-level rate-limit retry policy.
///
/// Retries are disabled unless `max_retry` is raised above zero.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RpcRetryConfig {
    /// The maximum number of retries for a rate-limited request.
    pub max_retry: u32,
    /// The initial backoff delay in milliseconds.
    pub backoff_ms: u64, // Keep as u64 because alloy::transports::layers::RetryBackoffLayer expects it.
    /// The number of compute units per second to allow.
    pub compute_units_per_second: u64,
}

impl Default for RpcRetryConfig {
    fn default() -> Self {
        Self { max_retry: 0, backoff_ms: 1000, compute_units_per_second: 100 }
    }
}
