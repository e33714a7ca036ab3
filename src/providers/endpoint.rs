//! Picks the RPC endpoint the pipeline talks to.
//!
//! Candidates are tried in order and the first one that yields a client wins.
//! Only local construction is validated; a selected endpoint may still be
//! unreachable.

use alloy::providers::DynProvider;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use super::rpc::connect_http;
use crate::config::RpcRetryConfig;

/// What to do when no candidate endpoint can be turned into a client.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Build a client from the first candidate anyway. Calls against it are
    /// likely to fail later with a connectivity error.
    #[default]
    UseFirst,
    /// Treat the selection failure as fatal.
    Fail,
}

/// Why a single candidate was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EndpointError {
    /// The candidate is not a URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The HTTP transport only speaks http and https.
    #[error("unsupported scheme '{0}'")]
    UnsupportedScheme(String),
}

/// A rejected candidate and the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedEndpoint {
    /// The candidate as configured.
    pub endpoint: String,
    /// Why it was rejected.
    pub reason: EndpointError,
}

/// Errors returned by [`select_endpoint`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EndpointSelectionError {
    /// No candidate endpoints were configured.
    #[error("RPC URL list cannot be empty")]
    NoEndpoints,

    /// Every candidate was rejected and the policy forbids falling back.
    #[error("all {} RPC endpoints were rejected", .0.len())]
    AllRejected(Vec<RejectedEndpoint>),

    /// Every candidate was rejected and even the first cannot be used as a
    /// fallback because it is not a URL.
    #[error("fallback endpoint '{endpoint}' is unusable: {reason}")]
    FallbackUnusable {
        /// The first candidate.
        endpoint: String,
        /// Why no client could be built from it.
        reason: EndpointError,
    },
}

/// The outcome of a successful selection.
pub struct EndpointSelection {
    /// The client handle, shared read-only by all pipeline calls.
    pub provider: DynProvider,
    /// The URL the client was built from.
    pub endpoint: Url,
    /// Candidates rejected before (or instead of) the chosen one.
    pub rejected: Vec<RejectedEndpoint>,
    /// `true` when no candidate qualified and the first one was used anyway.
    pub is_fallback: bool,
}

impl std::fmt::Debug for EndpointSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EndpointSelection")
            .field("endpoint", &self.endpoint.as_str())
            .field("rejected", &self.rejected)
            .field("is_fallback", &self.is_fallback)
            .finish_non_exhaustive()
    }
}

/// Validates a candidate the way client construction would.
fn parse_endpoint(endpoint: &str) -> Result<Url, EndpointError> {
    let url = Url::parse(endpoint)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(EndpointError::UnsupportedScheme(other.to_string())),
    }
}

/// Returns a client for the first candidate that constructs.
///
/// When every candidate is rejected, `policy` decides between building a
/// client from the first candidate regardless of its scheme or failing.
#[tracing::instrument(skip(retry_config), level = "debug")]
pub fn select_endpoint(
    endpoints: &[String],
    policy: FallbackPolicy,
    retry_config: &RpcRetryConfig,
) -> Result<EndpointSelection, EndpointSelectionError> {
    let first = endpoints.first().ok_or(EndpointSelectionError::NoEndpoints)?;
    let mut rejected = Vec::new();

    for endpoint in endpoints {
        match parse_endpoint(endpoint) {
            Ok(url) => {
                tracing::debug!(endpoint = %url, "Selected RPC endpoint.");
                return Ok(EndpointSelection {
                    provider: connect_http(url.clone(), retry_config),
                    endpoint: url,
                    rejected,
                    is_fallback: false,
                });
            }
            Err(reason) => {
                tracing::warn!(endpoint = %endpoint, error = %reason, "Failed to build RPC client.");
                rejected.push(RejectedEndpoint { endpoint: endpoint.clone(), reason });
            }
        }
    }

    if policy == FallbackPolicy::Fail {
        return Err(EndpointSelectionError::AllRejected(rejected));
    }

    let url = Url::parse(first).map_err(|e| EndpointSelectionError::FallbackUnusable {
        endpoint: first.clone(),
        reason: EndpointError::InvalidUrl(e),
    })?;
    tracing::warn!(
        endpoint = %url,
        rejected = rejected.len(),
        "No RPC endpoint qualified; falling back to the first one."
    );

    Ok(EndpointSelection {
        provider: connect_http(url.clone(), retry_config),
        endpoint: url,
        rejected,
        is_fallback: true,
    })
}
