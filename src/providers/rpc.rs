//! This module provides the alloy-backed `TransferSource` and the
//! construction of RPC clients with an optional rate-limit retry policy.

use alloy::{
    primitives::TxHash,
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::{client::RpcClient, types::Filter},
    transports::{http::Http, layers::RetryBackoffLayer},
};
use async_trait::async_trait;
use tower::ServiceBuilder;
use url::Url;

use super::traits::{DataSourceError, LogQuery, TransferSource};
use crate::{
    config::RpcRetryConfig,
    models::{BlockSummary, Log, ReceiptSummary, TransactionSummary},
};

/// A `TransferSource` implementation that talks to an EVM RPC endpoint.
pub struct EvmRpcSource<P> {
    provider: P,
}

impl<P> EvmRpcSource<P>
where
    P: Provider,
{
    /// Creates a new `EvmRpcSource`.
    #[tracing::instrument(skip(provider), level = "debug")]
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

fn provider_error<E>(e: E) -> DataSourceError
where
    E: std::error::Error + Send + Sync + 'static,
{
    DataSourceError::Provider(Box::new(e))
}

#[async_trait]
impl<P> TransferSource for EvmRpcSource<P>
where
    P: Provider + Send + Sync,
{
    #[tracing::instrument(skip(self), level = "debug")]
    async fn get_current_block_number(&self) -> Result<u64, DataSourceError> {
        tracing::debug!("Fetching current block number from RPC.");
        let block_number = self.provider.get_block_number().await.map_err(provider_error)?;
        tracing::debug!(current_block = block_number, "Successfully fetched current block number.");
        Ok(block_number)
    }

    #[tracing::instrument(skip(self), level = "debug")]
    async fn fetch_logs(&self, query: LogQuery) -> Result<Vec<Log>, DataSourceError> {
        let filter = Filter::new()
            .address(query.address)
            .event_signature(query.event_signature)
            .from_block(query.range.from)
            .to_block(query.range.to);

        let logs = self.provider.get_logs(&filter).await.map_err(provider_error)?;
        tracing::debug!(log_count = logs.len(), "Successfully fetched logs.");
        Ok(logs.into_iter().map(Log::from).collect())
    }

    async fn fetch_transaction(
        &self,
        hash: TxHash,
    ) -> Result<TransactionSummary, DataSourceError> {
        let tx = self
            .provider
            .get_transaction_by_hash(hash)
            .await
            .map_err(provider_error)?
            .ok_or(DataSourceError::TransactionNotFound(hash))?;
        Ok(TransactionSummary::from(&tx))
    }

    async fn fetch_receipt(&self, hash: TxHash) -> Result<ReceiptSummary, DataSourceError> {
        let receipt = self
            .provider
            .get_transaction_receipt(hash)
            .await
            .map_err(provider_error)?
            .ok_or(DataSourceError::ReceiptNotFound(hash))?;
        Ok(ReceiptSummary::from(&receipt))
    }

    async fn fetch_block(&self, number: u64) -> Result<BlockSummary, DataSourceError> {
        let block = self
            .provider
            .get_block_by_number(number.into())
            .await
            .map_err(provider_error)?
            .ok_or(DataSourceError::BlockNotFound(number))?;
        Ok(BlockSummary::from(&block))
    }
}

/// Builds an HTTP provider for a single endpoint.
///
/// This performs no network round-trip; an unreachable endpoint only fails on
/// its first call.
pub fn connect_http(url: Url, retry_config: &RpcRetryConfig) -> DynProvider {
    let retry_layer = RetryBackoffLayer::new(
        retry_config.max_retry,
        retry_config.backoff_ms,
        retry_config.compute_units_per_second,
    );

    let service = ServiceBuilder::new().layer(retry_layer).service(Http::new(url));

    let client = RpcClient::builder().transport(service, false);
    ProviderBuilder::new().connect_client(client).erased()
}
