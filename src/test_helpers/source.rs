//! An in-memory `TransferSource` that records the lookups made against it.

use std::{
    collections::HashSet,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use alloy::primitives::TxHash;
use async_trait::async_trait;

use crate::{
    models::{BlockSummary, Log, ReceiptSummary, TransactionSummary},
    providers::{DataSourceError, LogQuery, TransferSource},
};

/// A scripted `TransferSource`.
///
/// Every transaction, receipt and block lookup succeeds with fixed values
/// unless its hash was marked with [`FakeTransferSource::fail_lookups_for`].
/// Each lookup yields once so that concurrent lookups overlap.
#[derive(Debug)]
pub struct FakeTransferSource {
    head: u64,
    logs: Vec<Log>,
    head_error: Option<String>,
    logs_error: Option<String>,
    failing: HashSet<TxHash>,
    gas_price: Option<u128>,
    lookups: Mutex<Vec<TxHash>>,
    queries: Mutex<Vec<LogQuery>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl Default for FakeTransferSource {
    fn default() -> Self {
        Self {
            head: 1_000,
            logs: Vec::new(),
            head_error: None,
            logs_error: None,
            failing: HashSet::new(),
            gas_price: Some(Self::GAS_PRICE),
            lookups: Mutex::new(Vec::new()),
            queries: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }
}

impl FakeTransferSource {
    /// Gas used reported by every receipt.
    pub const GAS_USED: u64 = 52_000;

    /// Gas price reported by every transaction, in wei.
    pub const GAS_PRICE: u128 = 3_000_000_000;

    /// Creates a source at head block 1000 with no logs.
    pub fn new() -> Self {
        Self::default()
    }

    /// The timestamp reported for `block`.
    pub fn timestamp_of(block: u64) -> u64 {
        1_700_000_000 + block * 12
    }

    /// Sets the chain head.
    pub fn with_head(mut self, head: u64) -> Self {
        self.head = head;
        self
    }

    /// Sets the logs returned by every range query, in order.
    pub fn with_logs(mut self, logs: Vec<Log>) -> Self {
        self.logs = logs;
        self
    }

    /// Makes the head lookup fail with `message`.
    pub fn failing_head(mut self, message: &str) -> Self {
        self.head_error = Some(message.to_string());
        self
    }

    /// Makes the range query fail with `message`.
    pub fn failing_logs(mut self, message: &str) -> Self {
        self.logs_error = Some(message.to_string());
        self
    }

    /// Makes the receipt lookup for `hash` fail.
    pub fn fail_lookups_for(mut self, hash: TxHash) -> Self {
        self.failing.insert(hash);
        self
    }

    /// Reports transactions without a gas price.
    pub fn without_gas_price(mut self) -> Self {
        self.gas_price = None;
        self
    }

    /// Transaction hashes looked up so far, in call order.
    pub fn transaction_lookups(&self) -> Vec<TxHash> {
        self.lookups.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// Range queries received so far.
    pub fn log_queries(&self) -> Vec<LogQuery> {
        self.queries.lock().map(|q| q.clone()).unwrap_or_default()
    }

    /// The largest number of lookups that were pending at the same time.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    async fn lookup(&self) {
        let _guard = InFlight::enter(self);
        tokio::task::yield_now().await;
    }
}

struct InFlight<'a>(&'a FakeTransferSource);

impl<'a> InFlight<'a> {
    fn enter(source: &'a FakeTransferSource) -> Self {
        let now = source.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        source.max_in_flight.fetch_max(now, Ordering::SeqCst);
        Self(source)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl TransferSource for FakeTransferSource {
    async fn get_current_block_number(&self) -> Result<u64, DataSourceError> {
        match &self.head_error {
            Some(message) => Err(DataSourceError::Provider(message.clone().into())),
            None => Ok(self.head),
        }
    }

    async fn fetch_logs(&self, query: LogQuery) -> Result<Vec<Log>, DataSourceError> {
        if let Ok(mut queries) = self.queries.lock() {
            queries.push(query);
        }
        match &self.logs_error {
            Some(message) => Err(DataSourceError::Provider(message.clone().into())),
            None => Ok(self.logs.clone()),
        }
    }

    async fn fetch_transaction(
        &self,
        hash: TxHash,
    ) -> Result<TransactionSummary, DataSourceError> {
        if let Ok(mut lookups) = self.lookups.lock() {
            lookups.push(hash);
        }
        self.lookup().await;
        Ok(TransactionSummary { gas_price: self.gas_price })
    }

    async fn fetch_receipt(&self, hash: TxHash) -> Result<ReceiptSummary, DataSourceError> {
        self.lookup().await;
        if self.failing.contains(&hash) {
            return Err(DataSourceError::ReceiptNotFound(hash));
        }
        Ok(ReceiptSummary { transaction_hash: hash, gas_used: Self::GAS_USED })
    }

    async fn fetch_block(&self, number: u64) -> Result<BlockSummary, DataSourceError> {
        self.lookup().await;
        Ok(BlockSummary { number, timestamp: Self::timestamp_of(number) })
    }
}
