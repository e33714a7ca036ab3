//! The transfer ingestion-and-ranking engine.

pub mod enricher;
pub mod log_fetcher;
pub mod pipeline;
pub mod range;
pub mod ranker;
pub mod selection;

pub use enricher::{BatchEnricher, DropReason, DroppedLog, EnrichmentOutcome};
pub use pipeline::{PipelineError, RankedTransfers, TransferPipeline, assemble_response};
pub use range::BlockRange;
