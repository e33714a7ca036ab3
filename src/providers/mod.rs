//! Access to the EVM JSON-RPC provider.

pub mod endpoint;
pub mod rpc;
pub mod traits;

pub use endpoint::{EndpointSelection, EndpointSelectionError, FallbackPolicy, select_endpoint};
pub use rpc::EvmRpcSource;
pub use traits::{DataSourceError, LogQuery, TransferSource};
