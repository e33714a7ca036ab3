//! Configuration module for the transfer ranker.

mod app_config;
mod helpers;
mod pipeline;
mod rpc_retry;
mod server;

pub use app_config::AppConfig;
pub use helpers::{deserialize_duration_from_ms, deserialize_string_list};
pub use pipeline::{
    BLOCKS_PER_WEEK, MORPHO_ADDRESS, PipelineConfig, PipelineConfigError, SelectionPolicy,
    TRANSFER_EVENT_SIGNATURE,
};
pub use rpc_retry::RpcRetryConfig;
pub use server::ServerConfig;
