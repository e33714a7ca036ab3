#![warn(missing_docs)]
//! Transfer ranker finds the largest recent ERC-20 `Transfer` events of a
//! token and serves them as a ranked list.

pub mod cmd;
pub mod config;
pub mod engine;
pub mod http_server;
pub mod models;
pub mod providers;
pub mod test_helpers;
