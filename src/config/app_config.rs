use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use super::{PipelineConfig, RpcRetryConfig, ServerConfig, deserialize_string_list};
use crate::providers::FallbackPolicy;

/// Public Ethereum mainnet endpoints, tried in order.
fn default_rpc_urls() -> Vec<String> {
    [
        "https://eth-mainnet.g.alchemy.com/v2/demo",
        "https://ethereum-rpc.publicnode.com",
        "https://rpc.ankr.com/eth",
        "https://eth.llamarpc.com",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Application configuration for the transfer ranker.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Candidate RPC endpoints, in order of preference.
    #[serde(default = "default_rpc_urls", deserialize_with = "deserialize_string_list")]
    pub rpc_urls: Vec<String>,

    /// What to do when no candidate endpoint yields a client.
    #[serde(default)]
    pub endpoint_fallback: FallbackPolicy,

    /// Transport retry configuration.
    #[serde(default)]
    pub rpc_retry_config: RpcRetryConfig,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Parameters of the ingestion-and-ranking pipeline.
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rpc_urls: default_rpc_urls(),
            endpoint_fallback: FallbackPolicy::default(),
            rpc_retry_config: RpcRetryConfig::default(),
            server: ServerConfig::default(),
            pipeline: PipelineConfig::default(),
        }
    }
}

impl AppConfig {
    /// Creates a new `AppConfig` by reading `app.yaml` from the configuration
    /// directory and applying `RANKER__*` environment overrides on top.
    pub fn new(config_dir: Option<&str>) -> Result<Self, ConfigError> {
        let config_dir_str = config_dir.unwrap_or("configs");
        let s = Config::builder()
            .add_source(File::with_name(&format!("{}/app.yaml", config_dir_str)).required(false))
            .add_source(Environment::with_prefix("RANKER").separator("__"))
            .build()?;
        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Mutex, time::Duration};

    use super::*;
    use crate::config::{BLOCKS_PER_WEEK, SelectionPolicy};

    // `AppConfig::new` reads the process environment, which one test mutates.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn write_config(content: &str) -> tempfile::TempDir {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join("app.yaml"), content).unwrap();
        temp_dir
    }

    #[test]
    fn test_app_config_from_file() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp_dir = write_config(
            r#"
        rpc_urls:
          - "http://localhost:8545"
          - "http://localhost:8546"
        endpoint_fallback: fail
        server:
          listen_address: "127.0.0.1:9000"
        pipeline:
          block_window: 100
          batch_size: 5
          batch_delay_ms: 20
          selection: rank_then_truncate
        "#,
        );

        let config = AppConfig::new(Some(temp_dir.path().to_str().unwrap())).unwrap();

        assert_eq!(config.rpc_urls, vec!["http://localhost:8545", "http://localhost:8546"]);
        assert_eq!(config.endpoint_fallback, FallbackPolicy::Fail);
        assert_eq!(config.server.listen_address, "127.0.0.1:9000");
        assert_eq!(config.pipeline.block_window, 100);
        assert_eq!(config.pipeline.batch_size, 5);
        assert_eq!(config.pipeline.batch_delay, Duration::from_millis(20));
        assert_eq!(config.pipeline.selection, SelectionPolicy::RankThenTruncate);
        assert_eq!(config.pipeline.prefix_cap, 100);
        assert_eq!(config.rpc_retry_config, RpcRetryConfig::default());
    }

    #[test]
    fn test_app_config_without_file_uses_defaults() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp_dir = tempfile::tempdir().unwrap();
        let config = AppConfig::new(Some(temp_dir.path().to_str().unwrap())).unwrap();

        assert_eq!(config.rpc_urls, default_rpc_urls());
        assert_eq!(config.endpoint_fallback, FallbackPolicy::UseFirst);
        assert_eq!(config.pipeline, PipelineConfig::default());
    }

    #[test]
    fn test_shipped_config_matches_defaults() {
        let _guard = ENV_LOCK.lock().unwrap();
        let config = AppConfig::new(Some(concat!(env!("CARGO_MANIFEST_DIR"), "/configs"))).unwrap();

        assert_eq!(config.rpc_urls, default_rpc_urls());
        assert_eq!(config.rpc_retry_config, RpcRetryConfig::default());
        assert_eq!(config.pipeline, PipelineConfig::default());
    }

    #[test]
    fn test_app_config_from_file_with_env_var_override() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp_dir = write_config(
            r#"
        rpc_urls:
          - "http://localhost:8545"
        "#,
        );

        unsafe {
            std::env::set_var("RANKER__RPC_URLS", "http://override:8545,http://another:8545");
        }

        let config = AppConfig::new(Some(temp_dir.path().to_str().unwrap())).unwrap();

        unsafe {
            std::env::remove_var("RANKER__RPC_URLS");
        }

        assert_eq!(config.rpc_urls, vec!["http://override:8545", "http://another:8545"]);
    }

    #[test]
    fn test_nested_pipeline_env_var_override() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp_dir = write_config(
            r#"
        pipeline:
          batch_size: 5
          batch_delay_ms: 20
        "#,
        );

        unsafe {
            std::env::set_var("RANKER__PIPELINE__BATCH_SIZE", "3");
            std::env::set_var("RANKER__PIPELINE__BATCH_DELAY_MS", "250");
        }

        let result = AppConfig::new(Some(temp_dir.path().to_str().unwrap()));

        unsafe {
            std::env::remove_var("RANKER__PIPELINE__BATCH_SIZE");
            std::env::remove_var("RANKER__PIPELINE__BATCH_DELAY_MS");
        }

        let config = result.unwrap();
        assert_eq!(config.pipeline.batch_size, 3);
        assert_eq!(config.pipeline.batch_delay, Duration::from_millis(250));
        assert_eq!(config.pipeline.block_window, BLOCKS_PER_WEEK);
    }
}
