use std::{net::SocketAddr, sync::Arc, time::Duration};

use reqwest::Client;
use tokio::task;
use transfer_ranker::{
    config::{PipelineConfig, ServerConfig},
    engine::TransferPipeline,
    http_server,
    providers::TransferSource,
    test_helpers::FakeTransferSource,
};

pub fn create_test_pipeline_config() -> PipelineConfig {
    PipelineConfig {
        token_symbol: "TEST".to_string(),
        block_window: 100,
        batch_delay: Duration::ZERO,
        ..Default::default()
    }
}

pub struct TestServer {
    pub address: SocketAddr,
    pub server_handle: task::JoinHandle<()>,
    pub client: Client,
}

impl TestServer {
    pub async fn new(source: FakeTransferSource) -> Self {
        Self::with_config(source, create_test_pipeline_config()).await
    }

    pub async fn with_config(source: FakeTransferSource, config: PipelineConfig) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get address");
        drop(listener); // Release port for the app to use

        let source: Arc<dyn TransferSource> = Arc::new(source);
        let pipeline =
            Arc::new(TransferPipeline::new(source, config).expect("Invalid pipeline config"));
        let server_config = ServerConfig { listen_address: addr.to_string() };

        // Spawn the actual app server
        let server_handle = task::spawn(async move {
            http_server::run_server_from_config(&server_config, pipeline)
                .await
                .expect("Server failed");
        });

        let server = Self { address: addr, server_handle, client: Client::new() };
        server.wait_until_ready().await;
        server
    }

    async fn wait_until_ready(&self) {
        let url = format!("http://{}/health", self.address);
        for _ in 0..50 {
            if self.client.get(&url).send().await.is_ok() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        panic!("Server did not start on {}", self.address);
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        let url = format!("http://{}{}", self.address, path);
        self.client.get(&url).send().await.expect("Request failed")
    }

    pub fn cleanup(self) {
        self.server_handle.abort();
    }
}
