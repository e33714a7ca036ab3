use transfer_ranker::{
    config::{PipelineConfig, SelectionPolicy},
    test_helpers::{FakeTransferSource, create_test_transfer_log, test_tx_hash},
};

use crate::helpers::*;

#[tokio::test]
async fn transfers_endpoint_returns_ranked_list() {
    let logs = vec![
        create_test_transfer_log(0, 100),
        create_test_transfer_log(1, 5000),
        create_test_transfer_log(2, 250),
    ];
    let server = TestServer::new(FakeTransferSource::new().with_logs(logs)).await;

    let resp = server.get("/api/transfers").await;

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.expect("Failed to parse JSON");
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 3);
    assert_eq!(body["totalFound"], 3);
    assert_eq!(body["totalLogs"], 3);

    let transfers = body["transfers"].as_array().expect("transfers is an array");
    let values: Vec<&str> = transfers.iter().map(|t| t["value"].as_str().unwrap()).collect();
    assert_eq!(values, vec!["5000", "250", "100"]);

    let top = &transfers[0];
    assert_eq!(top["blockNumber"], 1001);
    assert_eq!(
        top["transactionHash"].as_str().unwrap().to_lowercase(),
        test_tx_hash(1).to_string().to_lowercase()
    );
    assert_eq!(top["gasUsed"], FakeTransferSource::GAS_USED.to_string());
    assert_eq!(top["gasPrice"], FakeTransferSource::GAS_PRICE.to_string());
    assert_eq!(top["timestamp"], FakeTransferSource::timestamp_of(1001));

    server.cleanup();
}

#[tokio::test]
async fn transfers_endpoint_reports_failed_lookup_in_counts() {
    let logs: Vec<_> = (0..4).map(|i| create_test_transfer_log(i, 10 + i as u128)).collect();
    let source = FakeTransferSource::new().with_logs(logs).fail_lookups_for(test_tx_hash(3));
    let server = TestServer::new(source).await;

    let resp = server.get("/api/transfers").await;

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.expect("Failed to parse JSON");
    assert_eq!(body["totalLogs"], 4);
    assert_eq!(body["totalFound"], 3);
    assert_eq!(body["count"], 3);
    assert_eq!(body["transfers"][0]["value"], "12");

    server.cleanup();
}

#[tokio::test]
async fn transfers_endpoint_returns_500_when_head_lookup_fails() {
    let server = TestServer::new(FakeTransferSource::new().failing_head("connection refused")).await;

    let resp = server.get("/api/transfers").await;

    assert_eq!(resp.status(), 500);
    let body: serde_json::Value = resp.json().await.expect("Failed to parse JSON");
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Failed to fetch TEST transfers");
    assert!(body["details"].as_str().unwrap().contains("connection refused"));
    assert!(body.get("transfers").is_none());

    server.cleanup();
}

#[tokio::test]
async fn transfers_endpoint_returns_500_when_range_is_rejected() {
    let source = FakeTransferSource::new()
        .with_logs(vec![create_test_transfer_log(0, 1)])
        .failing_logs("query returned more than 10000 results");
    let server = TestServer::new(source).await;

    let resp = server.get("/api/transfers").await;

    assert_eq!(resp.status(), 500);
    let body: serde_json::Value = resp.json().await.expect("Failed to parse JSON");
    assert_eq!(body["success"], false);
    assert!(body["details"].as_str().unwrap().contains("more than 10000 results"));

    server.cleanup();
}

#[tokio::test]
async fn transfers_endpoint_honours_selection_policy() {
    let logs: Vec<_> = (0..120).map(|i| create_test_transfer_log(i, i as u128 + 1)).collect();

    let truncating = TestServer::new(FakeTransferSource::new().with_logs(logs.clone())).await;
    let body: serde_json::Value =
        truncating.get("/api/transfers").await.json().await.expect("Failed to parse JSON");
    assert_eq!(body["totalLogs"], 120);
    assert_eq!(body["totalFound"], 100);
    assert_eq!(body["count"], 50);
    assert_eq!(body["transfers"][0]["value"], "100");
    truncating.cleanup();

    let config = PipelineConfig {
        selection: SelectionPolicy::RankThenTruncate,
        ..create_test_pipeline_config()
    };
    let ranking = TestServer::with_config(FakeTransferSource::new().with_logs(logs), config).await;
    let body: serde_json::Value =
        ranking.get("/api/transfers").await.json().await.expect("Failed to parse JSON");
    assert_eq!(body["totalFound"], 100);
    assert_eq!(body["transfers"][0]["value"], "120");
    ranking.cleanup();
}

#[tokio::test]
async fn every_request_runs_a_fresh_pipeline() {
    let source = FakeTransferSource::new().with_logs(vec![create_test_transfer_log(0, 9)]);
    let server = TestServer::new(source).await;

    for _ in 0..2 {
        let body: serde_json::Value =
            server.get("/api/transfers").await.json().await.expect("Failed to parse JSON");
        assert_eq!(body["count"], 1);
        assert_eq!(body["totalLogs"], 1);
    }

    server.cleanup();
}
