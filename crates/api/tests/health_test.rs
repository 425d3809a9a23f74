use std::sync::Arc;

use axum_test::TestServer;
use pretty_assertions::assert_eq;
use slotsync_api::{router, ApiState};
use slotsync_store::memory::MemoryStore;
use slotsync_sync::SelectionSync;

fn test_server() -> TestServer {
    let state = Arc::new(ApiState {
        sync: SelectionSync::new(Arc::new(MemoryStore::new())),
    });
    TestServer::new(router(state)).expect("Failed to build test server")
}

#[tokio::test]
async fn test_health_check() {
    let server = test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_version() {
    let server = test_server();

    let response = server.get("/version").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
