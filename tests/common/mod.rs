#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use tinylink::domain::store::UrlStore;
use tinylink::routes::app_router;
use tinylink::state::AppState;

pub const TEST_BASE_URL: &str = "http://localhost:8080";

/// Builds fresh application state around an empty store.
///
/// Returns the store handle alongside so tests can inspect it directly.
pub fn create_test_state() -> (AppState, Arc<UrlStore>) {
    let store = Arc::new(UrlStore::new());
    let state = AppState::new(store.clone(), TEST_BASE_URL);
    (state, store)
}

/// Spins up a test server over the full application router.
pub fn create_test_server() -> (TestServer, Arc<UrlStore>) {
    let (state, store) = create_test_state();
    let server = TestServer::new(app_router(state)).unwrap();
    (server, store)
}

/// Shortens a URL through the API and returns the generated code.
pub async fn shorten(server: &TestServer, url: &str) -> String {
    let response = server
        .post("/shorten")
        .json(&serde_json::json!({ "url": url }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    json["short_code"].as_str().unwrap().to_string()
}
