mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_stats_success() {
    let (server, _store) = common::create_test_server();

    let code = common::shorten(&server, "https://example.com").await;

    let response = server.get(&format!("/stats/{code}")).await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["short_code"], code);
    assert_eq!(json["original_url"], "https://example.com");
    assert_eq!(json["clicks"], 0);
    assert!(json["created_at"].is_string());
}

#[tokio::test]
async fn test_stats_reflects_clicks() {
    let (server, _store) = common::create_test_server();

    let code = common::shorten(&server, "https://example.com").await;

    for _ in 0..5 {
        server.get(&format!("/{code}")).await.assert_status(StatusCode::FOUND);
    }

    let response = server.get(&format!("/stats/{code}")).await;
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["clicks"], 5);
}

#[tokio::test]
async fn test_stats_does_not_count_as_click() {
    let (server, store) = common::create_test_server();

    let code = common::shorten(&server, "https://example.com").await;

    for _ in 0..3 {
        server.get(&format!("/stats/{code}")).await.assert_status_ok();
    }

    assert_eq!(store.get(&code).unwrap().clicks, 0);
}

#[tokio::test]
async fn test_stats_not_found() {
    let (server, _store) = common::create_test_server();

    let response = server.get("/stats/nonexistent-code").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "Short URL not found");
}
