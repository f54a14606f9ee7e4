mod common;

use common::mock_remote::{MockRemote, MockResponse};
use common::sample_entry;
use nirocheck::domain::LogAction;
use nirocheck::sync::{SyncClient, SyncError, DEFAULT_PUSH_MESSAGE, DEFAULT_REJECT_MESSAGE};
use std::time::Duration;

fn client(remote: &MockRemote, push_timeout: Duration) -> SyncClient {
    SyncClient::new(Some(remote.endpoint()), push_timeout).unwrap()
}

#[tokio::test]
async fn push_posts_logs_as_plain_text_json() {
    let remote = MockRemote::start().await;
    remote
        .enqueue_response(MockResponse::json(
            r#"{"success": true, "message": "3 rows written"}"#,
        ))
        .await;

    let logs = vec![
        sample_entry(LogAction::Out, Some("AB12")),
        sample_entry(LogAction::In, None),
    ];
    let receipt = client(&remote, Duration::from_secs(5))
        .push_logs(&logs)
        .await
        .unwrap();
    assert_eq!(receipt.message, "3 rows written");

    let requests = remote.captured_requests().await;
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/macros/s/test/exec");
    assert_eq!(
        request.header("content-type"),
        Some("text/plain;charset=utf-8")
    );

    let body = request.json();
    let sent = body["logs"].as_array().unwrap();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0]["action"], "SALIDA");
    assert_eq!(sent[0]["patente"], "AB12");
    assert_eq!(sent[0]["itemCode"], 3);
    assert_eq!(sent[0]["timestamp"], "2024-05-01T12:30:00.000Z");
    assert_eq!(sent[1]["action"], "INGRESO");
    assert!(sent[1].get("patente").is_none());
}

#[tokio::test]
async fn push_without_message_uses_default() {
    let remote = MockRemote::start().await;
    remote
        .enqueue_response(MockResponse::json(r#"{"success": true}"#))
        .await;
    let receipt = client(&remote, Duration::from_secs(5))
        .push_logs(&[sample_entry(LogAction::In, None)])
        .await
        .unwrap();
    assert_eq!(receipt.message, DEFAULT_PUSH_MESSAGE);
}

#[tokio::test]
async fn push_rejection_carries_message() {
    let remote = MockRemote::start().await;
    remote
        .enqueue_response(MockResponse::json(
            r#"{"success": false, "message": "Sheet locked"}"#,
        ))
        .await;
    let err = client(&remote, Duration::from_secs(5))
        .push_logs(&[sample_entry(LogAction::In, None)])
        .await
        .unwrap_err();
    assert!(matches!(err, SyncError::Rejected { ref message } if message == "Sheet locked"));
}

#[tokio::test]
async fn push_rejection_without_message_uses_default() {
    let remote = MockRemote::start().await;
    remote
        .enqueue_response(MockResponse::json(r#"{"success": false}"#))
        .await;
    let err = client(&remote, Duration::from_secs(5))
        .push_logs(&[sample_entry(LogAction::In, None)])
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), DEFAULT_REJECT_MESSAGE);
}

#[tokio::test]
async fn push_http_error_embeds_status_and_body() {
    let remote = MockRemote::start().await;
    remote
        .enqueue_response(MockResponse::text(500, "script crashed"))
        .await;
    let err = client(&remote, Duration::from_secs(5))
        .push_logs(&[sample_entry(LogAction::In, None)])
        .await
        .unwrap_err();
    assert!(matches!(err, SyncError::Status { status: 500, .. }));
    let message = err.to_string();
    assert!(message.contains("500"));
    assert!(message.contains("script crashed"));
}

#[tokio::test]
async fn push_non_json_body_is_invalid_response() {
    let remote = MockRemote::start().await;
    remote
        .enqueue_response(MockResponse::text(200, "<html>login</html>"))
        .await;
    let err = client(&remote, Duration::from_secs(5))
        .push_logs(&[sample_entry(LogAction::In, None)])
        .await
        .unwrap_err();
    assert!(matches!(err, SyncError::InvalidResponse { ref body } if body.contains("login")));
}

#[tokio::test]
async fn push_is_abandoned_after_timeout() {
    let remote = MockRemote::start().await;
    remote
        .enqueue_response(MockResponse::default().with_delay(2_000))
        .await;
    let started = std::time::Instant::now();
    let err = client(&remote, Duration::from_millis(200))
        .push_logs(&[sample_entry(LogAction::In, None)])
        .await
        .unwrap_err();
    assert!(matches!(err, SyncError::Timeout { .. }));
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn pull_requests_inventory_and_maps_rows() {
    let remote = MockRemote::start().await;
    remote
        .enqueue_response(MockResponse::json(
            r#"{"success": true, "data": [[1, "NEUMATICOS NIRO", 14], ["7", "PARTIDOR Y CABLE AUXILIAR", "3"]]}"#,
        ))
        .await;

    let rows = client(&remote, Duration::from_secs(5))
        .pull_stock()
        .await
        .unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!((rows[0].id, rows[0].code, rows[0].quantity), (1, 1, 14));
    assert_eq!((rows[1].id, rows[1].code, rows[1].quantity), (2, 7, 3));

    let requests = remote.captured_requests().await;
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].query.as_deref(), Some("action=getInventory"));
}

#[tokio::test]
async fn pull_with_success_false_is_rejected() {
    let remote = MockRemote::start().await;
    remote
        .enqueue_response(MockResponse::json(
            r#"{"success": false, "message": "No sheet named Bodega"}"#,
        ))
        .await;
    let err = client(&remote, Duration::from_secs(5))
        .pull_stock()
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "No sheet named Bodega");
}

#[tokio::test]
async fn pull_http_error_is_status() {
    let remote = MockRemote::start().await;
    remote
        .enqueue_response(MockResponse::text(404, "not found"))
        .await;
    let err = client(&remote, Duration::from_secs(5))
        .pull_stock()
        .await
        .unwrap_err();
    assert!(matches!(err, SyncError::Status { status: 404, .. }));
}
