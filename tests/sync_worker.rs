mod common;

use common::mock_remote::{MockRemote, MockResponse};
use common::sample_entry;
use nirocheck::domain::LogAction;
use nirocheck::shutdown::ShutdownHandle;
use nirocheck::sync::{command_channel, spawn_worker, SyncClient, SyncCommand, SyncEvent};
use std::time::Duration;
use tokio::sync::mpsc;

#[tokio::test]
async fn worker_reports_each_command_in_order() {
    let remote = MockRemote::start().await;
    remote.enqueue_response(MockResponse::default()).await;
    remote
        .enqueue_response(MockResponse::json(r#"{"success": true, "data": []}"#))
        .await;

    let client = SyncClient::new(Some(remote.endpoint()), Duration::from_secs(5)).unwrap();
    let (commands, receiver) = command_channel();
    let (events_tx, mut events_rx) = mpsc::unbounded_channel();
    let shutdown = ShutdownHandle::new();
    let worker = spawn_worker(
        client,
        receiver,
        move |event| {
            let _ = events_tx.send(event);
        },
        shutdown.clone(),
    );

    commands
        .send(SyncCommand::PushLogs {
            logs: vec![sample_entry(LogAction::In, None)],
        })
        .await
        .unwrap();
    commands.send(SyncCommand::PullStock).await.unwrap();

    let first = tokio::time::timeout(Duration::from_secs(5), events_rx.recv())
        .await
        .unwrap()
        .unwrap();
    assert!(matches!(first, SyncEvent::PushFinished(Ok(_))));
    let second = tokio::time::timeout(Duration::from_secs(5), events_rx.recv())
        .await
        .unwrap()
        .unwrap();
    assert!(matches!(second, SyncEvent::StockFinished(Ok(ref rows)) if rows.is_empty()));

    shutdown.signal();
    tokio::time::timeout(Duration::from_secs(1), worker)
        .await
        .unwrap()
        .unwrap();
}

#[tokio::test]
async fn shutdown_stops_idle_worker() {
    let client = SyncClient::new(None, Duration::from_secs(5)).unwrap();
    let (_commands, receiver) = command_channel();
    let shutdown = ShutdownHandle::new();
    let worker = spawn_worker(client, receiver, |_| {}, shutdown.clone());

    shutdown.signal();
    tokio::time::timeout(Duration::from_secs(1), worker)
        .await
        .unwrap()
        .unwrap();
}

#[tokio::test]
async fn missing_endpoint_is_reported_not_fatal() {
    let client = SyncClient::new(None, Duration::from_secs(5)).unwrap();
    let (commands, receiver) = command_channel();
    let (events_tx, mut events_rx) = mpsc::unbounded_channel();
    let shutdown = ShutdownHandle::new();
    let _worker = spawn_worker(
        client,
        receiver,
        move |event| {
            let _ = events_tx.send(event);
        },
        shutdown.clone(),
    );

    commands.send(SyncCommand::PullStock).await.unwrap();
    let event = tokio::time::timeout(Duration::from_secs(1), events_rx.recv())
        .await
        .unwrap()
        .unwrap();
    assert!(matches!(event, SyncEvent::StockFinished(Err(_))));
    shutdown.signal();
}
