//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_remote;

use chrono::{TimeZone, Utc};
use nirocheck::domain::{LogAction, LogEntry};
use nirocheck::store::MemoryStore;
use nirocheck::sync::{command_channel, SyncCommand};
use nirocheck::ui::App;
use std::path::PathBuf;
use tempfile::TempDir;
use tokio::sync::mpsc::Receiver;

/// Write `content` to a fresh `config.toml`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// App over an empty memory store, wired to a command channel.
pub fn make_app() -> (App, Receiver<SyncCommand>) {
    let (tx, rx) = command_channel();
    let mut app = App::new(Box::new(MemoryStore::new()));
    app.set_sync_sender(tx);
    (app, rx)
}

pub fn sample_entry(action: LogAction, plate: Option<&str>) -> LogEntry {
    LogEntry {
        id: LogEntry::key_for(3, 1, action, plate),
        item_id: 3,
        item_code: 3,
        item_name: "BATERIAS 12V (E70, NIRO, MAXUS)".to_string(),
        user_id: 1,
        user_name: "Jorge Toledo".to_string(),
        action,
        timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
        quantity: 2,
        plate: plate.map(str::to_string),
    }
}
