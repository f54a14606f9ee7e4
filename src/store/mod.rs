//! Durable key-value storage for the local ledger.
//!
//! Two keys are used: [`INVENTORY_KEY`] holds the inventory snapshot and
//! [`ACTIVITY_LOG_KEY`] the aggregated log, both as JSON arrays. The ledger is
//! read once at startup and written through after every change. Storage
//! failures are logged and never reach the operator.

mod file;
mod ledger;
mod memory;

use thiserror::Error;

pub use file::FileStore;
pub use ledger::{load_ledger, save_ledger};
pub use memory::MemoryStore;

pub const INVENTORY_KEY: &str = "inventory-snapshot";
pub const ACTIVITY_LOG_KEY: &str = "activity-log";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O error for '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON under '{key}': {source}")]
    Json {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// String key-value store.
///
/// A missing key reads as `Ok(None)`.
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}
