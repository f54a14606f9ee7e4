use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::{initial_inventory, InventoryItem, Ledger, LogEntry};

use super::{KeyValueStore, StoreError, ACTIVITY_LOG_KEY, INVENTORY_KEY};

/// Load the persisted ledger.
///
/// Each key falls back on its own: a missing or unreadable inventory yields
/// the seed inventory, a missing or unreadable log yields an empty log.
pub fn load_ledger(store: &dyn KeyValueStore) -> Ledger {
    let inventory =
        read_or::<Vec<InventoryItem>>(store, INVENTORY_KEY).unwrap_or_else(initial_inventory);
    let logs = read_or::<Vec<LogEntry>>(store, ACTIVITY_LOG_KEY).unwrap_or_default();
    tracing::debug!(
        items = inventory.len(),
        logs = logs.len(),
        "Loaded ledger from store"
    );
    Ledger::new(inventory, logs)
}

/// Mirror the ledger into the store. Failures are logged and swallowed.
pub fn save_ledger(store: &mut dyn KeyValueStore, ledger: &Ledger) {
    if let Err(err) = write_json(store, INVENTORY_KEY, &ledger.inventory) {
        tracing::error!(error = %err, "Failed to persist inventory");
    }
    if let Err(err) = write_json(store, ACTIVITY_LOG_KEY, &ledger.logs) {
        tracing::error!(error = %err, "Failed to persist activity log");
    }
}

fn read_or<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    match read_json(store, key) {
        Ok(value) => value,
        Err(err) => {
            tracing::error!(error = %err, "Falling back to defaults");
            None
        }
    }
}

fn read_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StoreError> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| StoreError::Json {
            key: key.to_string(),
            source,
        })
}

fn write_json<T: Serialize + ?Sized>(
    store: &mut dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let raw = serde_json::to_string(value).map_err(|source| StoreError::Json {
        key: key.to_string(),
        source,
    })?;
    store.set(key, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{apply, Movement, Outcome, USERS};
    use crate::store::MemoryStore;
    use chrono::Utc;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Io {
                key: key.to_string(),
                source: std::io::Error::other("disk on fire"),
            })
        }

        fn set(&mut self, key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Io {
                key: key.to_string(),
                source: std::io::Error::other("disk on fire"),
            })
        }
    }

    #[test]
    fn empty_store_loads_defaults() {
        let store = MemoryStore::new();
        assert_eq!(load_ledger(&store), Ledger::initial());
    }

    #[test]
    fn corrupt_entries_fall_back_independently() {
        let store = MemoryStore::new()
            .with_entry(INVENTORY_KEY, "{not json")
            .with_entry(ACTIVITY_LOG_KEY, "[]");
        let ledger = load_ledger(&store);
        assert_eq!(ledger.inventory, initial_inventory());
        assert!(ledger.logs.is_empty());
    }

    #[test]
    fn read_failure_falls_back() {
        assert_eq!(load_ledger(&BrokenStore), Ledger::initial());
    }

    #[test]
    fn write_failure_is_swallowed() {
        save_ledger(&mut BrokenStore, &Ledger::initial());
    }

    #[test]
    fn save_then_load_keeps_movements() {
        let ledger = match apply(
            &Ledger::initial(),
            Some(&USERS[0]),
            Movement::check_out(2, Some("ZZ-99")),
            Utc::now(),
        )
        .unwrap()
        {
            Outcome::Applied(ledger) => ledger,
            other => panic!("unexpected {:?}", other),
        };

        let mut store = MemoryStore::new();
        save_ledger(&mut store, &ledger);
        let loaded = load_ledger(&store);

        assert_eq!(loaded.inventory, ledger.inventory);
        assert_eq!(loaded.logs.len(), 1);
        assert_eq!(loaded.logs[0].id, ledger.logs[0].id);
        assert_eq!(loaded.logs[0].plate.as_deref(), Some("ZZ-99"));
    }
}
