use nirocheck::domain::{Ledger, LogAction};
use nirocheck::store::{
    load_ledger, FileStore, KeyValueStore, MemoryStore, ACTIVITY_LOG_KEY, INVENTORY_KEY,
};
use nirocheck::ui::App;
use tempfile::TempDir;

#[test]
fn movements_survive_restart() {
    let dir = TempDir::new().unwrap();
    {
        let mut app = App::new(Box::new(FileStore::open(dir.path()).unwrap()));
        app.record_in();
        app.record_in();
    }

    let app = App::new(Box::new(FileStore::open(dir.path()).unwrap()));
    assert_eq!(app.ledger().item(1).unwrap().quantity, 2);
    assert_eq!(app.ledger().logs.len(), 1);
    assert_eq!(app.ledger().logs[0].action, LogAction::In);
    assert!(dir.path().join("inventory-snapshot.json").exists());
    assert!(dir.path().join("activity-log.json").exists());
}

#[test]
fn clear_is_persisted() {
    let dir = TempDir::new().unwrap();
    {
        let mut app = App::new(Box::new(FileStore::open(dir.path()).unwrap()));
        app.record_in();
        app.request_clear();
        app.confirm_clear();
    }
    let store = FileStore::open(dir.path()).unwrap();
    assert_eq!(load_ledger(&store), Ledger::initial());
    assert_eq!(store.get(ACTIVITY_LOG_KEY).unwrap().as_deref(), Some("[]"));
}

#[test]
fn corrupt_documents_fall_back_independently() {
    let store = MemoryStore::new()
        .with_entry(INVENTORY_KEY, "{not json")
        .with_entry(
            ACTIVITY_LOG_KEY,
            r#"[{"id":"log-1-1-INGRESO","itemId":1,"itemCode":1,"itemName":"NEUMATICOS NIRO","userId":1,"userName":"Jorge Toledo","action":"INGRESO","timestamp":"2024-05-01T12:30:00.000Z","quantity":4}]"#,
        );
    let ledger = load_ledger(&store);
    assert_eq!(ledger.inventory, Ledger::initial().inventory);
    assert_eq!(ledger.logs.len(), 1);
    assert_eq!(ledger.logs[0].quantity, 4);
}

#[test]
fn legacy_plate_field_is_accepted() {
    let store = MemoryStore::new().with_entry(
        ACTIVITY_LOG_KEY,
        r#"[{"id":"log-2-3-SALIDA-XY","itemId":2,"itemCode":2,"itemName":"NEUMATICOS DONGFENG","userId":3,"userName":"Luis Casique","action":"SALIDA","timestamp":"2024-05-01T12:30:00Z","quantity":1,"plate":"XY"}]"#,
    );
    let ledger = load_ledger(&store);
    assert_eq!(ledger.logs[0].plate.as_deref(), Some("XY"));
}
