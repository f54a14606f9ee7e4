//! Inventory domain: records, seed data and the movement reducer.

mod reducer;
mod roster;
mod types;

pub use reducer::{apply, normalize_plate, Movement, MovementError, Outcome};
pub use roster::{find_user, initial_inventory, USERS};
pub use types::{InventoryItem, Ledger, LogAction, LogEntry, User};
