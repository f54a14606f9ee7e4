use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// Operator on whose behalf movements are recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u32,
    pub name: &'static str,
}

/// Locally tracked inventory line.
///
/// `code` is the key shared with the remote stock sheet; `id` only has
/// meaning inside this process and the local snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: u32,
    pub code: u32,
    pub name: String,
    /// Not clamped: an OUT on an empty line goes negative.
    pub quantity: i64,
}

/// Direction of a movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogAction {
    #[serde(rename = "INGRESO")]
    In,
    #[serde(rename = "SALIDA")]
    Out,
}

impl LogAction {
    /// Stable wire value, also embedded in log entry ids.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::In => "INGRESO",
            Self::Out => "SALIDA",
        }
    }

    /// Short label for the terminal.
    pub fn label(&self) -> &'static str {
        match self {
            Self::In => "IN",
            Self::Out => "OUT",
        }
    }
}

/// Aggregated activity record.
///
/// One entry exists per (item, user, action, plate) combination. Item and
/// user fields are denormalized at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub id: String,
    pub item_id: u32,
    pub item_code: u32,
    pub item_name: String,
    pub user_id: u32,
    pub user_name: String,
    pub action: LogAction,
    /// Time of the last update to this group.
    #[serde(serialize_with = "serialize_iso_millis")]
    pub timestamp: DateTime<Utc>,
    pub quantity: u32,
    #[serde(
        rename = "patente",
        alias = "plate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub plate: Option<String>,
}

impl LogEntry {
    /// Composite key used for aggregation.
    pub fn key_for(item_id: u32, user_id: u32, action: LogAction, plate: Option<&str>) -> String {
        match (action, plate) {
            (LogAction::Out, Some(plate)) => {
                format!("log-{}-{}-{}-{}", item_id, user_id, action.as_str(), plate)
            }
            _ => format!("log-{}-{}-{}", item_id, user_id, action.as_str()),
        }
    }
}

/// Inventory and activity log, owned together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    pub inventory: Vec<InventoryItem>,
    pub logs: Vec<LogEntry>,
}

impl Ledger {
    pub fn new(inventory: Vec<InventoryItem>, logs: Vec<LogEntry>) -> Self {
        Self { inventory, logs }
    }

    /// Seed inventory and an empty log.
    pub fn initial() -> Self {
        Self::new(super::roster::initial_inventory(), Vec::new())
    }

    /// Drop all movements and restore the seed inventory.
    pub fn reset(&mut self) {
        *self = Self::initial();
    }

    pub fn item(&self, item_id: u32) -> Option<&InventoryItem> {
        self.inventory.iter().find(|item| item.id == item_id)
    }

    pub fn has_pending_logs(&self) -> bool {
        !self.logs.is_empty()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::initial()
    }
}

fn serialize_iso_millis<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Millis, true))
}
