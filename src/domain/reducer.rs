//! Pure movement reducer: (ledger, user, movement, now) -> next ledger.

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::types::{Ledger, LogAction, LogEntry, User};

/// A requested IN/OUT against one inventory line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Movement<'a> {
    pub item_id: u32,
    pub action: LogAction,
    /// Vehicle plate. Only read for OUT.
    pub plate: Option<&'a str>,
}

impl<'a> Movement<'a> {
    pub fn check_in(item_id: u32) -> Self {
        Self {
            item_id,
            action: LogAction::In,
            plate: None,
        }
    }

    pub fn check_out(item_id: u32, plate: Option<&'a str>) -> Self {
        Self {
            item_id,
            action: LogAction::Out,
            plate,
        }
    }
}

/// Result of a movement that passed its preconditions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The movement was recorded.
    Applied(Ledger),
    /// OUT without a usable plate. Nothing changed; the caller must capture one.
    NeedsPlate { item_id: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MovementError {
    #[error("Select a user first.")]
    NoUser,

    #[error("Unknown inventory item {item_id}")]
    UnknownItem { item_id: u32 },
}

/// Trim and upper-case a plate. Empty input yields `None`.
pub fn normalize_plate(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_uppercase())
    }
}

/// Apply one movement.
///
/// IN adds one unit, OUT removes one (no floor). The log entry keyed by
/// (item, user, action[, plate]) is bumped in place or created at the front.
pub fn apply(
    ledger: &Ledger,
    user: Option<&User>,
    movement: Movement<'_>,
    now: DateTime<Utc>,
) -> Result<Outcome, MovementError> {
    let user = user.ok_or(MovementError::NoUser)?;
    let item = ledger
        .item(movement.item_id)
        .ok_or(MovementError::UnknownItem {
            item_id: movement.item_id,
        })?
        .clone();

    let plate = match movement.action {
        LogAction::In => None,
        LogAction::Out => match movement.plate.and_then(normalize_plate) {
            Some(plate) => Some(plate),
            None => return Ok(Outcome::NeedsPlate { item_id: item.id }),
        },
    };

    let delta = match movement.action {
        LogAction::In => 1,
        LogAction::Out => -1,
    };

    let mut next = ledger.clone();
    if let Some(line) = next.inventory.iter_mut().find(|line| line.id == item.id) {
        line.quantity += delta;
    }

    let key = LogEntry::key_for(item.id, user.id, movement.action, plate.as_deref());
    match next.logs.iter_mut().find(|entry| entry.id == key) {
        Some(entry) => {
            entry.quantity += 1;
            entry.timestamp = now;
        }
        None => next.logs.insert(
            0,
            LogEntry {
                id: key,
                item_id: item.id,
                item_code: item.code,
                item_name: item.name,
                user_id: user.id,
                user_name: user.name.to_string(),
                action: movement.action,
                timestamp: now,
                quantity: 1,
                plate,
            },
        ),
    }

    Ok(Outcome::Applied(next))
}
