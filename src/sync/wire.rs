//! JSON documents exchanged with the remote sheet service.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{InventoryItem, LogEntry};

use super::error::SyncError;

pub const DEFAULT_PUSH_MESSAGE: &str =
    "Saved successfully. History and inventory have been reset.";
pub const DEFAULT_REJECT_MESSAGE: &str = "Unspecified error from the remote service.";
pub const DEFAULT_STOCK_FORMAT_MESSAGE: &str =
    "The server response does not have the expected format.";

#[derive(Debug, Serialize)]
pub struct PushRequest<'a> {
    pub logs: &'a [LogEntry],
}

#[derive(Debug, Deserialize)]
struct PushResponse {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StockResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    message: Option<String>,
}

/// Confirmation of an accepted push.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushReceipt {
    pub message: String,
}

/// Decode a push response body.
///
/// Only an explicit `"success": false` is a rejection; a JSON object
/// without the flag counts as accepted.
pub fn decode_push_response(body: &str) -> Result<PushReceipt, SyncError> {
    let response: PushResponse =
        serde_json::from_str(body).map_err(|_| SyncError::InvalidResponse {
            body: body.to_string(),
        })?;

    if response.success == Some(false) {
        return Err(SyncError::Rejected {
            message: non_empty(response.message)
                .unwrap_or_else(|| DEFAULT_REJECT_MESSAGE.to_string()),
        });
    }

    Ok(PushReceipt {
        message: non_empty(response.message).unwrap_or_else(|| DEFAULT_PUSH_MESSAGE.to_string()),
    })
}

/// Decode a stock response body into display rows.
///
/// Rows are `[code, name, quantity]`. Rows whose cells are all blank are
/// skipped. Each kept row gets a 1-based `id` that is only valid for this
/// response; correlate with local inventory by `code`.
pub fn decode_stock_response(body: &str) -> Result<Vec<InventoryItem>, SyncError> {
    let response: StockResponse =
        serde_json::from_str(body).map_err(|_| SyncError::InvalidResponse {
            body: body.to_string(),
        })?;

    let rows = match (response.success, response.data) {
        (true, Some(Value::Array(rows))) => rows,
        (_, _) => {
            return Err(SyncError::Rejected {
                message: non_empty(response.message)
                    .unwrap_or_else(|| DEFAULT_STOCK_FORMAT_MESSAGE.to_string()),
            })
        }
    };

    rows.iter()
        .filter(|row| !is_blank_row(row))
        .enumerate()
        .map(|(index, row)| {
            decode_row(index, row).ok_or_else(|| SyncError::MalformedRow {
                index,
                row: row.to_string(),
            })
        })
        .collect()
}

/// Empty sheet ranges come back as `["", "", ""]` or nulls.
fn is_blank_row(row: &Value) -> bool {
    row.as_array().is_some_and(|cells| {
        cells.iter().all(|cell| match cell {
            Value::Null => true,
            Value::String(text) => text.trim().is_empty(),
            _ => false,
        })
    })
}

fn decode_row(index: usize, row: &Value) -> Option<InventoryItem> {
    let cells = row.as_array()?;
    let code = cell_to_i64(cells.first()?)?;
    let name = match cells.get(1)? {
        Value::String(name) => name.trim().to_string(),
        Value::Number(number) => number.to_string(),
        _ => return None,
    };
    let quantity = cell_to_i64(cells.get(2)?)?;
    Some(InventoryItem {
        id: u32::try_from(index + 1).ok()?,
        code: u32::try_from(code).ok()?,
        name,
        quantity,
    })
}

/// Sheet cells arrive as integers, whole floats or numeric strings.
fn cell_to_i64(cell: &Value) -> Option<i64> {
    match cell {
        Value::Number(number) => number.as_i64().or_else(|| whole(number.as_f64()?)),
        Value::String(text) => {
            let text = text.trim();
            text.parse::<i64>()
                .ok()
                .or_else(|| whole(text.parse::<f64>().ok()?))
        }
        _ => None,
    }
}

fn whole(value: f64) -> Option<i64> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}

fn non_empty(message: Option<String>) -> Option<String> {
    message.filter(|m| !m.trim().is_empty())
}
