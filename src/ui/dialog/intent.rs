use crate::domain::LogEntry;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DialogIntent {
    /// OUT was requested without a plate.
    RequestPlate { item_id: u32, item_name: String },
    TypePlate(char),
    ErasePlate,
    /// Freeze the batch that the operator is about to confirm.
    RequestSaveConfirmation { logs: Vec<LogEntry> },
    RequestClearConfirmation,
    Close,
}

impl Intent for DialogIntent {}
