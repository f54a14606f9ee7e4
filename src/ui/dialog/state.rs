use crate::domain::LogEntry;
use crate::ui::mvi::UiState;

/// The modal currently in front of the main screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DialogState {
    #[default]
    Idle,
    AwaitingPlate {
        item_id: u32,
        item_name: String,
        /// Upper-cased as typed.
        plate: String,
    },
    AwaitingSaveConfirmation {
        logs: Vec<LogEntry>,
    },
    AwaitingClearConfirmation,
}

impl UiState for DialogState {}

impl DialogState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// True once the plate prompt holds something other than whitespace.
    pub fn plate_ready(&self) -> bool {
        matches!(self, Self::AwaitingPlate { plate, .. } if !plate.trim().is_empty())
    }
}
