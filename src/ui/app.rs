use std::time::Instant;

use chrono::Utc;
use tokio::sync::mpsc::error::TrySendError;

use crate::domain::{
    apply, find_user, Ledger, Movement, MovementError, Outcome, User, USERS,
};
use crate::store::{load_ledger, save_ledger, KeyValueStore};
use crate::sync::{SyncCommand, SyncCommandSender, SyncEvent};
use crate::ui::dialog::{DialogIntent, DialogReducer, DialogState};
use crate::ui::mvi::Reducer;
use crate::ui::status::{StatusLevel, StatusLine, LONG_TTL, SHORT_TTL};
use crate::ui::stock::StockPanel;

const NOTHING_TO_SAVE: &str = "No new records to save.";
const SAVE_IN_PROGRESS: &str = "Saving in progress. Wait for the sync to finish.";

/// Dispatch an intent through an MVI reducer, updating the state field in place.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Controller state. Owned by the UI thread; every mutation of the ledger is
/// written through to the store.
pub struct App {
    should_quit: bool,
    ledger: Ledger,
    store: Box<dyn KeyValueStore>,
    current_user: Option<&'static User>,
    selected: usize,
    dialog: DialogState,
    stock: StockPanel,
    status: StatusLine,
    saving: bool,
    sync: Option<SyncCommandSender>,
}

impl App {
    /// Load the ledger from `store` and select the first user.
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        let ledger = load_ledger(store.as_ref());
        Self {
            should_quit: false,
            ledger,
            store,
            current_user: USERS.first(),
            selected: 0,
            dialog: DialogState::default(),
            stock: StockPanel::default(),
            status: StatusLine::default(),
            saving: false,
            sync: None,
        }
    }

    pub fn set_sync_sender(&mut self, sender: SyncCommandSender) {
        self.sync = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    pub fn dialog(&self) -> &DialogState {
        &self.dialog
    }

    pub fn stock(&self) -> &StockPanel {
        &self.stock
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    // ========================================================================
    // Selection
    // ========================================================================

    pub fn current_user(&self) -> Option<&'static User> {
        self.current_user
    }

    /// `None` deselects; an id outside the roster is ignored.
    pub fn select_user(&mut self, user_id: Option<u32>) {
        match user_id {
            None => self.current_user = None,
            Some(id) => {
                if let Some(user) = find_user(id) {
                    self.current_user = Some(user);
                }
            }
        }
    }

    /// Step through the roster, wrapping at both ends.
    pub fn cycle_user(&mut self, step: isize) {
        if USERS.is_empty() {
            return;
        }
        let len = USERS.len() as isize;
        let next = match self
            .current_user
            .and_then(|user| USERS.iter().position(|u| u.id == user.id))
        {
            Some(index) => (index as isize + step).rem_euclid(len),
            None if step < 0 => len - 1,
            None => 0,
        };
        self.current_user = USERS.get(next as usize);
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn move_selection(&mut self, step: isize) {
        let len = self.ledger.inventory.len();
        if len == 0 {
            return;
        }
        self.selected = (self.selected as isize + step).rem_euclid(len as isize) as usize;
    }

    fn selected_item_id(&self) -> Option<u32> {
        self.ledger.inventory.get(self.selected).map(|item| item.id)
    }

    // ========================================================================
    // Movements
    // ========================================================================

    pub fn record_in(&mut self) {
        if let Some(item_id) = self.selected_item_id() {
            self.record(Movement::check_in(item_id));
        }
    }

    /// OUT always goes through the plate prompt.
    pub fn record_out(&mut self) {
        if let Some(item_id) = self.selected_item_id() {
            self.record(Movement::check_out(item_id, None));
        }
    }

    /// Rejected while a push is in flight: the ledger is reset when it lands.
    pub fn record(&mut self, movement: Movement<'_>) {
        if self.saving {
            self.status
                .show(SAVE_IN_PROGRESS, StatusLevel::Info, SHORT_TTL);
            return;
        }
        match apply(&self.ledger, self.current_user, movement, Utc::now()) {
            Ok(Outcome::Applied(next)) => {
                self.ledger = next;
                self.persist();
                if matches!(self.dialog, DialogState::AwaitingPlate { .. }) {
                    self.dispatch_dialog(DialogIntent::Close);
                }
            }
            Ok(Outcome::NeedsPlate { item_id }) => {
                let item_name = self
                    .ledger
                    .item(item_id)
                    .map(|item| item.name.clone())
                    .unwrap_or_default();
                self.dispatch_dialog(DialogIntent::RequestPlate { item_id, item_name });
            }
            Err(err @ MovementError::NoUser) => {
                self.status
                    .show(err.to_string(), StatusLevel::Error, SHORT_TTL);
            }
            Err(err @ MovementError::UnknownItem { .. }) => {
                tracing::warn!(error = %err, "Movement ignored");
            }
        }
    }

    // ========================================================================
    // Dialogs
    // ========================================================================

    fn dispatch_dialog(&mut self, intent: DialogIntent) {
        dispatch_mvi!(self, dialog, DialogReducer, intent);
    }

    pub fn type_plate(&mut self, ch: char) {
        self.dispatch_dialog(DialogIntent::TypePlate(ch));
    }

    pub fn erase_plate(&mut self) {
        self.dispatch_dialog(DialogIntent::ErasePlate);
    }

    /// Record the pending OUT. An empty plate keeps the prompt open.
    pub fn confirm_plate(&mut self) {
        if !self.dialog.plate_ready() {
            return;
        }
        if let DialogState::AwaitingPlate { item_id, plate, .. } = self.dialog.clone() {
            self.record(Movement::check_out(item_id, Some(&plate)));
        }
    }

    pub fn request_save(&mut self) {
        if self.saving {
            return;
        }
        if !self.ledger.has_pending_logs() {
            self.status.show(NOTHING_TO_SAVE, StatusLevel::Info, SHORT_TTL);
            return;
        }
        let logs = self.ledger.logs.clone();
        self.dispatch_dialog(DialogIntent::RequestSaveConfirmation { logs });
    }

    /// Push the batch captured when the confirmation opened.
    pub fn confirm_save(&mut self) {
        if self.saving || !matches!(self.dialog, DialogState::AwaitingSaveConfirmation { .. }) {
            return;
        }
        let DialogState::AwaitingSaveConfirmation { logs } = std::mem::take(&mut self.dialog)
        else {
            return;
        };
        self.status.clear();
        let count = logs.len();
        match self.send(SyncCommand::PushLogs { logs }) {
            Ok(()) => {
                self.saving = true;
                tracing::info!(entries = count, "Push requested");
            }
            Err(message) => {
                self.status
                    .show(format!("Error: {}", message), StatusLevel::Error, LONG_TTL);
            }
        }
    }

    pub fn request_clear(&mut self) {
        if self.saving || !self.ledger.has_pending_logs() {
            return;
        }
        self.dispatch_dialog(DialogIntent::RequestClearConfirmation);
    }

    pub fn confirm_clear(&mut self) {
        if !matches!(self.dialog, DialogState::AwaitingClearConfirmation) {
            return;
        }
        self.ledger.reset();
        self.selected = 0;
        self.persist();
        self.dispatch_dialog(DialogIntent::Close);
        tracing::info!("History cleared");
    }

    /// Enter inside whichever modal is open.
    pub fn confirm_dialog(&mut self) {
        match self.dialog {
            DialogState::Idle => {}
            DialogState::AwaitingPlate { .. } => self.confirm_plate(),
            DialogState::AwaitingSaveConfirmation { .. } => self.confirm_save(),
            DialogState::AwaitingClearConfirmation => self.confirm_clear(),
        }
    }

    pub fn cancel_dialog(&mut self) {
        self.dispatch_dialog(DialogIntent::Close);
    }

    // ========================================================================
    // Stock
    // ========================================================================

    /// Show or hide the panel. Never pulls.
    pub fn toggle_stock(&mut self) {
        self.stock.visible = !self.stock.visible;
    }

    pub fn refresh_stock(&mut self) {
        if self.saving || self.stock.loading {
            return;
        }
        self.pull_stock();
    }

    fn pull_stock(&mut self) {
        self.stock.begin_loading();
        if let Err(message) = self.send(SyncCommand::PullStock) {
            self.stock.failed(message);
        }
    }

    // ========================================================================
    // Events
    // ========================================================================

    pub fn on_sync_event(&mut self, event: SyncEvent) {
        match event {
            SyncEvent::PushFinished(Ok(receipt)) => {
                self.saving = false;
                self.ledger.reset();
                self.selected = 0;
                self.persist();
                self.status
                    .show(receipt.message, StatusLevel::Success, LONG_TTL);
                self.pull_stock();
            }
            SyncEvent::PushFinished(Err(err)) => {
                self.saving = false;
                tracing::warn!(error = %err, kind = err.kind(), "Push failed");
                self.status
                    .show(format!("Error: {}", err), StatusLevel::Error, LONG_TTL);
            }
            SyncEvent::StockFinished(Ok(rows)) => {
                tracing::debug!(rows = rows.len(), "Stock loaded");
                self.stock.loaded(rows);
            }
            SyncEvent::StockFinished(Err(err)) => {
                tracing::warn!(error = %err, kind = err.kind(), "Stock pull failed");
                let message = err.to_string();
                self.status.show(
                    format!("Could not load stock: {}", message),
                    StatusLevel::Error,
                    LONG_TTL,
                );
                self.stock.failed(message);
            }
        }
    }

    pub fn on_tick(&mut self, now: Instant) {
        self.status.expire(now);
    }

    fn send(&self, command: SyncCommand) -> Result<(), String> {
        let Some(sender) = self.sync.as_ref() else {
            return Err("Sync worker is not running".to_string());
        };
        sender.try_send(command).map_err(|err| match err {
            TrySendError::Full(_) => "Sync worker is busy".to_string(),
            TrySendError::Closed(_) => "Sync worker has stopped".to_string(),
        })
    }

    fn persist(&mut self) {
        save_ledger(self.store.as_mut(), &self.ledger);
    }
}
