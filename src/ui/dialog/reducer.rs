use crate::ui::dialog::intent::DialogIntent;
use crate::ui::dialog::state::DialogState;
use crate::ui::mvi::Reducer;

/// Longest plate the prompt accepts.
pub const MAX_PLATE_LEN: usize = 16;

pub struct DialogReducer;

impl Reducer for DialogReducer {
    type State = DialogState;
    type Intent = DialogIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DialogIntent::RequestPlate { item_id, item_name } => DialogState::AwaitingPlate {
                item_id,
                item_name,
                plate: String::new(),
            },
            DialogIntent::TypePlate(ch) => match state {
                DialogState::AwaitingPlate {
                    item_id,
                    item_name,
                    mut plate,
                } => {
                    if !ch.is_control() && plate.chars().count() < MAX_PLATE_LEN {
                        plate.extend(ch.to_uppercase());
                    }
                    DialogState::AwaitingPlate {
                        item_id,
                        item_name,
                        plate,
                    }
                }
                other => other,
            },
            DialogIntent::ErasePlate => match state {
                DialogState::AwaitingPlate {
                    item_id,
                    item_name,
                    mut plate,
                } => {
                    plate.pop();
                    DialogState::AwaitingPlate {
                        item_id,
                        item_name,
                        plate,
                    }
                }
                other => other,
            },
            DialogIntent::RequestSaveConfirmation { logs } => {
                DialogState::AwaitingSaveConfirmation { logs }
            }
            DialogIntent::RequestClearConfirmation => DialogState::AwaitingClearConfirmation,
            DialogIntent::Close => DialogState::Idle,
        }
    }
}
