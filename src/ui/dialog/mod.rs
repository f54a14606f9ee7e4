mod intent;
mod reducer;
mod state;

pub use intent::DialogIntent;
pub use reducer::{DialogReducer, MAX_PLATE_LEN};
pub use state::DialogState;
