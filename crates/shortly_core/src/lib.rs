//! Shortly core: pure form state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{AppState, CompletedShortening, RequestId, RequestOutcome};
pub use update::{update, EMPTY_INPUT_ERROR, REQUEST_FAILED_ERROR};
pub use view_model::{AppViewModel, HistoryRowView};
