//! FILENAME: core/session/src/lib.rs
//! PURPOSE: State and contracts shared by the Courier backend and the webview UI.
//! CONTEXT: The backend emits `Payload`s and answers commands; the UI folds
//!          both into `ViewState` through `update`.

pub mod contract;
pub mod signal;
pub mod view;

pub use contract::{
    elapsed_message, greeting_for, OnCommandArgs, Payload, FIXED_SUBMIT_MESSAGE,
    INPUT_UPDATE_EVENT, ON_COMMAND,
};
pub use signal::Signal;
pub use view::{update, Effect, Message, ViewState};
