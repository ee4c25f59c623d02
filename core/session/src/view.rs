//! FILENAME: core/session/src/view.rs
// PURPOSE: View state of the greeting page and the reducer that drives it.
// CONTEXT: Pure and synchronous. The webview crate performs the returned
//          effects (backend calls, logging) and feeds results back as messages.

use crate::contract::{Payload, FIXED_SUBMIT_MESSAGE};
use crate::signal::Signal;

/// The three reactive cells of the page.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Last result of the backend command.
    pub greeting: Signal<String>,
    /// Message of the last `input_update` event; this is what the page shows.
    pub update: Signal<String>,
    /// Mirrors the name input. Nothing reads it yet.
    pub name: Signal<String>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    InputUpdate(Payload),
    Submit,
    NameChanged(String),
    GreetResolved(String),
    GreetFailed(String),
}

/// Work the caller must perform after a state change.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Invoke `on_command` with this message and report back.
    Invoke(String),
    /// Write a line to the log.
    Log(String),
}

pub fn update(state: &mut ViewState, msg: Message) -> Vec<Effect> {
    match msg {
        Message::InputUpdate(payload) => {
            let log = Effect::Log(format!("Payload: {}", payload.message));
            state.update.set(payload.message.clone());
            vec![log, Effect::Invoke(payload.message)]
        }
        Message::Submit => vec![Effect::Invoke(FIXED_SUBMIT_MESSAGE.to_string())],
        Message::NameChanged(name) => {
            state.name.set(name);
            Vec::new()
        }
        Message::GreetResolved(greeting) => {
            state.greeting.set(greeting);
            Vec::new()
        }
        Message::GreetFailed(err) => vec![Effect::Log(format!("on_command failed: {}", err))],
    }
}
