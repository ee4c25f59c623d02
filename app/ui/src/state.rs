// app/ui/src/state.rs
//
// Page state and the dispatch loop around `session::update`.
//
use std::cell::RefCell;

use session::{update, Effect, Message, ViewState};
use wasm_bindgen_futures::spawn_local;

use crate::bridge;
use crate::views;

pub struct AppState {
    pub view: ViewState,
    /// Versions of the cells as last written to the DOM.
    pub rendered_update: u64,
    pub rendered_greeting: u64,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            view: ViewState::new(),
            rendered_update: 0,
            rendered_greeting: 0,
        }
    }
}

thread_local! {
    pub static APP_STATE: RefCell<AppState> = RefCell::new(AppState::new());
}

/// Apply `msg`, refresh bound text, then run the effects.
pub fn dispatch(msg: Message) {
    let effects = APP_STATE.with(|state| {
        let mut state = state.borrow_mut();
        let effects = update(&mut state.view, msg);
        if let Err(e) = views::refresh_bindings(&mut state) {
            web_sys::console::warn_1(&format!("Failed to refresh UI: {:?}", e).into());
        }
        effects
    });

    for effect in effects {
        run_effect(effect);
    }
}

fn run_effect(effect: Effect) {
    match effect {
        Effect::Invoke(message) => spawn_local(async move {
            match bridge::on_command(&message).await {
                Ok(greeting) => dispatch(Message::GreetResolved(greeting)),
                Err(e) => dispatch(Message::GreetFailed(js_error_text(&e))),
            }
        }),
        Effect::Log(line) => {
            web_sys::console::log_1(&line.clone().into());
            spawn_local(async move {
                if let Err(e) = bridge::log_to_backend("I", "UI", &line).await {
                    web_sys::console::warn_1(&format!("backend log failed: {}", js_error_text(&e)).into());
                }
            });
        }
    }
}

pub fn js_error_text(value: &wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
