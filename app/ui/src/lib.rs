use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

pub mod bridge;
pub mod state;
pub mod views;

use session::Message;

// Main entry point for the WASM application
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or(JsValue::from_str("no global `window` exists"))?;
    let document = window.document().ok_or(JsValue::from_str("should have a document on window"))?;

    views::create_page(&document)?;

    // One registration for the lifetime of the page.
    spawn_local(async {
        let result = bridge::listen_input_update(|payload| {
            state::dispatch(Message::InputUpdate(payload));
        })
        .await;

        if let Err(e) = result {
            web_sys::console::error_1(&format!("Failed to listen for input updates: {}", state::js_error_text(&e)).into());
        }
    });

    Ok(())
}
