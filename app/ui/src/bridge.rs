// app/ui/src/bridge.rs
//
// Calls into the Tauri host through `window.__TAURI__` (withGlobalTauri).
//
use serde::Deserialize;
use session::{OnCommandArgs, Payload, INPUT_UPDATE_EVENT, ON_COMMAND};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "event"])]
    async fn listen(event: &str, handler: &Closure<dyn FnMut(JsValue)>) -> Result<JsValue, JsValue>;
}

/// Shape of the object handed to `listen` callbacks.
#[derive(Deserialize)]
struct EventEnvelope {
    payload: Payload,
}

#[derive(serde::Serialize)]
struct LogArgs<'a> {
    level: &'a str,
    category: &'a str,
    message: &'a str,
}

#[derive(serde::Serialize)]
struct OpenArgs<'a> {
    path: &'a str,
}

/// Invoke `on_command` and wait for its string reply.
pub async fn on_command(message: &str) -> Result<String, JsValue> {
    let args = serde_wasm_bindgen::to_value(&OnCommandArgs {
        message: message.to_string(),
    })?;
    let reply = invoke(ON_COMMAND, args).await?;
    reply
        .as_string()
        .ok_or_else(|| JsValue::from_str("on_command returned a non-string value"))
}

/// Pull the `Payload` out of a `listen` callback argument (`{event, id, payload}`).
pub fn decode_input_event(event: JsValue) -> Result<Payload, serde_wasm_bindgen::Error> {
    serde_wasm_bindgen::from_value::<EventEnvelope>(event).map(|envelope| envelope.payload)
}

/// Register `handler` for `input_update`. The closure lives for the rest of the page.
pub async fn listen_input_update<F>(mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(Payload) + 'static,
{
    let callback = Closure::wrap(Box::new(move |event: JsValue| {
        match decode_input_event(event) {
            Ok(payload) => handler(payload),
            Err(e) => web_sys::console::warn_1(&format!("Bad {} payload: {}", INPUT_UPDATE_EVENT, e).into()),
        }
    }) as Box<dyn FnMut(JsValue)>);

    listen(INPUT_UPDATE_EVENT, &callback).await?;
    callback.forget();
    Ok(())
}

/// Append a line to the unified backend log.
pub async fn log_to_backend(level: &str, category: &str, message: &str) -> Result<(), JsValue> {
    let args = serde_wasm_bindgen::to_value(&LogArgs { level, category, message })?;
    invoke("log_frontend_atomic", args).await?;
    Ok(())
}

/// Open `url` in the system browser via the shell plugin.
pub async fn open_external(url: &str) -> Result<(), JsValue> {
    let args = serde_wasm_bindgen::to_value(&OpenArgs { path: url })?;
    invoke("plugin:shell|open", args).await?;
    Ok(())
}
