//! FILENAME: app/src-tauri/src/commands.rs
// PURPOSE: Commands invoked from the webview.

use session::greeting_for;
use tauri::State;

use crate::logging::log_info;
use crate::relay::forward_command;
use crate::AppState;

#[tauri::command]
pub fn greet(name: &str) -> String {
    greeting_for(name)
}

/// Forward `message` to the outbound worker. Resolves to the greeting for it,
/// or an error once the worker has stopped.
#[tauri::command]
pub async fn on_command(message: String, state: State<'_, AppState>) -> Result<String, String> {
    log_info!("CMD", "Received from WebView: {:?}", message);
    forward_command(&state.outbound, message).await
}
