//! FILENAME: app/src-tauri/src/relay.rs
// PURPOSE: Background tasks bridging the outside world and the webview.
// CONTEXT: `process_input` pushes `input_update` events to the page on a fixed
//          period. `process_output` drains messages forwarded by `on_command`,
//          encodes them as wire frames and hands them to the outbound link.

use std::time::Duration;

use session::{elapsed_message, greeting_for, Payload, INPUT_UPDATE_EVENT};
use tauri::{AppHandle, Emitter, Runtime};
use tokio::sync::{mpsc, Mutex};
use tokio::time::{sleep, Instant};
use wire::{encode_command, Command};

use crate::logging::{log_debug, log_enter, log_error, log_exit, log_info, log_warn};

/// Sender half of the outbound queue, shared by every `on_command` call.
pub type CommandTx = Mutex<mpsc::Sender<String>>;

// ============================================================================
// INBOUND (backend -> webview)
// ============================================================================

/// Something that can deliver `input_update` payloads to the page.
pub trait InputSink {
    fn deliver(&self, payload: &Payload) -> Result<(), String>;
}

impl<R: Runtime> InputSink for AppHandle<R> {
    fn deliver(&self, payload: &Payload) -> Result<(), String> {
        self.emit(INPUT_UPDATE_EVENT, payload.clone())
            .map_err(|e| e.to_string())
    }
}

/// Emit one `input_update` event to all windows.
pub fn on_input_update<S: InputSink>(sink: &S, message: String) -> Result<(), String> {
    sink.deliver(&Payload::new(message.clone()))?;
    log_debug!("RELAY", "sent to WebView: {:?}", message);
    Ok(())
}

/// Tick forever, emitting `"Time: <secs>"` after every `interval`.
pub async fn process_input<S: InputSink>(sink: S, interval: Duration) {
    let start = Instant::now();

    loop {
        sleep(interval).await;

        let message = elapsed_message(start.elapsed().as_secs());
        if let Err(e) = on_input_update(&sink, message) {
            log_error!("RELAY", "input_update emit failed: {}", e);
        }
    }
}

// ============================================================================
// OUTBOUND (webview -> remote)
// ============================================================================

/// Destination of encoded command frames.
pub trait OutboundLink {
    fn send_frame(&mut self, command: &Command, frame: &[u8]) -> Result<(), String>;
}

/// Default link: records the frame in the log and counts it.
#[derive(Debug, Default)]
pub struct LoggingLink {
    pub frames_sent: u64,
    pub bytes_sent: u64,
}

impl OutboundLink for LoggingLink {
    fn send_frame(&mut self, command: &Command, frame: &[u8]) -> Result<(), String> {
        self.frames_sent += 1;
        self.bytes_sent += frame.len() as u64;

        let body = serde_json::to_string(command).map_err(|e| e.to_string())?;
        log_info!("RELAY", "frame #{} {} ({} bytes) {}", self.frames_sent, command.name(), frame.len(), body);
        Ok(())
    }
}

/// Queue a message from the webview and produce the reply shown in the page.
pub async fn forward_command(tx: &CommandTx, message: String) -> Result<String, String> {
    log_enter!("RELAY", "forward_command", "{:?}", message);
    let reply = greeting_for(&message);

    let sender = tx.lock().await;
    if let Err(e) = sender.send(message).await {
        log_exit!("RELAY", "forward_command", "failed: {}", e);
        return Err(e.to_string());
    }

    log_exit!("RELAY", "forward_command");
    Ok(reply)
}

/// Drain the queue until every sender is gone. Returns the link.
pub async fn process_output<L: OutboundLink>(mut output_rx: mpsc::Receiver<String>, mut link: L) -> L {
    while let Some(output) = output_rx.recv().await {
        let command = match Command::from_message(&output) {
            Ok(command) => command,
            Err(e) => {
                log_warn!("RELAY", "dropping {:?}: {}", output, e);
                continue;
            }
        };

        let frame = match encode_command(&command) {
            Ok(frame) => frame,
            Err(e) => {
                log_error!("RELAY", "encode failed for {:?}: {}", output, e);
                continue;
            }
        };

        if let Err(e) = link.send_frame(&command, &frame) {
            log_error!("RELAY", "send failed for {}: {}", command.name(), e);
        }
    }

    log_info!("RELAY", "outbound queue closed");
    link
}
