//! FILENAME: app/src-tauri/src/lib.rs
// PURPOSE: Main library entry point (Tauri Bridge).
// CONTEXT: Wires the ticker, the command endpoint and the outbound worker
//          around one bounded queue.

use tokio::sync::{mpsc, Mutex};

pub mod commands;
pub mod config;
pub mod logging;
pub mod relay;

pub use config::RelayConfig;
pub use logging::{init_log_file, get_log_path, next_seq, write_log, write_log_raw};
pub use relay::{
    forward_command, on_input_update, process_input, process_output, CommandTx, InputSink,
    LoggingLink, OutboundLink,
};


// ============================================================================
// APPLICATION STATE
// ============================================================================

pub struct AppState {
    /// Queue feeding the outbound worker
    pub outbound: CommandTx,
    pub config: RelayConfig,
}

/// Build the managed state and the receiving end of its outbound queue.
pub fn create_app_state(config: RelayConfig) -> (AppState, mpsc::Receiver<String>) {
    let (tx, rx) = mpsc::channel(config.outbound_capacity.max(1));
    let state = AppState {
        outbound: Mutex::new(tx),
        config,
    };
    (state, rx)
}

// ============================================================================
// TAURI APP ENTRY
// ============================================================================

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    match init_log_file() {
        Ok(path) => {
            log_info!("SYS", "Tauri backend starting, log={}", path.display());
        }
        Err(e) => {
            eprintln!("[LOG_INIT] FAILED: {}", e);
            eprintln!("[LOG_INIT] Continuing with console-only logging");
        }
    }

    let config = RelayConfig::load().unwrap_or_else(|e| {
        log_warn!("SYS", "config rejected, using defaults: {}", e);
        RelayConfig::default()
    });
    log_info!("SYS", "tick={}ms outbound_capacity={}", config.tick_interval_ms, config.outbound_capacity);

    let tick = config.tick_interval();
    let (state, output_rx) = create_app_state(config);

    tauri::Builder::default()
        .plugin(tauri_plugin_shell::init())
        .manage(state)
        .setup(move |app| {
            let app_handle = app.handle().clone();
            tauri::async_runtime::spawn(async move {
                process_input(app_handle, tick).await
            });

            tauri::async_runtime::spawn(async move {
                let link = process_output(output_rx, LoggingLink::default()).await;
                log_info!("SYS", "outbound worker stopped after {} frames", link.frames_sent);
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::greet,
            commands::on_command,
            // Logging commands
            logging::log_frontend,
            logging::log_frontend_atomic,
            logging::get_next_seq,
            logging::sort_log_file,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
