//! FILENAME: tests/common/mod.rs
//! Test harness and fakes for Courier backend integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use app_lib::{create_app_state, forward_command, AppState, InputSink, OutboundLink, RelayConfig};
use session::Payload;
use tokio::sync::mpsc;
use wire::Command;

/// Test harness owning the managed state and the worker end of its queue.
pub struct TestHarness {
    pub state: AppState,
    pub output_rx: Option<mpsc::Receiver<String>>,
}

impl TestHarness {
    /// Create a new test harness with default config.
    pub fn new() -> Self {
        Self::with_config(RelayConfig::default())
    }

    /// Create a harness whose outbound queue holds `capacity` messages.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(RelayConfig {
            outbound_capacity: capacity,
            ..RelayConfig::default()
        })
    }

    pub fn with_config(config: RelayConfig) -> Self {
        let (state, rx) = create_app_state(config);
        TestHarness {
            state,
            output_rx: Some(rx),
        }
    }

    /// Take the receiver so a worker can own it.
    pub fn take_receiver(&mut self) -> mpsc::Receiver<String> {
        self.output_rx.take().expect("receiver already taken")
    }

    /// Same path as the `on_command` handler.
    pub async fn send(&self, message: &str) -> Result<String, String> {
        forward_command(&self.state.outbound, message.to_string()).await
    }
}

/// Sink that records every payload, or refuses all of them.
#[derive(Clone, Default)]
pub struct RecordingSink {
    pub delivered: Arc<Mutex<Vec<Payload>>>,
    pub attempts: Arc<Mutex<u32>>,
    pub fail: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        RecordingSink {
            fail: true,
            ..Self::default()
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.delivered
            .lock()
            .unwrap()
            .iter()
            .map(|p| p.message.clone())
            .collect()
    }

    pub fn attempt_count(&self) -> u32 {
        *self.attempts.lock().unwrap()
    }
}

impl InputSink for RecordingSink {
    fn deliver(&self, payload: &Payload) -> Result<(), String> {
        *self.attempts.lock().unwrap() += 1;
        if self.fail {
            return Err("no webview".to_string());
        }
        self.delivered.lock().unwrap().push(payload.clone());
        Ok(())
    }
}

/// Link that keeps every frame it is given.
#[derive(Default)]
pub struct CapturingLink {
    pub frames: Vec<(Command, Vec<u8>)>,
    pub fail: bool,
}

impl OutboundLink for CapturingLink {
    fn send_frame(&mut self, command: &Command, frame: &[u8]) -> Result<(), String> {
        if self.fail {
            return Err("link down".to_string());
        }
        self.frames.push((command.clone(), frame.to_vec()));
        Ok(())
    }
}
