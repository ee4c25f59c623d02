//! FILENAME: app/src-tauri/src/config.rs
// PURPOSE: Runtime settings for the relay tasks.
// CONTEXT: Defaults, then an optional JSON file named by COURIER_CONFIG,
//          then individual environment overrides.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::sync::Semaphore;

pub const CONFIG_PATH_ENV: &str = "COURIER_CONFIG";
pub const TICK_MS_ENV: &str = "COURIER_TICK_MS";
pub const OUTBOUND_CAPACITY_ENV: &str = "COURIER_OUTBOUND_CAPACITY";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RelayConfig {
    /// Period of the `input_update` ticker in milliseconds.
    pub tick_interval_ms: u64,
    /// Bound of the queue between `on_command` and the outbound worker.
    pub outbound_capacity: usize,
}

impl Default for RelayConfig {
    fn default() -> Self {
        RelayConfig {
            tick_interval_ms: 1000,
            outbound_capacity: 1,
        }
    }
}

impl RelayConfig {
    /// Load from the process environment.
    pub fn load() -> Result<Self, String> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` in place of the environment.
    pub fn load_with<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(CONFIG_PATH_ENV) {
            Some(path) if !path.trim().is_empty() => Self::from_file(Path::new(&path))?,
            _ => RelayConfig::default(),
        };

        if let Some(raw) = lookup(TICK_MS_ENV) {
            config.tick_interval_ms = raw
                .trim()
                .parse()
                .map_err(|e| format!("Invalid {}={:?}: {}", TICK_MS_ENV, raw, e))?;
        }

        if let Some(raw) = lookup(OUTBOUND_CAPACITY_ENV) {
            config.outbound_capacity = raw
                .trim()
                .parse()
                .map_err(|e| format!("Invalid {}={:?}: {}", OUTBOUND_CAPACITY_ENV, raw, e))?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, String> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {:?}: {}", path, e))?;
        serde_json::from_str(&text)
            .map_err(|e| format!("Failed to parse config {:?}: {}", path, e))
    }

    /// tokio's sleep and mpsc::channel panic on zero; the channel also
    /// panics above `Semaphore::MAX_PERMITS`.
    pub fn validate(&self) -> Result<(), String> {
        if self.tick_interval_ms == 0 {
            return Err("tickIntervalMs must be greater than 0".to_string());
        }
        if self.outbound_capacity == 0 {
            return Err("outboundCapacity must be greater than 0".to_string());
        }
        if self.outbound_capacity > Semaphore::MAX_PERMITS {
            return Err(format!(
                "outboundCapacity must be at most {}",
                Semaphore::MAX_PERMITS
            ));
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_interval_ms)
    }
}
