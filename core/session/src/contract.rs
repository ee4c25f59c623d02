//! FILENAME: core/session/src/contract.rs
// PURPOSE: Names and shapes that both sides of the webview bridge agree on.

use serde::{Deserialize, Serialize};

/// Event emitted by the backend whenever new input arrives.
pub const INPUT_UPDATE_EVENT: &str = "input_update";

/// Command the UI invokes with a `message` argument; resolves to a string.
pub const ON_COMMAND: &str = "on_command";

/// Message sent when the greeting form is submitted.
pub const FIXED_SUBMIT_MESSAGE: &str = "Hello";

/// Body of the `input_update` event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    pub message: String,
}

impl Payload {
    pub fn new(message: impl Into<String>) -> Self {
        Payload {
            message: message.into(),
        }
    }
}

/// Arguments of `on_command`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnCommandArgs {
    pub message: String,
}

pub fn greeting_for(name: &str) -> String {
    format!("Hello, {}! You've been greeted from Rust!", name)
}

/// Text of the ticker event after `secs` whole seconds.
pub fn elapsed_message(secs: u64) -> String {
    format!("Time: {}", secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_json_shape() {
        let json = serde_json::to_string(&Payload::new("Time: 3")).unwrap();
        assert_eq!(json, r#"{"message":"Time: 3"}"#);

        let payload: Payload = serde_json::from_str(r#"{"message":"hi"}"#).unwrap();
        assert_eq!(payload.message, "hi");
    }

    #[test]
    fn test_payload_requires_message() {
        assert!(serde_json::from_str::<Payload>("{}").is_err());
    }

    #[test]
    fn test_greeting_text() {
        assert_eq!(
            greeting_for("Hello"),
            "Hello, Hello! You've been greeted from Rust!"
        );
        assert_eq!(greeting_for(""), "Hello, ! You've been greeted from Rust!");
    }

    #[test]
    fn test_elapsed_message() {
        assert_eq!(elapsed_message(0), "Time: 0");
        assert_eq!(elapsed_message(61), "Time: 61");
    }
}
