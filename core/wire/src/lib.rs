//! FILENAME: core/wire/src/lib.rs
//! Courier Wire Module
//!
//! Commands that leave the application over the outbound link, and the
//! binary frame format they travel in (bincode, standard config).

mod error;

pub use error::WireError;

use bincode::{config, decode_from_slice, encode_to_vec, Decode, Encode};
use serde::Serialize;

// ============================================================================
// COMMANDS
// ============================================================================

/// A single instruction sent to the remote end.
#[derive(Debug, Clone, PartialEq, Encode, Decode, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Command {
    /// Keep-alive with no body.
    Heartbeat,
    /// Set the thrust level, 0.0 to 1.0.
    SetThrust { thrust: f32 },
    /// Free text forwarded from the UI unchanged.
    Relay { message: String },
}

impl Command {
    /// Interpret a message typed or emitted in the UI.
    ///
    /// - `"heartbeat"` (any case, surrounding whitespace ignored) -> `Heartbeat`
    /// - `"thrust <value>"` -> `SetThrust`, value clamped to 0.0..=1.0
    /// - anything else -> `Relay` carrying the original text
    pub fn from_message(message: &str) -> Result<Command, WireError> {
        let trimmed = message.trim();

        if trimmed.eq_ignore_ascii_case("heartbeat") {
            return Ok(Command::Heartbeat);
        }

        let mut parts = trimmed.splitn(2, char::is_whitespace);
        if let (Some(head), Some(rest)) = (parts.next(), parts.next()) {
            if head.eq_ignore_ascii_case("thrust") {
                let raw = rest.trim();
                let thrust: f32 = raw
                    .parse()
                    .map_err(|_| WireError::InvalidThrust(raw.to_string()))?;
                if thrust.is_nan() {
                    return Err(WireError::InvalidThrust(raw.to_string()));
                }
                return Ok(Command::SetThrust {
                    thrust: thrust.clamp(0.0, 1.0),
                });
            }
        }

        Ok(Command::Relay {
            message: message.to_string(),
        })
    }

    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Heartbeat => "Heartbeat",
            Command::SetThrust { .. } => "SetThrust",
            Command::Relay { .. } => "Relay",
        }
    }
}

// ============================================================================
// FRAMES
// ============================================================================

pub fn encode_command(command: &Command) -> Result<Vec<u8>, WireError> {
    Ok(encode_to_vec(command, config::standard())?)
}

/// Decode exactly one command. The whole slice must be consumed.
pub fn decode_command(frame: &[u8]) -> Result<Command, WireError> {
    let (command, read) = decode_from_slice::<Command, _>(frame, config::standard())?;
    if read != frame.len() {
        return Err(WireError::TrailingBytes(frame.len() - read));
    }
    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heartbeat_message() {
        assert_eq!(Command::from_message("heartbeat").unwrap(), Command::Heartbeat);
        assert_eq!(Command::from_message("  HeartBeat \n").unwrap(), Command::Heartbeat);
    }

    #[test]
    fn test_thrust_message() {
        assert_eq!(
            Command::from_message("thrust 0.25").unwrap(),
            Command::SetThrust { thrust: 0.25 }
        );
        assert_eq!(
            Command::from_message("Thrust   3").unwrap(),
            Command::SetThrust { thrust: 1.0 }
        );
        assert_eq!(
            Command::from_message("thrust -2").unwrap(),
            Command::SetThrust { thrust: 0.0 }
        );
    }

    #[test]
    fn test_bad_thrust_value() {
        let err = Command::from_message("thrust fast").unwrap_err();
        assert!(matches!(err, WireError::InvalidThrust(ref v) if v == "fast"));
        assert!(Command::from_message("thrust NaN").is_err());
    }

    #[test]
    fn test_other_text_is_relayed_verbatim() {
        assert_eq!(
            Command::from_message(" Hello ").unwrap(),
            Command::Relay { message: " Hello ".to_string() }
        );
        assert_eq!(
            Command::from_message("thrust").unwrap(),
            Command::Relay { message: "thrust".to_string() }
        );
        assert_eq!(
            Command::from_message("Time: 12").unwrap().name(),
            "Relay"
        );
    }

    #[test]
    fn test_set_thrust_frame() {
        let command = Command::SetThrust { thrust: 1.0 };
        let frame = encode_command(&command).unwrap();
        // variant tag + 4 byte float
        assert_eq!(frame.len(), 5);
        assert_eq!(decode_command(&frame).unwrap(), command);
    }

    #[test]
    fn test_heartbeat_frame_is_one_byte() {
        let frame = encode_command(&Command::Heartbeat).unwrap();
        assert_eq!(frame, vec![0]);
    }

    #[test]
    fn test_trailing_bytes_rejected() {
        let mut frame = encode_command(&Command::Heartbeat).unwrap();
        frame.extend_from_slice(&[7, 7]);
        assert!(matches!(decode_command(&frame), Err(WireError::TrailingBytes(2))));
    }

    #[test]
    fn test_truncated_frame_rejected() {
        let frame = encode_command(&Command::Relay { message: "abc".to_string() }).unwrap();
        assert!(matches!(
            decode_command(&frame[..frame.len() - 1]),
            Err(WireError::Decode(_))
        ));
    }

    #[test]
    fn test_unknown_variant_rejected() {
        assert!(decode_command(&[9]).is_err());
    }
}
