//! FILENAME: core/wire/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WireError {
    #[error("Frame encode error: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    #[error("Frame decode error: {0}")]
    Decode(#[from] bincode::error::DecodeError),

    #[error("Frame has {0} trailing bytes")]
    TrailingBytes(usize),

    #[error("Invalid thrust value: {0}")]
    InvalidThrust(String),
}
