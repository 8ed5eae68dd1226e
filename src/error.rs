//! # Error Types
//!
//! Error handling for the codec.
//!
//! Only structural failures are errors here. A hex string with a bad digit, an
//! empty identifier, or a structured identifier too short to carry its sub-type
//! byte are reported to the caller. Everything past those checks degrades to a
//! marked hex dump instead (see [`crate::core::engine_id`]).
//!
//! ## Error Categories
//! - **Input Errors**: empty or truncated identifier buffers
//! - **Hex Errors**: non-hex characters during decoding
//! - **Ambient Errors**: configuration and random-source failures
//!
//! ## Example Usage
//! ```rust
//! use snmp_codec::core::hex;
//! use snmp_codec::error::CodecError;
//!
//! match hex::decode("0g") {
//!     Err(CodecError::InvalidDigit { position, .. }) => assert_eq!(position, 1),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

// CodecError is the error type for every fallible operation in the crate
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CodecError {
    #[error("Empty engine identifier")]
    EmptyInput,

    #[error("Truncated buffer: need at least {needed} bytes, got {actual}")]
    TruncatedBuffer { needed: usize, actual: usize },

    #[error("Invalid hex digit 0x{byte:02x} at position {position}")]
    InvalidDigit { position: usize, byte: u8 },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Random source error: {0}")]
    RandomSource(String),
}

/// Type alias for Results using CodecError
pub type Result<T> = std::result::Result<T, CodecError>;
