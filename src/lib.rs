//! # snmp-codec
//!
//! Binary-field codecs for a network-management protocol stack.
//!
//! - [`core::hex`] converts between byte buffers and base16 text, with
//!   right-aligned decoding of odd-length input.
//! - [`core::engine_id`] turns an SNMPv3 engine identifier into a readable
//!   description, degrading to marked hex dumps instead of failing on
//!   malformed payloads.
//! - [`utils::dump`] chunks hex output into fixed-width lines for a debug sink.
//!
//! ## Quick Start
//! ```rust
//! use snmp_codec::{decode_engine_id, hex};
//!
//! assert_eq!(hex::encode(&[0xca, 0xfe]), "cafe");
//! assert_eq!(hex::decode("a").unwrap(), vec![0x0a]);
//!
//! let mac = [0x80, 0x00, 0x00, 0x01, 0x03, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff];
//! assert_eq!(decode_engine_id(&mac).unwrap(), "enterprise 1, AA:BB:CC:DD:EE:FF");
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod utils;

pub use crate::core::engine_id::{decode_engine_id, EngineId, FormatKind, SubType};
pub use crate::core::hex::{self, HexCase};
pub use crate::error::{CodecError, Result};
