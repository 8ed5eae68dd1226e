//! # Engine Identifier Decoder
//!
//! Renders an SNMPv3 `snmpEngineID` as a human-readable string.
//!
//! ## Layout
//! ```text
//! byte 0, bit 7   0 = opaque (non-SNMPv3 structure), 1 = structured
//! bytes 0-3       enterprise number (bit 7 of byte 0 masked off)
//! byte 4          sub-type
//!                   0      reserved
//!                   1      IPv4 address      (4 octets)
//!                   2      IPv6 address      (16 octets)
//!                   3      MAC address       (6 octets)
//!                   4      text              (0-27 octets)
//!                   5      octets            (0-27 octets)
//!                   6-127  enterprise specific
//! bytes 5..       payload selected by the sub-type
//! ```
//!
//! ## Output
//! Opaque identifiers render as hex. Structured ones render as
//! `enterprise N, <payload>`. A payload that does not fit its sub-type is not an
//! error: it renders as `!!! <hex>` (violation) or `??? <hex>` (unknown
//! sub-type), and bytes trailing a fixed-size address render as
//! ` (??? <hex>)`. Only an empty buffer or a structured buffer without a
//! sub-type byte fail.
//!
//! ```rust
//! use snmp_codec::core::engine_id::decode_engine_id;
//!
//! let id = [0x80, 0x00, 0x00, 0x01, 0x01, 192, 168, 0, 1];
//! assert_eq!(decode_engine_id(&id).unwrap(), "enterprise 1, 192.168.0.1");
//! ```

use crate::config::{ENGINE_ID_MAX_LEN, ENGINE_ID_MIN_STRUCTURED_LEN, MAX_LOCAL_PAYLOAD};
use crate::core::hex::{write_hex, HexCase};
use crate::error::{CodecError, Result};
use std::fmt::{self, Write};
use std::net::Ipv4Addr;
use tracing::debug;

/// Prefix for a payload that breaks the layout its sub-type requires
pub const VIOLATION_MARKER: &str = "!!! ";

/// Prefix for a payload whose sub-type is not recognized
pub const UNKNOWN_MARKER: &str = "??? ";

const STRUCTURED_FLAG: u8 = 0x80;

/// How the identifier declares its own structure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    /// Structure defined outside SNMPv3; treated as opaque bytes
    Unstructured,
    /// Enterprise number, sub-type and payload
    Structured,
}

impl FormatKind {
    /// Read the format flag from the identifier's first byte
    pub fn from_first_byte(byte: u8) -> Self {
        if byte & STRUCTURED_FLAG == 0 {
            FormatKind::Unstructured
        } else {
            FormatKind::Structured
        }
    }
}

/// Payload discriminator of a structured identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubType {
    Reserved,
    Ipv4,
    Ipv6,
    Mac,
    Text,
    Octets,
    Unknown(u8),
}

impl SubType {
    /// Detect sub-type from its wire byte
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            0 => SubType::Reserved,
            1 => SubType::Ipv4,
            2 => SubType::Ipv6,
            3 => SubType::Mac,
            4 => SubType::Text,
            5 => SubType::Octets,
            other => SubType::Unknown(other),
        }
    }

    /// Get the wire byte for this sub-type
    pub fn as_byte(self) -> u8 {
        match self {
            SubType::Reserved => 0,
            SubType::Ipv4 => 1,
            SubType::Ipv6 => 2,
            SubType::Mac => 3,
            SubType::Text => 4,
            SubType::Octets => 5,
            SubType::Unknown(byte) => byte,
        }
    }

    /// Payload size for address sub-types; `None` for the rest
    pub fn fixed_len(self) -> Option<usize> {
        match self {
            SubType::Ipv4 => Some(4),
            SubType::Ipv6 => Some(16),
            SubType::Mac => Some(6),
            _ => None,
        }
    }

    /// Get human-readable name
    pub fn name(self) -> &'static str {
        match self {
            SubType::Reserved => "reserved",
            SubType::Ipv4 => "ipv4",
            SubType::Ipv6 => "ipv6",
            SubType::Mac => "mac",
            SubType::Text => "text",
            SubType::Octets => "octets",
            SubType::Unknown(_) => "unknown",
        }
    }
}

/// Parsed view over an engine identifier buffer.
///
/// Borrows the input; rendering always produces an owned `String`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineId<'a> {
    /// Opaque identifier, rendered as hex
    Unstructured(&'a [u8]),
    /// SNMPv3-structured identifier
    Structured {
        enterprise: u32,
        sub_type: SubType,
        payload: &'a [u8],
    },
}

impl<'a> EngineId<'a> {
    /// Split an identifier into its parts.
    ///
    /// # Errors
    /// - `CodecError::EmptyInput` if `buf` is empty
    /// - `CodecError::TruncatedBuffer` if a structured identifier has no sub-type byte
    pub fn parse(buf: &'a [u8]) -> Result<Self> {
        let (&first, _) = buf.split_first().ok_or(CodecError::EmptyInput)?;

        if FormatKind::from_first_byte(first) == FormatKind::Unstructured {
            return Ok(EngineId::Unstructured(buf));
        }

        if buf.len() < ENGINE_ID_MIN_STRUCTURED_LEN {
            return Err(CodecError::TruncatedBuffer {
                needed: ENGINE_ID_MIN_STRUCTURED_LEN,
                actual: buf.len(),
            });
        }

        Ok(EngineId::Structured {
            enterprise: u32::from_be_bytes([first & !STRUCTURED_FLAG, buf[1], buf[2], buf[3]]),
            sub_type: SubType::from_byte(buf[4]),
            payload: &buf[ENGINE_ID_MIN_STRUCTURED_LEN..],
        })
    }

    pub fn format_kind(&self) -> FormatKind {
        match self {
            EngineId::Unstructured(_) => FormatKind::Unstructured,
            EngineId::Structured { .. } => FormatKind::Structured,
        }
    }

    /// Length of the original buffer
    pub fn wire_len(&self) -> usize {
        match self {
            EngineId::Unstructured(bytes) => bytes.len(),
            EngineId::Structured { payload, .. } => ENGINE_ID_MIN_STRUCTURED_LEN + payload.len(),
        }
    }

    /// Whether the identifier exceeds the 32-byte upper bound.
    ///
    /// Reported only; rendering is unaffected.
    pub fn is_oversized(&self) -> bool {
        self.wire_len() > ENGINE_ID_MAX_LEN
    }

    /// Whether the payload matches what its sub-type declares.
    ///
    /// False when the rendering will carry a `!!!`/`???` marker, and also for
    /// text or octet payloads longer than 27 bytes.
    pub fn is_well_formed(&self) -> bool {
        match *self {
            EngineId::Unstructured(_) => true,
            EngineId::Structured {
                sub_type, payload, ..
            } => match sub_type {
                SubType::Ipv4 | SubType::Ipv6 | SubType::Mac => {
                    sub_type.fixed_len() == Some(payload.len())
                }
                SubType::Text | SubType::Octets => payload.len() <= MAX_LOCAL_PAYLOAD,
                SubType::Reserved | SubType::Unknown(_) => false,
            },
        }
    }

    /// Render with the given alphabet for opaque and marked hex runs.
    ///
    /// The IPv6 and MAC address forms are always uppercase.
    pub fn render(&self, case: HexCase) -> String {
        let mut out = String::with_capacity(self.render_capacity());
        let _ = self.write_to(&mut out, case);
        out
    }

    // Worst case: every payload byte is a replacement character in text
    // (3 bytes) plus quotes, or an address byte plus its separator.
    fn render_capacity(&self) -> usize {
        match self {
            EngineId::Unstructured(bytes) => bytes.len() * 2,
            EngineId::Structured { payload, .. } => 32 + payload.len() * 4,
        }
    }

    fn write_to<W: Write + ?Sized>(&self, out: &mut W, case: HexCase) -> fmt::Result {
        let (enterprise, sub_type, payload) = match *self {
            EngineId::Unstructured(bytes) => return write_hex(out, bytes, case),
            EngineId::Structured {
                enterprise,
                sub_type,
                payload,
            } => (enterprise, sub_type, payload),
        };

        write!(out, "enterprise {enterprise}, ")?;

        match sub_type {
            SubType::Ipv4 | SubType::Ipv6 | SubType::Mac => {
                let width = sub_type.fixed_len().unwrap_or_default();
                if payload.len() < width {
                    out.write_str(VIOLATION_MARKER)?;
                    return write_hex(out, payload, case);
                }

                let (field, trailing) = payload.split_at(width);
                write_address(out, sub_type, field)?;

                if !trailing.is_empty() {
                    out.write_str(" (")?;
                    out.write_str(UNKNOWN_MARKER)?;
                    write_hex(out, trailing, case)?;
                    out.write_char(')')?;
                }
                Ok(())
            }
            SubType::Text => write!(out, "\"{}\"", String::from_utf8_lossy(payload)),
            SubType::Octets => write_hex(out, payload, case),
            SubType::Reserved => {
                out.write_str(VIOLATION_MARKER)?;
                write_hex(out, payload, case)
            }
            SubType::Unknown(_) => {
                out.write_str(UNKNOWN_MARKER)?;
                write_hex(out, payload, case)
            }
        }
    }
}

fn write_address<W: Write + ?Sized>(
    out: &mut W,
    sub_type: SubType,
    field: &[u8],
) -> fmt::Result {
    match (sub_type, field) {
        (SubType::Ipv4, &[a, b, c, d]) => write!(out, "{}", Ipv4Addr::new(a, b, c, d)),
        // Display convention only; not the canonical IPv6 text form.
        (SubType::Ipv6, _) => {
            for (i, group) in field.chunks_exact(2).enumerate() {
                match i {
                    0 => {}
                    4 => out.write_str("::")?,
                    _ => out.write_char(' ')?,
                }
                write!(out, "{:02X}{:02X}", group[0], group[1])?;
            }
            Ok(())
        }
        _ => {
            for (i, octet) in field.iter().enumerate() {
                if i > 0 {
                    out.write_char(':')?;
                }
                write!(out, "{octet:02X}")?;
            }
            Ok(())
        }
    }
}

impl fmt::Display for EngineId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f, HexCase::Lower)
    }
}

/// Decode an engine identifier into its printable form.
///
/// # Errors
/// - `CodecError::EmptyInput` if `buf` is empty
/// - `CodecError::TruncatedBuffer` if a structured identifier is shorter than 5 bytes
pub fn decode_engine_id(buf: &[u8]) -> Result<String> {
    decode_engine_id_with_case(buf, HexCase::Lower)
}

/// Decode an engine identifier, rendering hex runs in the given alphabet
pub fn decode_engine_id_with_case(buf: &[u8], case: HexCase) -> Result<String> {
    let id = EngineId::parse(buf)?;

    if let EngineId::Structured {
        enterprise,
        sub_type,
        payload,
    } = id
    {
        if !id.is_well_formed() {
            debug!(
                enterprise,
                sub_type = sub_type.name(),
                payload_len = payload.len(),
                "Engine identifier payload does not match its sub-type"
            );
        }
    }
    if id.is_oversized() {
        debug!(
            len = buf.len(),
            max = ENGINE_ID_MAX_LEN,
            "Engine identifier exceeds maximum length"
        );
    }

    Ok(id.render(case))
}
