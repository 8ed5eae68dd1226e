//! # Hex Codec
//!
//! Symmetric conversion between binary buffers and base16 text.
//!
//! ## Encoding
//! Two characters per byte, high nibble first. The default alphabet is
//! lowercase (`0-9a-f`); [`encode_with_case`] selects uppercase.
//!
//! ## Decoding
//! Accepts both cases. Input of odd length is right aligned: the single leading
//! digit becomes the low nibble of the first byte.
//!
//! ```text
//! "a"     -> [0x0a]
//! "abc"   -> [0x0a, 0xbc]
//! "0abc"  -> [0x0a, 0xbc]
//! ```
//!
//! ## Security
//! Decoding scans left to right and stops at the first bad digit. The scratch
//! buffer is zeroed before it is released, so a failed decode of key material
//! leaves nothing behind.

use crate::error::{CodecError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;
use zeroize::Zeroizing;

const LOWER_DIGITS: &[u8; 16] = b"0123456789abcdef";
const UPPER_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Alphabet used when rendering bytes as hex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HexCase {
    /// `0-9a-f` (default)
    #[default]
    Lower,
    /// `0-9A-F`
    Upper,
}

impl HexCase {
    fn digits(self) -> &'static [u8; 16] {
        match self {
            HexCase::Lower => LOWER_DIGITS,
            HexCase::Upper => UPPER_DIGITS,
        }
    }

    /// Parse a case name ("lower" / "upper"), ignoring ASCII case
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("lower") {
            Some(HexCase::Lower)
        } else if name.eq_ignore_ascii_case("upper") {
            Some(HexCase::Upper)
        } else {
            None
        }
    }
}

/// Encode bytes as lowercase hex
pub fn encode(input: &[u8]) -> String {
    encode_with_case(input, HexCase::Lower)
}

/// Encode bytes as hex using the given alphabet
pub fn encode_with_case(input: &[u8], case: HexCase) -> String {
    let mut out = String::with_capacity(input.len() * 2);
    let _ = write_hex(&mut out, input, case);
    out
}

/// Write the hex rendering of `input` into any formatter.
///
/// Used by the engine identifier renderer so opaque payloads land directly in
/// its output buffer instead of an intermediate string.
pub(crate) fn write_hex<W: fmt::Write + ?Sized>(
    out: &mut W,
    input: &[u8],
    case: HexCase,
) -> fmt::Result {
    let digits = case.digits();
    for &byte in input {
        out.write_char(digits[(byte >> 4) as usize] as char)?;
        out.write_char(digits[(byte & 0x0f) as usize] as char)?;
    }
    Ok(())
}

/// Decode a hex string into bytes.
///
/// Odd-length input is right aligned. Fails with [`CodecError::InvalidDigit`] at
/// the first character that is not `0-9`, `a-f` or `A-F`.
///
/// # Errors
/// Returns `CodecError::InvalidDigit` carrying the offending byte and its offset
pub fn decode<T: AsRef<[u8]> + ?Sized>(input: &T) -> Result<Vec<u8>> {
    let input = input.as_ref();

    // Exact capacity: the vector never reallocates, so zeroing on drop
    // covers every byte that was ever written.
    let mut out = Zeroizing::new(Vec::with_capacity(input.len().div_ceil(2)));

    let (head, pairs) = input.split_at(input.len() % 2);
    if let Some(&c) = head.first() {
        out.push(nibble(c, 0)?);
    }

    for (i, pair) in pairs.chunks_exact(2).enumerate() {
        let position = head.len() + i * 2;
        let high = nibble(pair[0], position)?;
        let low = nibble(pair[1], position + 1)?;
        out.push((high << 4) | low);
    }

    Ok(std::mem::take(&mut *out))
}

fn nibble(c: u8, position: usize) -> Result<u8> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => {
            trace!(position, byte = c, "Rejecting non-hex digit");
            Err(CodecError::InvalidDigit { position, byte: c })
        }
    }
}
