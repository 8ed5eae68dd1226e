//! # Chunked Hex Dumps
//!
//! Hex-encodes a buffer and forwards it to a line-oriented debug sink, one
//! call per fixed-width chunk.
//!
//! ```text
//! title                       (only when a non-empty title is given)
//! <first 64 hex characters>
//! <next 64 hex characters>
//! ...
//! ```
//!
//! ## Usage
//! ```rust
//! use snmp_codec::utils::dump::dump_chunk;
//! use std::cell::RefCell;
//!
//! let lines = RefCell::new(Vec::new());
//! let sink = |_token: &str, line: &str| lines.borrow_mut().push(line.to_string());
//!
//! dump_chunk(&sink, "usm", Some("salt"), &[0xde, 0xad, 0xbe, 0xef]);
//! assert_eq!(*lines.borrow(), vec!["salt", "deadbeef"]);
//! ```

use crate::config::{CodecConfig, DEFAULT_DUMP_LINE_WIDTH};
use crate::core::engine_id::decode_engine_id_with_case;
use crate::core::hex::{encode_with_case, HexCase};
use crate::error::Result;
use tracing::debug;

/// Receiver for pre-formatted dump lines
pub trait DebugSink {
    /// Emit one line under the given debug token
    fn emit(&self, token: &str, line: &str);
}

/// Sink that forwards every line as a `tracing` debug event
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DebugSink for TracingSink {
    fn emit(&self, token: &str, line: &str) {
        debug!(token, "{line}");
    }
}

impl<F> DebugSink for F
where
    F: Fn(&str, &str),
{
    fn emit(&self, token: &str, line: &str) {
        self(token, line)
    }
}

/// Dump `buf` as lowercase hex in 64-character lines.
///
/// Returns the number of sink calls made, title included.
pub fn dump_chunk<S: DebugSink + ?Sized>(
    sink: &S,
    token: &str,
    title: Option<&str>,
    buf: &[u8],
) -> usize {
    emit_chunked(
        sink,
        token,
        title,
        &encode_with_case(buf, HexCase::Lower),
        DEFAULT_DUMP_LINE_WIDTH,
    )
}

// A zero-length buffer still emits one empty line so the dump shows up.
fn emit_chunked<S: DebugSink + ?Sized>(
    sink: &S,
    token: &str,
    title: Option<&str>,
    hex: &str,
    line_width: usize,
) -> usize {
    let mut calls = 0;

    if let Some(title) = title.filter(|t| !t.is_empty()) {
        sink.emit(token, title);
        calls += 1;
    }

    let mut rest = hex;
    loop {
        let (line, tail) = rest.split_at(rest.len().min(line_width));
        sink.emit(token, line);
        calls += 1;

        if tail.is_empty() {
            break;
        }
        rest = tail;
    }

    calls
}

/// A sink bound to a debug token, line width and hex alphabet
#[derive(Debug, Clone)]
pub struct Dumper<S> {
    sink: S,
    token: String,
    line_width: usize,
    case: HexCase,
}

impl<S: DebugSink> Dumper<S> {
    /// Create a dumper with the default token, width and alphabet
    pub fn new(sink: S) -> Self {
        Self::from_config(sink, &CodecConfig::default())
    }

    /// Create a dumper from the `hex` and `dump` sections of a configuration.
    ///
    /// A zero line width falls back to the default.
    pub fn from_config(sink: S, config: &CodecConfig) -> Self {
        let line_width = match config.dump.line_width {
            0 => DEFAULT_DUMP_LINE_WIDTH,
            width => width,
        };

        Self {
            sink,
            token: config.dump.debug_token.clone(),
            line_width,
            case: config.hex.case,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn line_width(&self) -> usize {
        self.line_width
    }

    /// Dump a buffer, returning the number of lines emitted
    pub fn dump(&self, title: Option<&str>, buf: &[u8]) -> usize {
        let hex = encode_with_case(buf, self.case);
        emit_chunked(&self.sink, &self.token, title, &hex, self.line_width)
    }

    /// Decode an engine identifier and emit it as a single line.
    ///
    /// # Errors
    /// Propagates `EmptyInput` / `TruncatedBuffer` from the decoder; nothing is
    /// emitted in that case.
    pub fn dump_engine_id(&self, buf: &[u8]) -> Result<()> {
        let rendered = decode_engine_id_with_case(buf, self.case)?;
        self.sink.emit(&self.token, &rendered);
        Ok(())
    }

    pub fn into_inner(self) -> S {
        self.sink
    }
}
