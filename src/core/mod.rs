//! # Core Codecs
//!
//! Conversions between binary buffers and their textual forms.
//!
//! ## Components
//! - **Hex**: symmetric base16 encode/decode with right-aligned odd input
//! - **Engine ID**: structured decoder for SNMPv3 engine identifiers
//!
//! Both are pure functions over caller-supplied buffers: no I/O, no shared
//! state, safe to call from any number of threads.

pub mod engine_id;
pub mod hex;
