//! # Utility Modules
//!
//! Supporting utilities around the core codecs.
//!
//! ## Components
//! - **Dump**: chunked hex dumps forwarded to a line-oriented debug sink
//! - **Logging**: `tracing` subscriber setup from [`crate::config::LoggingConfig`]
//! - **Random**: CSPRNG-filled buffers for seeding
//!
//! ## Security
//! - Cryptographically secure RNG (getrandom)
//! - Memory zeroing for sensitive data (zeroize crate)

pub mod dump;
pub mod logging;
pub mod random;

pub use dump::{DebugSink, Dumper, TracingSink};
