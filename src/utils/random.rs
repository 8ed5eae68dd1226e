//! # Random Buffers
//!
//! Buffers filled from the operating system's CSPRNG, used to seed salts and
//! other per-message values before they are hex-dumped or encoded.
//!
//! Buffers are wrapped in [`Zeroizing`] so their contents are wiped when they
//! are dropped.

use crate::error::{CodecError, Result};
use tracing::warn;
use zeroize::Zeroizing;

/// Allocate `len` bytes of OS randomness.
///
/// # Errors
/// Returns `CodecError::RandomSource` if the OS generator fails
pub fn random_buffer(len: usize) -> Result<Zeroizing<Vec<u8>>> {
    let mut buf = Zeroizing::new(vec![0u8; len]);
    getrandom::fill(&mut buf).map_err(|e| {
        warn!(len, error = %e, "OS random source failed");
        CodecError::RandomSource(e.to_string())
    })?;
    Ok(buf)
}
