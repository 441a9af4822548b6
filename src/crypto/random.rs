//! Draws from the operating system's random source.
//!
//! Every call is a separate read from `OsRng`; nothing is buffered or
//! derived from a previous draw, so salt, nonce and padding stay
//! independent of each other.

use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::errors::{IncognitoError, Result};

/// Fill `buf` with bytes from the OS random source.
pub fn fill_random(buf: &mut [u8]) -> Result<()> {
    OsRng
        .try_fill_bytes(buf)
        .map_err(|e| IncognitoError::EntropyUnavailable(e.to_string()))
}

/// Return a fresh array of `N` random bytes.
pub fn random_array<const N: usize>() -> Result<[u8; N]> {
    let mut out = [0u8; N];
    fill_random(&mut out)?;
    Ok(out)
}
