//! Password-based key derivation using Argon2id.
//!
//! Argon2id is a memory-hard KDF that protects against brute-force and
//! GPU-based attacks. Unlike a tunable vault, the parameters here are part
//! of the blob format: a blob does not record them, so changing them would
//! make every previously written file unreadable. They therefore live in
//! `envelope::Format` rather than in user settings.

use argon2::{Algorithm, Argon2, Params, Version};
use zeroize::Zeroizing;

/// Length of the derived key in bytes (256 bits, for AES-256).
pub const KEY_LEN: usize = 32;

/// Argon2id cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfParams {
    /// Number of passes over memory.
    pub iterations: u32,
    /// Memory cost in KiB.
    pub memory_kib: u32,
    /// Parallelism lanes.
    pub parallelism: u32,
}

impl KdfParams {
    /// t = 3, m = 64 MiB, p = 1.
    pub const STANDARD: Self = Self {
        iterations: 3,
        memory_kib: 64 * 1024,
        parallelism: 1,
    };
}

/// Derive a 32-byte key from a password and salt using Argon2id (v1.3).
///
/// The same password + salt + params always produce the same key. The key
/// is returned in a `Zeroizing` wrapper so it is wiped when dropped.
///
/// # Panics
///
/// Panics if `params` are rejected by Argon2 or `salt` is shorter than
/// eight bytes. Both are constants of the blob format, so a failure here
/// means a broken build, not bad input.
pub fn derive_key(password: &[u8], salt: &[u8], params: &KdfParams) -> Zeroizing<[u8; KEY_LEN]> {
    let argon2_params = Params::new(
        params.memory_kib,
        params.iterations,
        params.parallelism,
        Some(KEY_LEN),
    )
    .unwrap_or_else(|e| panic!("invalid Argon2id parameters {params:?}: {e}"));

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, argon2_params);

    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    argon2
        .hash_password_into(password, salt, &mut *key)
        .unwrap_or_else(|e| panic!("Argon2id hashing failed: {e}"));

    key
}
