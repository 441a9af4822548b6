//! Cryptographic primitives for Incognito Vault.
//!
//! This module provides:
//! - AES-256-GCM sealing and opening with caller-supplied nonces (`encryption`)
//! - Argon2id password-based key derivation (`kdf`)
//! - Independent draws from the operating system's random source (`random`)

pub mod encryption;
pub mod kdf;
pub mod random;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{seal, open, derive_key, ...};
pub use encryption::{open, seal, NONCE_LEN, TAG_LEN};
pub use kdf::{derive_key, KdfParams, KEY_LEN};
pub use random::{fill_random, random_array};
