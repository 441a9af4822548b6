//! AES-256-GCM authenticated encryption.
//!
//! Unlike a general-purpose wrapper, the nonce is supplied by the caller:
//! the envelope layer draws it independently and stores it next to the
//! salt, so this module never prepends anything to the ciphertext.
//!
//! Layout of the returned byte buffer:
//!   [ ciphertext | 16-byte auth tag ]

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use zeroize::Zeroizing;

use super::kdf::KEY_LEN;
use crate::errors::{IncognitoError, Result};

/// Size of the AES-256-GCM nonce in bytes.
pub const NONCE_LEN: usize = 12;

/// Size of the GCM authentication tag appended to every ciphertext.
pub const TAG_LEN: usize = 16;

/// Encrypt `plaintext` under `key` and `nonce` with no associated data.
///
/// The output is exactly `plaintext.len() + TAG_LEN` bytes.
///
/// # Panics
///
/// Panics if AES-GCM refuses the plaintext, which only happens for inputs
/// beyond the GCM length limit (~64 GiB). Envelope frames are a fixed
/// 64 KiB, so this is an invariant violation rather than an input error.
pub fn seal(key: &[u8; KEY_LEN], nonce: &[u8; NONCE_LEN], plaintext: &[u8]) -> Vec<u8> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));

    cipher
        .encrypt(Nonce::from_slice(nonce), plaintext)
        .expect("AES-256-GCM rejected a bounded plaintext")
}

/// Decrypt and authenticate data produced by `seal`.
///
/// Any failure (wrong key, flipped bit, truncated tag) is reported as
/// `AuthenticationFailed`. The recovered plaintext is wiped on drop.
pub fn open(
    key: &[u8; KEY_LEN],
    nonce: &[u8; NONCE_LEN],
    ciphertext: &[u8],
) -> Result<Zeroizing<Vec<u8>>> {
    if ciphertext.len() < TAG_LEN {
        return Err(IncognitoError::AuthenticationFailed);
    }

    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));

    let plaintext = cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| IncognitoError::AuthenticationFailed)?;

    Ok(Zeroizing::new(plaintext))
}
