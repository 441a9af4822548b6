//! Password-free view of a blob's outer structure.

use super::format::{Format, MIN_BLOB_LEN, SALT_LEN};
use crate::crypto::NONCE_LEN;

/// The three unencrypted-or-opaque sections of a blob.
///
/// Parsing only checks that the blob is long enough to hold a salt, a
/// nonce and a GCM tag; the ciphertext is not touched.
#[derive(Debug, Clone, Copy)]
pub struct BlobLayout<'a> {
    pub salt: &'a [u8; SALT_LEN],
    pub nonce: &'a [u8; NONCE_LEN],
    pub ciphertext: &'a [u8],
}

impl<'a> BlobLayout<'a> {
    /// Split `blob` into salt, nonce and ciphertext.
    ///
    /// Returns `None` if the blob is shorter than `MIN_BLOB_LEN`.
    pub fn parse(blob: &'a [u8]) -> Option<Self> {
        if blob.len() < MIN_BLOB_LEN {
            return None;
        }

        let (salt, rest) = blob.split_at(SALT_LEN);
        let (nonce, ciphertext) = rest.split_at(NONCE_LEN);

        Some(Self {
            salt: salt.try_into().ok()?,
            nonce: nonce.try_into().ok()?,
            ciphertext,
        })
    }

    /// Total size of the blob.
    pub fn total_len(&self) -> usize {
        SALT_LEN + NONCE_LEN + self.ciphertext.len()
    }

    /// Whether the blob has exactly the size every known format writes.
    ///
    /// A non-canonical blob cannot decrypt successfully, but this check
    /// alone says nothing about whether a canonical one will.
    pub fn is_canonical(&self) -> bool {
        Format::KNOWN
            .iter()
            .any(|format| format.blob_len() == self.total_len())
    }
}
