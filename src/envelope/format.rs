//! Format descriptors for the fixed-size envelope.
//!
//! A blob has this layout (all integers big-endian):
//!
//! ```text
//! [salt: 16][nonce: 12][AES-256-GCM ciphertext: 65 536]
//! ```
//!
//! and the ciphertext seals a 65 520-byte frame:
//!
//! ```text
//! [marker][json length: u32 BE][json][random padding]
//! ```
//!
//! Blobs carry no version byte. Every descriptor in `Format::KNOWN` shares
//! the same KDF and envelope sizes, so a reader derives the key once and
//! tells the frame layouts apart after decryption by their marker and
//! length field.

use crate::crypto::{KdfParams, NONCE_LEN, TAG_LEN};

/// Length of the random Argon2id salt stored at the start of every blob.
pub const SALT_LEN: usize = 16;

/// Length of the big-endian payload length that follows the marker.
pub const LENGTH_FIELD_LEN: usize = 4;

/// Size of every ciphertext (frame + GCM tag).
const CIPHERTEXT_LEN: usize = 64 * 1024;

/// Describes one version of the envelope format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Format {
    /// Short human-readable name, used in logs and `inspect` output.
    pub name: &'static str,
    /// Constant prefix of the plaintext frame.
    pub marker: &'static [u8],
    /// Size of the sealed ciphertext, tag included.
    pub ciphertext_len: usize,
    /// Argon2id parameters used to turn the password into the AES key.
    pub kdf: KdfParams,
}

impl Format {
    /// The format written by default: 16-byte marker, 65 500-byte capacity.
    pub const CURRENT: Self = Self {
        name: "v2",
        marker: b"BITBOX-INCOGNITO",
        ciphertext_len: CIPHERTEXT_LEN,
        kdf: KdfParams::STANDARD,
    };

    /// The format written by older desktop releases. Its marker is
    /// 17 bytes long, which leaves 65 499 bytes for the payload.
    pub const LEGACY: Self = Self {
        name: "v1",
        marker: b"BITBOX-INCOGNITO1",
        ciphertext_len: CIPHERTEXT_LEN,
        kdf: KdfParams::STANDARD,
    };

    /// Every format a reader accepts, in the order frames are tried.
    pub const KNOWN: &'static [Self] = &[Self::CURRENT, Self::LEGACY];

    /// Size of the plaintext frame sealed by AES-GCM.
    pub const fn frame_len(&self) -> usize {
        self.ciphertext_len - TAG_LEN
    }

    /// Bytes taken by the marker and length field.
    pub const fn header_len(&self) -> usize {
        self.marker.len() + LENGTH_FIELD_LEN
    }

    /// Largest JSON payload that fits in one frame.
    pub const fn max_payload_len(&self) -> usize {
        self.frame_len() - self.header_len()
    }

    /// Total size of every blob written in this format.
    pub const fn blob_len(&self) -> usize {
        SALT_LEN + NONCE_LEN + self.ciphertext_len
    }
}

/// Smallest input that could possibly hold a salt, a nonce and a GCM tag.
/// Anything shorter is rejected before any cryptographic work.
pub const MIN_BLOB_LEN: usize = SALT_LEN + NONCE_LEN + TAG_LEN;
