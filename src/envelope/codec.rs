//! Encode and decode operations.

use serde::de::DeserializeOwned;
use serde::Serialize;
use zeroize::Zeroizing;

use super::format::{Format, SALT_LEN};
use super::frame::{build_frame, parse_known_frame};
use super::layout::BlobLayout;
use crate::crypto::{self, kdf, random_array, KEY_LEN, NONCE_LEN};
use crate::errors::{IncognitoError, Result};

/// Derive the AES key for `password` and `salt` with the format's Argon2id
/// parameters (t = 3, m = 64 MiB, p = 1).
pub fn derive_key(password: &[u8], salt: &[u8; SALT_LEN]) -> Zeroizing<[u8; KEY_LEN]> {
    kdf::derive_key(password, salt, &Format::CURRENT.kdf)
}

/// Encrypt `json` under `password` into a blob of exactly 65 564 bytes.
///
/// Fails with `PayloadTooLarge` if `json` is longer than 65 500 bytes.
pub fn encode(json: &[u8], password: &[u8]) -> Result<Vec<u8>> {
    encode_with_format(&Format::CURRENT, json, password)
}

/// Encrypt `json` using a specific frame layout.
///
/// `Format::LEGACY` is only useful when the blob must be readable by the
/// older desktop releases; everything else should call `encode`.
pub fn encode_with_format(format: &Format, json: &[u8], password: &[u8]) -> Result<Vec<u8>> {
    let frame = build_frame(format, json)?;

    let salt: [u8; SALT_LEN] = random_array()?;
    let key = kdf::derive_key(password, &salt, &format.kdf);

    let nonce: [u8; NONCE_LEN] = random_array()?;
    let ciphertext = crypto::seal(&key, &nonce, &frame);
    assert_eq!(
        ciphertext.len(),
        format.ciphertext_len,
        "sealed frame has the wrong size"
    );

    let mut blob = Vec::with_capacity(format.blob_len());
    blob.extend_from_slice(&salt);
    blob.extend_from_slice(&nonce);
    blob.extend_from_slice(&ciphertext);

    tracing::debug!(
        format = format.name,
        blob_len = blob.len(),
        "sealed envelope"
    );

    Ok(blob)
}

/// Decrypt a blob produced by `encode` and return the JSON payload.
///
/// Every failure is reported as `AuthenticationFailed`; only the
/// too-short check runs before the key is derived.
pub fn decode(blob: &[u8], password: &[u8]) -> Result<Vec<u8>> {
    let Some(layout) = BlobLayout::parse(blob) else {
        tracing::debug!(blob_len = blob.len(), "rejected envelope");
        return Err(IncognitoError::AuthenticationFailed);
    };

    // All known formats share these parameters (checked in format tests).
    let key = kdf::derive_key(password, layout.salt, &Format::CURRENT.kdf);

    let opened = crypto::open(&key, layout.nonce, layout.ciphertext);
    let parsed = opened
        .as_ref()
        .ok()
        .and_then(|frame| parse_known_frame(frame));

    match parsed {
        Some((format, json)) => {
            tracing::debug!(format = format.name, blob_len = blob.len(), "opened envelope");
            Ok(json.to_vec())
        }
        None => {
            tracing::debug!(blob_len = blob.len(), "rejected envelope");
            Err(IncognitoError::AuthenticationFailed)
        }
    }
}

/// Re-encrypt a blob under a new password.
///
/// Salt, nonce and padding are all drawn fresh; legacy blobs come out in
/// the current format.
pub fn reencrypt(blob: &[u8], old_password: &[u8], new_password: &[u8]) -> Result<Vec<u8>> {
    let json = Zeroizing::new(decode(blob, old_password)?);
    encode(&json, new_password)
}

/// Serialize `value` as JSON and encrypt it.
pub fn encode_json<T: Serialize + ?Sized>(value: &T, password: &[u8]) -> Result<Vec<u8>> {
    let json = Zeroizing::new(
        serde_json::to_vec(value)
            .map_err(|e| IncognitoError::SerializationError(format!("payload: {e}")))?,
    );
    encode(&json, password)
}

/// Decrypt a blob and deserialize its JSON payload.
///
/// A payload that authenticates but does not match `T` is reported as a
/// `SerializationError`; by then the password is known to be correct.
pub fn decode_json<T: DeserializeOwned>(blob: &[u8], password: &[u8]) -> Result<T> {
    let json = Zeroizing::new(decode(blob, password)?);
    serde_json::from_slice(&json)
        .map_err(|e| IncognitoError::SerializationError(format!("payload: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_roundtrip() {
        let blob = encode(b"{\"seed\":\"abc\"}", b"pw").unwrap();
        assert_eq!(blob.len(), 65_564);
        assert_eq!(decode(&blob, b"pw").unwrap(), b"{\"seed\":\"abc\"}");
    }

    #[test]
    fn derive_key_matches_blob_key() {
        let blob = encode(b"{}", b"pw").unwrap();
        let layout = BlobLayout::parse(&blob).unwrap();
        let key = derive_key(b"pw", layout.salt);

        let frame = crypto::open(&key, layout.nonce, layout.ciphertext).unwrap();
        assert_eq!(&frame[..16], Format::CURRENT.marker);
    }

    #[test]
    fn short_blob_fails_without_kdf() {
        let err = decode(&[0u8; 43], b"pw").unwrap_err();
        assert!(matches!(err, IncognitoError::AuthenticationFailed));
    }

    #[test]
    fn oversized_payload_fails_before_any_crypto() {
        let err = encode(&vec![b' '; 70_000], b"pw").unwrap_err();
        assert!(matches!(err, IncognitoError::PayloadTooLarge { .. }));
    }

    #[test]
    fn wrong_marker_under_valid_key_is_authentication_failure() {
        // Seal a frame that authenticates but carries a foreign marker.
        let salt = [0x01u8; SALT_LEN];
        let nonce = [0x02u8; NONCE_LEN];
        let key = derive_key(b"pw", &salt);

        let mut frame = vec![0u8; Format::CURRENT.frame_len()];
        frame[..16].copy_from_slice(b"NOT-THE-MARKER!!");
        let ciphertext = crypto::seal(&key, &nonce, &frame);

        let mut blob = salt.to_vec();
        blob.extend_from_slice(&nonce);
        blob.extend_from_slice(&ciphertext);

        let err = decode(&blob, b"pw").unwrap_err();
        assert!(matches!(err, IncognitoError::AuthenticationFailed));
    }

    #[test]
    fn short_frame_under_valid_key_is_authentication_failure() {
        let salt = [0x03u8; SALT_LEN];
        let nonce = [0x04u8; NONCE_LEN];
        let key = derive_key(b"pw", &salt);

        // Correct marker and length, but the frame is one byte short.
        let mut frame = Format::CURRENT.marker.to_vec();
        frame.extend_from_slice(&2u32.to_be_bytes());
        frame.extend_from_slice(b"{}");
        frame.resize(Format::CURRENT.frame_len() - 1, 0);
        let ciphertext = crypto::seal(&key, &nonce, &frame);

        let mut blob = salt.to_vec();
        blob.extend_from_slice(&nonce);
        blob.extend_from_slice(&ciphertext);

        assert!(matches!(
            decode(&blob, b"pw"),
            Err(IncognitoError::AuthenticationFailed)
        ));
    }
}
