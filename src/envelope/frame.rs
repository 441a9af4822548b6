//! Packing a JSON payload into a fixed-size frame and getting it back.

use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use super::format::{Format, LENGTH_FIELD_LEN};
use crate::crypto::fill_random;
use crate::errors::{IncognitoError, Result};

/// Build the plaintext frame for `json`.
///
/// The frame is always `format.frame_len()` bytes: marker, big-endian
/// payload length, payload, then padding from the OS random source.
pub fn build_frame(format: &Format, json: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
    let max = format.max_payload_len();
    if json.len() > max {
        return Err(IncognitoError::PayloadTooLarge {
            len: json.len(),
            max,
        });
    }
    let declared = u32::try_from(json.len()).map_err(|_| IncognitoError::PayloadTooLarge {
        len: json.len(),
        max,
    })?;

    // Reserve the full frame up front so no reallocation leaves a copy of
    // the payload behind in freed memory.
    let mut frame = Zeroizing::new(Vec::with_capacity(format.frame_len()));
    frame.extend_from_slice(format.marker);
    frame.extend_from_slice(&declared.to_be_bytes());
    frame.extend_from_slice(json);

    let payload_end = frame.len();
    frame.resize(format.frame_len(), 0);
    fill_random(&mut frame[payload_end..])?;

    Ok(frame)
}

/// Extract the payload from a decrypted frame, if it matches `format`.
///
/// Returns `None` when the size is wrong, the marker differs, or the
/// declared length would run past the frame.
pub fn parse_frame<'a>(format: &Format, frame: &'a [u8]) -> Option<&'a [u8]> {
    if frame.len() != format.frame_len() {
        return None;
    }

    let (marker, rest) = frame.split_at(format.marker.len());
    if !bool::from(marker.ct_eq(format.marker)) {
        return None;
    }

    let (length_field, body) = rest.split_at(LENGTH_FIELD_LEN);
    let declared = u32::from_be_bytes(length_field.try_into().ok()?);
    let declared = usize::try_from(declared).ok()?;
    if declared > format.max_payload_len() {
        return None;
    }

    Some(&body[..declared])
}

/// Try every known format against a decrypted frame.
pub fn parse_known_frame(frame: &[u8]) -> Option<(&'static Format, &[u8])> {
    Format::KNOWN
        .iter()
        .find_map(|format| parse_frame(format, frame).map(|json| (format, json)))
}
