//! The fixed-size password envelope.
//!
//! `encode` turns a JSON document of up to 65 500 bytes into a blob of
//! exactly 65 564 bytes; `decode` reverses it. The blob size never depends
//! on the payload size, and every decoding failure (wrong password,
//! truncation, tampering, a bad marker) is reported as the same
//! `IncognitoError::AuthenticationFailed`.

mod codec;
pub mod format;
pub mod frame;
pub mod layout;

pub use codec::{
    decode, decode_json, derive_key, encode, encode_json, encode_with_format, reencrypt,
};
pub use format::{Format, MIN_BLOB_LEN, SALT_LEN};
pub use layout::BlobLayout;
