//! Incognito Vault: password-encrypted JSON blobs of one fixed size.
//!
//! ```no_run
//! let blob = incognito::encode(br#"{"api_key":"..."}"#, b"correct horse")?;
//! assert_eq!(blob.len(), 65_564);
//! let json = incognito::decode(&blob, b"correct horse")?;
//! # Ok::<(), incognito::errors::IncognitoError>(())
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod envelope;
pub mod errors;
pub mod store;

pub use envelope::{decode, decode_json, encode, encode_json, reencrypt};
pub use errors::{IncognitoError, Result};
