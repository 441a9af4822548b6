use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in Incognito Vault.
///
/// Decoding collapses every cryptographic and structural failure into
/// `AuthenticationFailed`, so callers cannot tell a wrong password from a
/// corrupted or tampered blob.
#[derive(Debug, Error)]
pub enum IncognitoError {
    // --- Envelope errors ---
    #[error("JSON payload too large ({len} bytes); max is {max} bytes")]
    PayloadTooLarge { len: usize, max: usize },

    #[error("Wrong password or corrupted file")]
    AuthenticationFailed,

    #[error("System random source unavailable: {0}")]
    EntropyUnavailable(String),

    // --- Blob file errors ---
    #[error("Encrypted file not found at {0}")]
    BlobNotFound(PathBuf),

    #[error("Encrypted file already exists at {0} (use --force to overwrite)")]
    BlobAlreadyExists(PathBuf),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Input is not valid JSON: {0}")]
    InvalidJson(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Convenience type alias for Incognito Vault results.
pub type Result<T> = std::result::Result<T, IncognitoError>;
