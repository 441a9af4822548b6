use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{IncognitoError, Result};

/// CLI configuration, loaded from `.incognito.toml`.
///
/// Every field has a sensible default so the tool works out-of-the-box
/// without any config file at all. The Argon2id parameters are not here
/// on purpose: they are constants of the blob format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Blob file used when no `--file` is given.
    #[serde(default = "default_blob_file")]
    pub blob_file: String,

    /// Minimum length enforced when choosing a new password.
    #[serde(default = "default_min_password_len")]
    pub min_password_len: usize,

    /// Pretty-print JSON when opening a blob.
    #[serde(default = "default_pretty_json")]
    pub pretty_json: bool,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_blob_file() -> String {
    "incognito.vault".to_string()
}

fn default_min_password_len() -> usize {
    8
}

fn default_pretty_json() -> bool {
    true
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            blob_file: default_blob_file(),
            min_password_len: default_min_password_len(),
            pretty_json: default_pretty_json(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the working directory.
    const FILE_NAME: &'static str = ".incognito.toml";

    /// Load settings from `<dir>/.incognito.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            IncognitoError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Resolve the blob path: an explicit path wins, otherwise
    /// `blob_file` relative to `dir`.
    pub fn blob_path(&self, dir: &Path, explicit: Option<&Path>) -> PathBuf {
        match explicit {
            Some(path) if path.is_absolute() => path.to_path_buf(),
            Some(path) => dir.join(path),
            None => dir.join(&self.blob_file),
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────
