//! CLI module: Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{IncognitoError, Result};

/// Environment variable holding the password of an existing file.
pub const PASSWORD_ENV: &str = "INCOGNITO_PASSWORD";

/// Environment variable holding the replacement password for `passwd`.
pub const NEW_PASSWORD_ENV: &str = "INCOGNITO_NEW_PASSWORD";

/// Incognito CLI: fixed-size, password-encrypted JSON files.
#[derive(Parser)]
#[command(
    name = "incognito",
    about = "Password-encrypted JSON files that never reveal their size",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Encrypted file (default: `blob_file` from .incognito.toml, else incognito.vault)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Encrypt a JSON document into a fixed-size file
    Seal {
        /// JSON file to encrypt (reads stdin if omitted)
        input: Option<PathBuf>,

        /// Overwrite an existing encrypted file
        #[arg(long)]
        force: bool,
    },

    /// Decrypt a file and print its JSON
    Open {
        /// Write the JSON to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the JSON exactly as stored, without pretty-printing
        #[arg(long)]
        raw: bool,
    },

    /// Change the password of an encrypted file
    Passwd,

    /// Show the structure of an encrypted file (no password needed)
    Inspect,

    /// Show version information
    Version,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Load settings from the working directory and resolve the blob path.
pub fn resolve_blob_path(cli: &Cli) -> Result<(Settings, PathBuf)> {
    let cwd = std::env::current_dir()?;
    let settings = Settings::load(&cwd)?;
    let path = settings.blob_path(&cwd, cli.file.as_deref());
    Ok((settings, path))
}

/// Get the password of an existing file, trying in order:
/// 1. `INCOGNITO_PASSWORD` env var (scripts/CI)
/// 2. Interactive prompt
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_password() -> Result<Zeroizing<String>> {
    if let Some(pw) = password_from_env(PASSWORD_ENV) {
        return Ok(pw);
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Enter password")
        .allow_empty_password(true)
        .interact()
        .map_err(|e| IncognitoError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for a new password with confirmation.
///
/// Respects `env_var` for scripted usage and enforces `min_len`.
pub fn prompt_new_password(env_var: &str, min_len: usize) -> Result<Zeroizing<String>> {
    if let Some(pw) = password_from_env(env_var) {
        check_password_len(&pw, min_len)?;
        return Ok(pw);
    }

    loop {
        let password = Zeroizing::new(
            dialoguer::Password::new()
                .with_prompt("Choose password")
                .with_confirmation("Confirm password", "Passwords do not match, try again")
                .interact()
                .map_err(|e| IncognitoError::CommandFailed(format!("password prompt: {e}")))?,
        );

        if let Err(e) = check_password_len(&password, min_len) {
            output::warning(&format!("{e}. Try again."));
            continue;
        }

        return Ok(password);
    }
}

/// Reject passwords shorter than `min_len` characters.
pub fn check_password_len(password: &str, min_len: usize) -> Result<()> {
    if password.chars().count() < min_len {
        return Err(IncognitoError::CommandFailed(format!(
            "password must be at least {min_len} characters"
        )));
    }
    Ok(())
}

fn password_from_env(var: &str) -> Option<Zeroizing<String>> {
    std::env::var(var)
        .ok()
        .filter(|pw| !pw.is_empty())
        .map(Zeroizing::new)
}

/// Read the JSON input from a file, or from stdin when `path` is `None`.
pub fn read_input(path: Option<&Path>) -> Result<Zeroizing<Vec<u8>>> {
    let mut buf = Zeroizing::new(Vec::new());
    match path {
        Some(path) => {
            let mut file = std::fs::File::open(path)?;
            file.read_to_end(&mut buf)?;
        }
        None => {
            std::io::stdin().lock().read_to_end(&mut buf)?;
        }
    }
    Ok(buf)
}

/// Check that `bytes` is one well-formed JSON document.
pub fn validate_json(bytes: &[u8]) -> Result<()> {
    serde_json::from_slice::<serde::de::IgnoredAny>(bytes)
        .map(|_| ())
        .map_err(|e| IncognitoError::InvalidJson(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_length_is_counted_in_characters() {
        assert!(check_password_len("correct horse", 8).is_ok());
        assert!(check_password_len("short", 8).is_err());
        // Eight characters, sixteen bytes.
        assert!(check_password_len("ääääääää", 8).is_ok());
    }

    #[test]
    fn zero_min_len_accepts_anything() {
        assert!(check_password_len("", 0).is_ok());
    }

    #[test]
    fn valid_json_documents() {
        assert!(validate_json(b"{}").is_ok());
        assert!(validate_json(b"{\"a\":[1,2,{\"b\":null}]}").is_ok());
        assert!(validate_json(b"  [1, 2]\n").is_ok());
        assert!(validate_json(b"\"just a string\"").is_ok());
    }

    #[test]
    fn invalid_json_documents() {
        assert!(matches!(
            validate_json(b"{"),
            Err(IncognitoError::InvalidJson(_))
        ));
        assert!(validate_json(b"").is_err());
        assert!(validate_json(b"{} {}").is_err());
        assert!(validate_json(b"KEY=value").is_err());
    }

    #[test]
    fn read_input_from_file() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), b"{\"k\":1}").unwrap();
        let bytes = read_input(Some(tmp.path())).unwrap();
        assert_eq!(bytes.as_slice(), b"{\"k\":1}");
    }

    #[test]
    fn read_input_missing_file_is_io_error() {
        let err = read_input(Some(Path::new("/definitely/not/here.json"))).unwrap_err();
        assert!(matches!(err, IncognitoError::Io(_)));
    }
}
