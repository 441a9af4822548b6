//! `incognito seal`: encrypt a JSON document into a fixed-size file.

use crate::cli::{
    output, prompt_new_password, read_input, resolve_blob_path, validate_json, Cli,
    PASSWORD_ENV,
};
use crate::envelope::{self, Format};
use crate::errors::{IncognitoError, Result};
use crate::store;

/// Execute the `seal` command.
pub fn execute(cli: &Cli, input: Option<&std::path::Path>, force: bool) -> Result<()> {
    let (settings, path) = resolve_blob_path(cli)?;

    // Fail fast on anything we can check before asking for a password.
    if !force && path.exists() {
        return Err(IncognitoError::BlobAlreadyExists(path));
    }

    let json = read_input(input)?;
    validate_json(&json)?;

    let max = Format::CURRENT.max_payload_len();
    if json.len() > max {
        return Err(IncognitoError::PayloadTooLarge {
            len: json.len(),
            max,
        });
    }

    let password = prompt_new_password(PASSWORD_ENV, settings.min_password_len)?;
    let blob = envelope::encode(&json, password.as_bytes())?;
    store::write_blob(&path, &blob, force)?;

    output::success(&format!("Encrypted JSON into {}", path.display()));
    output::tip("Run `incognito open` to read it back.");
    Ok(())
}
