//! `incognito passwd`: change the password of an encrypted file.

use crate::cli::{
    output, prompt_new_password, prompt_password, resolve_blob_path, Cli, NEW_PASSWORD_ENV,
};
use crate::envelope;
use crate::errors::Result;
use crate::store;

/// Execute the `passwd` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let (settings, path) = resolve_blob_path(cli)?;
    let blob = store::read_blob(&path)?;

    let old_password = prompt_password()?;
    // Check the current password before asking for a new one.
    let json = zeroize::Zeroizing::new(envelope::decode(&blob, old_password.as_bytes())?);

    let new_password = prompt_new_password(NEW_PASSWORD_ENV, settings.min_password_len)?;
    let resealed = envelope::encode(&json, new_password.as_bytes())?;
    store::write_blob(&path, &resealed, true)?;

    output::success(&format!("Password changed for {}", path.display()));
    Ok(())
}
