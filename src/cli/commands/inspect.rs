//! `incognito inspect`: show the outer structure of an encrypted file.
//!
//! Needs no password and reveals nothing that isn't already visible on
//! disk: every valid file has the same size and the same three sections.

use crate::cli::{output, resolve_blob_path, Cli};
use crate::envelope::{BlobLayout, Format};
use crate::errors::{IncognitoError, Result};
use crate::store;

/// Execute the `inspect` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let (_, path) = resolve_blob_path(cli)?;
    let blob = store::read_blob(&path)?;

    let layout = BlobLayout::parse(&blob).ok_or_else(|| {
        IncognitoError::CommandFailed(format!(
            "{} is {} bytes, too small to be an encrypted file",
            path.display(),
            blob.len()
        ))
    })?;

    output::info(&path.display().to_string());
    output::print_layout_table(&layout);

    if layout.is_canonical() {
        output::success("Size matches the fixed envelope; payload size is hidden");
    } else {
        output::warning(&format!(
            "Unexpected size: {} bytes (expected {}). The file is truncated or not an encrypted file.",
            layout.total_len(),
            Format::CURRENT.blob_len()
        ));
    }
    output::tip("Only `incognito open` with the right password can verify the contents.");

    Ok(())
}
