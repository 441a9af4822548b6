//! `incognito open`: decrypt a file and print its JSON.

use std::io::{self, Write};
use std::path::Path;

use zeroize::Zeroizing;

use crate::cli::{output, prompt_password, resolve_blob_path, Cli};
use crate::envelope;
use crate::errors::{IncognitoError, Result};
use crate::store;

/// Execute the `open` command.
pub fn execute(cli: &Cli, output_path: Option<&Path>, raw: bool) -> Result<()> {
    let (settings, path) = resolve_blob_path(cli)?;
    let blob = store::read_blob(&path)?;

    let password = prompt_password()?;
    let json = Zeroizing::new(envelope::decode(&blob, password.as_bytes())?);

    let rendered = if raw || !settings.pretty_json {
        json
    } else {
        pretty_print(&json)?
    };

    match output_path {
        Some(out) => {
            store::write_blob(out, &rendered, true)?;
            output::success(&format!("Decrypted JSON written to {}", out.display()));
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&rendered)?;
            if !raw {
                stdout.write_all(b"\n")?;
            }
            stdout.flush()?;
        }
    }

    Ok(())
}

/// Re-indent a JSON document. Key order and number text are kept as
/// stored (serde_json `preserve_order` and `arbitrary_precision`).
/// Stored payloads that are not JSON are returned unchanged.
fn pretty_print(json: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
    let Ok(value) = serde_json::from_slice::<serde_json::Value>(json) else {
        return Ok(Zeroizing::new(json.to_vec()));
    };

    serde_json::to_vec_pretty(&value)
        .map(Zeroizing::new)
        .map_err(|e| IncognitoError::SerializationError(e.to_string()))
}
