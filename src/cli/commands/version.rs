//! `incognito version`: display version and format information.

use console::style;

use crate::envelope::Format;
use crate::errors::Result;

/// Execute the `version` command.
pub fn execute() -> Result<()> {
    let current = env!("CARGO_PKG_VERSION");
    println!("incognito {current}");

    let format = Format::CURRENT;
    println!(
        "{} format {} ({} byte files, up to {} bytes of JSON)",
        style("Writes").dim(),
        style(format.name).cyan(),
        format.blob_len(),
        format.max_payload_len()
    );

    let readable: Vec<&str> = Format::KNOWN.iter().map(|f| f.name).collect();
    println!("{} {}", style("Reads").dim(), readable.join(", "));

    Ok(())
}
