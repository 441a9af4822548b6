//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::envelope::{BlobLayout, SALT_LEN};

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print the section table of a blob (Section, Offset, Size).
pub fn print_layout_table(layout: &BlobLayout<'_>) {
    let nonce_offset = SALT_LEN;
    let ciphertext_offset = nonce_offset + layout.nonce.len();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Section", "Offset", "Size"]);
    table.add_row(vec![
        "salt".to_string(),
        "0".to_string(),
        layout.salt.len().to_string(),
    ]);
    table.add_row(vec![
        "nonce".to_string(),
        nonce_offset.to_string(),
        layout.nonce.len().to_string(),
    ]);
    table.add_row(vec![
        "ciphertext + tag".to_string(),
        ciphertext_offset.to_string(),
        layout.ciphertext.len().to_string(),
    ]);
    table.add_row(vec![
        "total".to_string(),
        String::new(),
        layout.total_len().to_string(),
    ]);

    println!("{table}");
}
