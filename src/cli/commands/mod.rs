//! One module per subcommand, each exposing an `execute` function.

pub mod completions;
pub mod inspect;
pub mod open;
pub mod passwd;
pub mod seal;
pub mod version;
