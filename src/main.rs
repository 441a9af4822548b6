use clap::Parser;
use incognito::cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

/// Environment variable controlling diagnostic logging (e.g. `debug`).
const LOG_ENV: &str = "INCOGNITO_LOG";

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Seal { ref input, force } => {
            incognito::cli::commands::seal::execute(&cli, input.as_deref(), force)
        }
        Commands::Open { ref output, raw } => {
            incognito::cli::commands::open::execute(&cli, output.as_deref(), raw)
        }
        Commands::Passwd => incognito::cli::commands::passwd::execute(&cli),
        Commands::Inspect => incognito::cli::commands::inspect::execute(&cli),
        Commands::Version => incognito::cli::commands::version::execute(),
        Commands::Completions { ref shell } => {
            incognito::cli::commands::completions::execute(shell)
        }
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        incognito::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
