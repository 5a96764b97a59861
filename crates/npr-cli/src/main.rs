//! npr CLI binary.
//!
//! This is the entry point for the `npr` command-line tool. It initializes
//! logging via `tracing`, parses arguments with `clap`, and dispatches to
//! the direct, interactive or usage mode.

mod cli;
mod commands;
mod prompt;

use miette::Result;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse();
    commands::dispatch(args)
}
