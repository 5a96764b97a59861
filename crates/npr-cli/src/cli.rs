//! CLI argument definitions for npr.
//!
//! `clap` only handles the options that must come first; everything else is
//! collected verbatim and interpreted by [`npr_core::args::parse_tokens`].

use clap::Parser;

pub const USAGE: &str = "npr [-w <name>|--workspace=<name,...>]... [<script>] [<args>...]";

#[derive(Parser, Debug)]
#[command(
    name = "npr",
    version,
    about = "Run package.json scripts quickly",
    long_about = "Runs `npm run <script> -- <args>`, optionally scoped to workspaces. \
                  Without arguments, prompts for the workspaces, script and arguments.",
    override_usage = USAGE
)]
pub struct Cli {
    /// Package manager executable to run instead of npm
    #[arg(long, env = "NPR_PACKAGE_MANAGER", value_name = "BIN")]
    pub package_manager: Option<String>,

    /// Workspace flags, the script name, then arguments for the script
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "ARGS"
    )]
    pub tokens: Vec<String>,
}

pub fn parse() -> Cli {
    Cli::parse()
}
