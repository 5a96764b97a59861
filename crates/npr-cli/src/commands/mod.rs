//! Mode selection and handler modules.

mod interactive;
mod run;
mod usage;

use std::io::IsTerminal;
use std::path::Path;

use miette::Result;
use npr_core::args::parse_command_line;
use npr_core::config::Config;
use npr_core::manifest::Manifest;
use npr_core::workspace::{self, WorkspaceSet};
use npr_util::errors::NprError;
use npr_util::progress;

use crate::cli::Cli;

/// Resolved settings shared by every mode.
pub struct RunSettings {
    pub program: String,
    pub echo: bool,
}

/// Route a parsed CLI invocation to the appropriate mode.
///
/// Tokens on the command line run directly without reading `package.json`.
/// With no tokens, a terminal gets the interactive prompts and anything else
/// gets the usage listing.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let command_line = parse_command_line(&cli.tokens);
    // `--package-manager` after a workspace flag reaches us as a raw token
    // and wins over the clap flag and the environment.
    let override_pm = command_line
        .package_manager
        .as_deref()
        .or(cli.package_manager.as_deref());
    let settings = RunSettings {
        program: config.resolve_package_manager(override_pm),
        echo: config.echo,
    };

    if !cli.tokens.is_empty() {
        return run::exec(&command_line.invocation, &settings);
    }

    let cwd = std::env::current_dir().map_err(NprError::Io)?;
    if std::io::stdin().is_terminal() && console::user_attended_stderr() {
        interactive::exec(&cwd, &settings)
    } else {
        usage::exec(&cwd)
    }
}

/// Load the root manifest and its workspaces from `dir`.
fn load_project(dir: &Path) -> Result<(Manifest, WorkspaceSet)> {
    let root = Manifest::from_dir(dir)?;
    let workspaces = workspace::discover(dir, &root)?;
    if !workspaces.is_empty() {
        progress::status_info("Workspaces", &format!("found {}", workspaces.len()));
    }
    for pattern in workspaces.unmatched_patterns() {
        progress::status_warn(
            "Warning",
            &format!("workspace pattern '{pattern}' matched no directories"),
        );
    }
    Ok((root, workspaces))
}
