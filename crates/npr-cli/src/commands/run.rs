//! Launch the package manager for a finished invocation.

use miette::Result;
use npr_core::invocation::Invocation;
use npr_util::errors::NprError;
use npr_util::process::{check_status, CommandBuilder};
use npr_util::progress;

use super::RunSettings;

pub fn exec(invocation: &Invocation, settings: &RunSettings) -> Result<()> {
    let args = invocation.to_args()?;
    if settings.echo {
        progress::status("Running", &invocation.display_command(&settings.program)?);
    }

    let cwd = std::env::current_dir().map_err(NprError::Io)?;
    let command = CommandBuilder::new(&settings.program).args(args).cwd(&cwd);
    let status = command.status()?;
    check_status(command.program(), status)?;
    Ok(())
}
