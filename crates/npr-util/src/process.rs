use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use crate::errors::NprError;

/// Builder for constructing and executing external processes.
///
/// The child shares the parent's standard streams, so interactive scripts
/// behave as if they had been started directly from the shell.
pub struct CommandBuilder {
    program: String,
    args: Vec<String>,
    cwd: Option<PathBuf>,
}

impl CommandBuilder {
    /// Create a new builder for the given program.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    /// Append multiple arguments.
    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set the working directory for the child process.
    pub fn cwd(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    /// The program this builder will launch.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Spawn the command with inherited stdio and wait for it to exit.
    pub fn status(&self) -> Result<ExitStatus, NprError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(ref dir) = self.cwd {
            cmd.current_dir(dir);
        }

        tracing::debug!(program = %self.program, args = ?self.args, "spawning");
        cmd.status().map_err(|e| NprError::ChildProcess {
            program: self.program.clone(),
            message: format!("failed to start: {e}"),
        })
    }
}

/// Map a child's exit status onto success or a [`NprError::ChildProcess`].
///
/// The child's own code is reported in the message but not forwarded; the
/// caller exits with a generic failure status.
pub fn check_status(program: &str, status: ExitStatus) -> Result<(), NprError> {
    if status.success() {
        return Ok(());
    }
    let message = match status.code() {
        Some(code) => format!("exited with status {code}"),
        None => "terminated by signal".to_string(),
    };
    Err(NprError::ChildProcess {
        program: program.to_string(),
        message,
    })
}
