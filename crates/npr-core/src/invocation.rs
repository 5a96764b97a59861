//! The normalized description of one `run` invocation.
//!
//! Both the command-line path and the interactive path produce an
//! [`Invocation`]; [`Invocation::to_args`] turns it into the argument vector
//! handed to the package manager.

use npr_util::errors::NprError;

/// What to run: a script, where to run it, and what to forward to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    pub script: String,
    /// Forwarded to the script after a `--` separator, in order.
    pub arguments: Vec<String>,
    /// Each becomes a `--workspace=<name>` flag.
    pub workspaces: Vec<String>,
}

impl Invocation {
    pub fn new(script: impl Into<String>) -> Self {
        Self {
            script: script.into(),
            ..Default::default()
        }
    }

    /// Append workspace names, trimming whitespace and dropping empty entries.
    pub fn add_workspaces<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            let name = name.as_ref().trim();
            if !name.is_empty() {
                self.workspaces.push(name.to_string());
            }
        }
    }

    /// Render the argument vector for the package manager:
    /// `run <script> [--workspace=<name>]... [-- <arguments>...]`.
    pub fn to_args(&self) -> Result<Vec<String>, NprError> {
        if self.script.is_empty() {
            return Err(NprError::MissingScript);
        }

        let mut args = vec!["run".to_string(), self.script.clone()];
        for name in &self.workspaces {
            let name = name.trim();
            if !name.is_empty() {
                args.push(format!("--workspace={name}"));
            }
        }
        if !self.arguments.is_empty() {
            args.push("--".to_string());
            args.extend(self.arguments.iter().cloned());
        }
        Ok(args)
    }

    /// The full command line as a user would type it, for display only.
    pub fn display_command(&self, program: &str) -> Result<String, NprError> {
        let mut parts = vec![quote_for_display(program)];
        parts.extend(self.to_args()?.iter().map(|a| quote_for_display(a)));
        Ok(parts.join(" "))
    }
}

fn quote_for_display(token: &str) -> String {
    if token.is_empty() || token.chars().any(char::is_whitespace) {
        format!("\"{}\"", token.replace('"', "\\\""))
    } else {
        token.to_string()
    }
}
