//! Command-line token parsing.
//!
//! Wrapper flags are only honoured before the script name. Anything after
//! the script belongs to the script, including tokens that look like our own
//! flags.

use crate::invocation::Invocation;

/// A recognised wrapper flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WrapperFlag<'a> {
    /// `-w` or `--workspace`: the next token is a workspace name.
    Workspace,
    /// `-w=<list>` or `--workspace=<list>`.
    WorkspaceList(&'a str),
    /// `--package-manager`: the next token is the executable.
    PackageManager,
    /// `--package-manager=<bin>`.
    PackageManagerValue(&'a str),
}

impl<'a> WrapperFlag<'a> {
    fn parse(token: &'a str) -> Option<Self> {
        match token {
            "-w" | "--workspace" => Some(Self::Workspace),
            "--package-manager" => Some(Self::PackageManager),
            _ => {
                if let Some(bin) = token.strip_prefix("--package-manager=") {
                    return Some(Self::PackageManagerValue(bin));
                }
                token
                    .strip_prefix("-w=")
                    .or_else(|| token.strip_prefix("--workspace="))
                    .map(Self::WorkspaceList)
            }
        }
    }
}

/// Which flag is waiting for its value in the next token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Workspace,
    PackageManager,
}

/// Everything the command line asked for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandLine {
    pub invocation: Invocation,
    /// Set by `--package-manager` before the script.
    pub package_manager: Option<String>,
}

/// Parse the tokens following the program name into a [`CommandLine`].
///
/// The first token that is not a flag becomes the script; later tokens are
/// passed through in order. Unrecognised flags written before the script are
/// not given to the package manager: they are forwarded to the script after
/// `--`, ahead of the tokens that follow the script. An empty script means no
/// script was given, which [`Invocation::to_args`] rejects.
pub fn parse_command_line<I, S>(tokens: I) -> CommandLine
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parsed = CommandLine::default();
    let invocation = &mut parsed.invocation;
    let mut found_script = false;
    let mut pending: Option<Pending> = None;

    for raw in tokens {
        let token = raw.as_ref().trim();
        if token.is_empty() {
            continue;
        }

        if found_script {
            invocation.arguments.push(token.to_string());
            continue;
        }

        if let Some(flag) = WrapperFlag::parse(token) {
            pending = match flag {
                WrapperFlag::Workspace => Some(Pending::Workspace),
                WrapperFlag::PackageManager => Some(Pending::PackageManager),
                WrapperFlag::WorkspaceList(list) => {
                    invocation.add_workspaces(list.split(','));
                    None
                }
                WrapperFlag::PackageManagerValue(bin) => {
                    parsed.package_manager = non_empty(bin);
                    None
                }
            };
            continue;
        }

        match pending.take() {
            Some(Pending::Workspace) => {
                invocation.add_workspaces([token]);
                continue;
            }
            Some(Pending::PackageManager) => {
                parsed.package_manager = non_empty(token);
                continue;
            }
            None => {}
        }

        if is_flag(token) {
            tracing::trace!(token, "passing through unrecognised flag");
            invocation.arguments.push(token.to_string());
            continue;
        }

        invocation.script = token.to_string();
        found_script = true;
    }

    if let Some(flag) = pending {
        tracing::warn!(?flag, "flag given without a value");
    }
    tracing::debug!(?parsed, "parsed command line");
    parsed
}

/// Like [`parse_command_line`] but keeps only the [`Invocation`].
pub fn parse_tokens<I, S>(tokens: I) -> Invocation
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parse_command_line(tokens).invocation
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn is_flag(token: &str) -> bool {
    token.len() > 1 && token.starts_with('-')
}
