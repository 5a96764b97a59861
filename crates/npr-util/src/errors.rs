use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all npr operations.
#[derive(Debug, Error, Diagnostic)]
pub enum NprError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No `package.json` at the expected location.
    #[error("package.json not found: {}", .path.display())]
    #[diagnostic(help("Run npr from a directory containing a package.json"))]
    ManifestNotFound { path: PathBuf },

    /// The manifest exists but could not be read.
    #[error("Error reading {}: {message}", .path.display())]
    ManifestRead { path: PathBuf, message: String },

    /// The manifest is not valid JSON or has the wrong shape.
    #[error("Error parsing {}: {message}", .path.display())]
    #[diagnostic(help("Check the file for JSON syntax errors"))]
    ManifestParse { path: PathBuf, message: String },

    /// Two workspace directories declare the same package name.
    #[error("Duplicate workspace name '{name}' in {} and {}", .first.display(), .second.display())]
    #[diagnostic(help("Workspace package names must be unique"))]
    DuplicateWorkspaceName {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// A `workspaces` glob pattern could not be compiled.
    #[error("Invalid workspace pattern '{pattern}': {message}")]
    InvalidWorkspacePattern { pattern: String, message: String },

    /// No script is available to choose from.
    #[error("No common scripts found")]
    #[diagnostic(help(
        "Every selected workspace must define a script with the same name"
    ))]
    EmptyScriptSelection,

    /// No script name was given.
    #[error("No script specified")]
    #[diagnostic(help("Usage: npr [-w <name>|--workspace=<name,...>]... <script> [<args>...]"))]
    MissingScript,

    /// A quoted span in free-text arguments was never closed.
    #[error("Unmatched quote: {quote}")]
    UnmatchedQuote { quote: char },

    /// Interactive prompt failed or was cancelled.
    #[error("Prompt error: {message}")]
    Prompt { message: String },

    /// The package manager could not be started or did not succeed.
    #[error("{program}: {message}")]
    ChildProcess { program: String, message: String },

    /// User configuration could not be loaded.
    #[error("Config error: {message}")]
    #[diagnostic(help("Check ~/.npr/config.toml for syntax errors"))]
    Config { message: String },
}
