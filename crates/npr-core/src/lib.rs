//! Core logic for npr.
//!
//! Turns either command-line tokens or answers to an interactive prompt into
//! an [`invocation::Invocation`], and renders that into the argument vector
//! for the package manager's `run` subcommand. Also loads `package.json`
//! manifests and discovers workspace packages.
//!
//! This crate never spawns processes and never touches the terminal directly;
//! the interactive prompts are reached through [`interactive::Prompter`].

/// Name of the manifest file read from the project and each workspace.
pub const MANIFEST_FILE: &str = "package.json";

/// Package manager used when nothing else is configured.
pub const DEFAULT_PACKAGE_MANAGER: &str = "npm";

pub mod args;
pub mod config;
pub mod interactive;
pub mod invocation;
pub mod manifest;
pub mod split;
pub mod workspace;
