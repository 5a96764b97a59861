//! Building an [`Invocation`] from interactive answers.

use npr_util::errors::NprError;

use crate::invocation::Invocation;
use crate::manifest::Manifest;
use crate::split::split_arguments;
use crate::workspace::{candidate_scripts, WorkspaceSet};

/// The questions npr asks when started without arguments.
///
/// Implementations return indices into the option slices they are given.
pub trait Prompter {
    /// Pick any number of workspaces. Only asked when the project has some.
    fn select_workspaces(&mut self, options: &[String]) -> Result<Vec<usize>, NprError>;

    /// Pick exactly one script from a non-empty list.
    fn select_script(&mut self, options: &[String]) -> Result<usize, NprError>;

    /// Free-text arguments for the script; may be empty.
    fn input_arguments(&mut self) -> Result<String, NprError>;
}

/// Ask for workspaces, a script and its arguments.
///
/// Fails with [`NprError::EmptyScriptSelection`] before the script prompt
/// when there is nothing to choose from.
pub fn collect<P: Prompter>(
    root: &Manifest,
    workspaces: &WorkspaceSet,
    prompter: &mut P,
) -> miette::Result<Invocation> {
    let mut picked_names: Vec<String> = Vec::new();
    if !workspaces.is_empty() {
        let names = workspaces.names();
        let picked = prompter.select_workspaces(&names)?;
        picked_names.extend(picked.iter().filter_map(|&i| names.get(i).cloned()));
    }

    let selected = workspaces.manifests(&picked_names);
    let scripts = candidate_scripts(root, &selected);
    if scripts.is_empty() {
        return Err(NprError::EmptyScriptSelection.into());
    }

    let choice = prompter.select_script(&scripts)?;
    let script = scripts.get(choice).ok_or_else(|| NprError::Prompt {
        message: format!("script selection {choice} out of range"),
    })?;

    let mut invocation = Invocation::new(script.as_str());
    invocation.add_workspaces(&picked_names);
    let text = prompter.input_arguments()?;
    invocation.arguments = split_arguments(&text)?;

    tracing::debug!(?invocation, "collected interactively");
    Ok(invocation)
}
