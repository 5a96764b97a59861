use std::path::Path;

use miette::Result;
use npr_core::interactive::collect;

use super::{load_project, run, RunSettings};
use crate::prompt::DialoguerPrompter;

pub fn exec(cwd: &Path, settings: &RunSettings) -> Result<()> {
    let (root, workspaces) = load_project(cwd)?;
    let invocation = collect(&root, &workspaces, &mut DialoguerPrompter)?;
    run::exec(&invocation, settings)
}
