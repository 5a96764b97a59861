//! Usage listing for non-interactive runs without arguments.

use std::path::Path;

use miette::Result;

use super::load_project;
use crate::cli::USAGE;

pub fn exec(cwd: &Path) -> Result<()> {
    let (root, workspaces) = load_project(cwd)?;

    println!("Usage: {USAGE}");

    println!();
    if root.scripts.is_empty() {
        println!("No scripts defined.");
    } else {
        println!("Scripts:");
        let width = root.scripts.keys().map(String::len).max().unwrap_or(0);
        for (name, command) in &root.scripts {
            println!("  {name:<width$}  {command}");
        }
    }

    if !workspaces.is_empty() {
        println!();
        println!("Workspaces:");
        let names = workspaces.names();
        let width = names.iter().map(String::len).max().unwrap_or(0);
        for name in &names {
            if let Some(ws) = workspaces.get(name) {
                println!("  {name:<width$}  {}", ws.dir.display());
            }
        }
    }

    Ok(())
}
