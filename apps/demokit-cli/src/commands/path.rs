// path.rs — Print the workspace directory for a caller file.
//
// Pure computation: nothing is created on disk.

use std::path::{Path, PathBuf};

use anyhow::Context;
use demokit_workspace::{workspace_dir, WorkspaceOptions};

pub fn execute(caller: &Path, name: Option<&str>) -> anyhow::Result<()> {
    let dir = resolve(caller, name)?;
    println!("{}", dir.display());
    Ok(())
}

/// Absolute workspace directory for `caller`, using the default name when
/// none is given.
pub fn resolve(caller: &Path, name: Option<&str>) -> anyhow::Result<PathBuf> {
    let caller = std::path::absolute(caller)
        .with_context(|| format!("cannot make {} absolute", caller.display()))?;
    let name = name
        .map(String::from)
        .unwrap_or_else(|| WorkspaceOptions::default().workspace_name);
    Ok(workspace_dir(&caller, &name))
}
