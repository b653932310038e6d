// tree.rs — Populate a workspace from a JSON manifest.
//
// The manifest is a JSON object whose keys are paths relative to the
// workspace and whose values are either a string (text content) or an
// option set:
//
//   {
//     "README.md": "# Sample",
//     "src/configs.json": { "contentType": "json", "body": { "foo": "baz" } }
//   }
//
// Options come from `--config` (TOML) first; command-line flags override.
// The written locations are printed to stdout as a JSON object.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use demokit_workspace::{create_workspace, FileContent, WorkspaceOptions};

pub fn execute(
    caller: &Path,
    name: Option<&str>,
    no_gitignore: bool,
    config: Option<&Path>,
    manifest: &Path,
) -> anyhow::Result<()> {
    let options = build_options(caller, name, no_gitignore, config)?;
    let written = materialize(options, manifest)?;
    println!("{}", serde_json::to_string_pretty(&written)?);
    Ok(())
}

/// Merge the options file (if any) with command-line flags.
pub fn build_options(
    caller: &Path,
    name: Option<&str>,
    no_gitignore: bool,
    config: Option<&Path>,
) -> anyhow::Result<WorkspaceOptions> {
    let mut options = match config {
        Some(path) => WorkspaceOptions::load(path)?,
        None => WorkspaceOptions::default(),
    };
    if let Some(name) = name {
        options.workspace_name = name.to_string();
    }
    if no_gitignore {
        options.apply_git_ignore = false;
    }
    Ok(options.with_caller_file(caller))
}

/// Create the workspace and write every manifest entry into it.
pub fn materialize(
    options: WorkspaceOptions,
    manifest: &Path,
) -> anyhow::Result<BTreeMap<String, PathBuf>> {
    let raw = fs::read_to_string(manifest)
        .with_context(|| format!("failed to read manifest {}", manifest.display()))?;
    let entries: BTreeMap<String, FileContent> = serde_json::from_str(&raw)
        .with_context(|| format!("invalid manifest {}", manifest.display()))?;

    let workspace = create_workspace(options)?;
    tracing::info!(
        cwd = %workspace.cwd().display(),
        files = entries.len(),
        "writing manifest"
    );
    Ok(workspace.make_tree(entries)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_manifest(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("manifest.json");
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn materialize_writes_manifest_entries() {
        let dir = tempdir().unwrap();
        let manifest = write_manifest(
            dir.path(),
            r##"{
                "README.md": "# Sample",
                "src/index.ts": "console.log('Ok')",
                "src/configs.json": { "contentType": "json", "body": { "foo": "baz" } }
            }"##,
        );
        let options = build_options(&dir.path().join("cli.rs"), Some("manifest"), false, None)
            .unwrap();

        let written = materialize(options, &manifest).unwrap();

        assert_eq!(written.len(), 3);
        assert!(written.values().all(|path| path.is_file()));
        assert_eq!(
            fs::read_to_string(&written["src/configs.json"]).unwrap(),
            "{\n  \"foo\": \"baz\"\n}"
        );
        let cwd = dir.path().join("__demos__").join("cli").join("manifest");
        assert_eq!(fs::read_to_string(cwd.join(".gitignore")).unwrap(), "*");
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("demokit.toml");
        fs::write(&config, "workspace_name = \"from config\"\napply_git_ignore = true\n").unwrap();

        let from_file = build_options(Path::new("cli.rs"), None, false, Some(&config)).unwrap();
        assert_eq!(from_file.workspace_name, "from config");
        assert!(from_file.apply_git_ignore);

        let overridden =
            build_options(Path::new("cli.rs"), Some("flag"), true, Some(&config)).unwrap();
        assert_eq!(overridden.workspace_name, "flag");
        assert!(!overridden.apply_git_ignore);
        assert_eq!(overridden.caller_file.as_deref(), Some(Path::new("cli.rs")));
    }

    #[test]
    fn invalid_manifest_creates_nothing() {
        let dir = tempdir().unwrap();
        let manifest = write_manifest(
            dir.path(),
            r#"{ "a.txt": { "contentType": "text", "body": 1 } }"#,
        );
        let options = build_options(&dir.path().join("cli.rs"), None, false, None).unwrap();

        assert!(materialize(options, &manifest).is_err());
        assert!(!dir.path().join("__demos__").exists());
    }
}
