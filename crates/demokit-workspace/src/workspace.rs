// workspace.rs — Per-test scratch workspace on disk.
//
// A Workspace is a directory derived from the source file that created it
// and an optional name:
//
//   <dir of caller>/__demos__/<caller file stem>/<encoded name>/
//
// Key design:
// - The path is a pure function of (caller file, name), so re-running a
//   test reuses the same directory
// - Creation is idempotent; existing files are overwritten, never removed
// - A `.gitignore` containing `*` keeps the output out of version control
// - Writes are synchronous and happen only after content rendering succeeds

use std::collections::BTreeMap;
use std::fs;
use std::path::{Component, Path, PathBuf};

use demokit_caller::resolve_caller_file;

use crate::content::{ContentType, FileContent};
use crate::encode::encode_name;
use crate::error::WorkspaceError;
use crate::options::WorkspaceOptions;

/// Directory created beside the caller file to hold all its workspaces.
pub const DEMOS_DIR: &str = "__demos__";

/// Placeholder written at the workspace root when `apply_git_ignore` is set.
pub const GITIGNORE_FILE: &str = ".gitignore";

const GITIGNORE_CONTENT: &str = "*";

/// Compute the workspace directory for a caller file and workspace name.
///
/// Does not touch the filesystem. Equal inputs always give equal paths.
/// An empty `workspace_name` encodes to an empty segment, so its directory is
/// `__demos__/<stem>/` itself and every named workspace of the same caller
/// sits inside it (under its `.gitignore`, if one was written).
pub fn workspace_dir(caller_file: &Path, workspace_name: &str) -> PathBuf {
    let parent = caller_file.parent().unwrap_or_else(|| Path::new(""));
    parent
        .join(DEMOS_DIR)
        .join(caller_file.file_stem().unwrap_or_default())
        .join(encode_name(workspace_name))
}

/// Create (or reuse) the workspace for the calling source file.
///
/// The caller is resolved from the call site unless
/// [`WorkspaceOptions::caller_file`] is set.
#[track_caller]
pub fn create_workspace(options: WorkspaceOptions) -> Result<Workspace, WorkspaceError> {
    let caller_file = match &options.caller_file {
        Some(path) => absolute_caller_file(path)?,
        None => resolve_caller_file()?,
    };
    Workspace::open(&caller_file, &options)
}

fn absolute_caller_file(path: &Path) -> Result<PathBuf, WorkspaceError> {
    std::path::absolute(path).map_err(|source| WorkspaceError::IoError {
        path: path.to_path_buf(),
        source,
    })
}

/// A scratch directory owned by one test context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    /// Absolute workspace directory.
    cwd: PathBuf,
}

/// A file written into a workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoFile {
    location: PathBuf,
    content_type: ContentType,
}

impl DemoFile {
    /// Absolute path of the written file.
    pub fn location(&self) -> &Path {
        &self.location
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    pub fn into_location(self) -> PathBuf {
        self.location
    }
}

impl Workspace {
    /// Workspace with default options for the calling source file.
    #[track_caller]
    pub fn create() -> Result<Self, WorkspaceError> {
        create_workspace(WorkspaceOptions::default())
    }

    /// Workspace with the given name for the calling source file.
    #[track_caller]
    pub fn named(name: &str) -> Result<Self, WorkspaceError> {
        create_workspace(WorkspaceOptions::named(name))
    }

    fn open(caller_file: &Path, options: &WorkspaceOptions) -> Result<Self, WorkspaceError> {
        let cwd = workspace_dir(caller_file, &options.workspace_name);
        fs::create_dir_all(&cwd).map_err(|source| WorkspaceError::IoError {
            path: cwd.clone(),
            source,
        })?;

        let workspace = Self { cwd };
        if options.apply_git_ignore {
            workspace.file(GITIGNORE_FILE, GITIGNORE_CONTENT)?;
        }

        tracing::debug!(
            cwd = %workspace.cwd.display(),
            caller = %caller_file.display(),
            git_ignore = options.apply_git_ignore,
            "workspace ready"
        );
        Ok(workspace)
    }

    /// The workspace directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Write one file, creating missing parent directories.
    ///
    /// Existing content at the same path is overwritten. Nothing is written
    /// if the content fails to render (e.g. an indentation mismatch).
    pub fn file(
        &self,
        relative_path: &str,
        content: impl Into<FileContent>,
    ) -> Result<DemoFile, WorkspaceError> {
        let content = content.into();
        let location = self.resolve_path(relative_path)?;
        let rendered = content.render()?;

        if let Some(parent) = location.parent() {
            fs::create_dir_all(parent).map_err(|source| WorkspaceError::IoError {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(&location, rendered.as_bytes()).map_err(|source| WorkspaceError::IoError {
            path: location.clone(),
            source,
        })?;

        tracing::debug!(
            path = %location.display(),
            content_type = ?content.content_type(),
            bytes = rendered.len(),
            "wrote workspace file"
        );

        Ok(DemoFile {
            location,
            content_type: content.content_type(),
        })
    }

    /// Write every entry and return each key's written location.
    pub fn make_tree<I, K, C>(
        &self,
        entries: I,
    ) -> Result<BTreeMap<String, PathBuf>, WorkspaceError>
    where
        I: IntoIterator<Item = (K, C)>,
        K: Into<String>,
        C: Into<FileContent>,
    {
        let mut written = BTreeMap::new();
        for (relative_path, content) in entries {
            let relative_path = relative_path.into();
            let file = self.file(&relative_path, content)?;
            written.insert(relative_path, file.into_location());
        }
        Ok(written)
    }

    /// Resolve a relative path to an absolute path within the workspace.
    /// Rejects absolute paths and `..` components.
    fn resolve_path(&self, relative_path: &str) -> Result<PathBuf, WorkspaceError> {
        let escapes = Path::new(relative_path).components().any(|component| {
            matches!(
                component,
                Component::ParentDir | Component::RootDir | Component::Prefix(_)
            )
        });
        if escapes {
            return Err(WorkspaceError::PathTraversal {
                path: relative_path.to_string(),
            });
        }

        Ok(self.cwd.join(relative_path))
    }
}

impl AsRef<Path> for Workspace {
    fn as_ref(&self) -> &Path {
        &self.cwd
    }
}
