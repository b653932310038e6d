//! Workspace creation options

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::WorkspaceError;

/// Options for [`create_workspace`](crate::create_workspace).
///
/// Can be loaded from a TOML file:
///
/// ```toml
/// workspace_name = "happy path"
/// apply_git_ignore = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceOptions {
    /// Write a `.gitignore` containing `*` at the workspace root
    #[serde(default = "default_apply_git_ignore")]
    pub apply_git_ignore: bool,

    /// Name distinguishing several workspaces created from one source file
    #[serde(default = "default_workspace_name")]
    pub workspace_name: String,

    /// Use this file instead of resolving the caller's source location
    #[serde(default)]
    pub caller_file: Option<PathBuf>,
}

impl Default for WorkspaceOptions {
    fn default() -> Self {
        Self {
            apply_git_ignore: default_apply_git_ignore(),
            workspace_name: default_workspace_name(),
            caller_file: None,
        }
    }
}

// Serde default functions
fn default_apply_git_ignore() -> bool {
    true
}

fn default_workspace_name() -> String {
    ".".to_string()
}

impl WorkspaceOptions {
    pub fn named(name: impl Into<String>) -> Self {
        Self::default().with_name(name)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.workspace_name = name.into();
        self
    }

    pub fn with_git_ignore(mut self, apply: bool) -> Self {
        self.apply_git_ignore = apply;
        self
    }

    /// Skip caller resolution and derive the workspace from `path`.
    pub fn with_caller_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.caller_file = Some(path.into());
        self
    }

    /// Load options from a TOML file
    pub fn load(path: &Path) -> Result<Self, WorkspaceError> {
        let content = std::fs::read_to_string(path).map_err(|source| WorkspaceError::IoError {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|e| WorkspaceError::ConfigError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Load options, returning defaults if the file doesn't exist
    pub fn load_or_default(path: &Path) -> Result<Self, WorkspaceError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }
}
