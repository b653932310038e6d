//! # demokit-workspace
//!
//! Scratch workspaces for tests, keyed by the calling source file.
//!
//! Each call to [`create_workspace`] derives a directory beside the test
//! source, `<dir>/__demos__/<file stem>/<encoded name>/`, creates it, and
//! hands back a [`Workspace`] for writing fixture files into it. Text
//! fixtures written as indented multi-line literals are normalized (see
//! [`normalize_indent`]); JSON fixtures are pretty-printed.
//!
//! ## Quick Example
//!
//! ```rust,no_run
//! use demokit_workspace::{FileContent, Workspace};
//! use serde_json::json;
//!
//! let ws = Workspace::named("happy path").unwrap();
//! ws.file(
//!     "src/main.rs",
//!     "
//!     fn main() {}
//!     ",
//! )
//! .unwrap();
//! let tree = ws
//!     .make_tree([
//!         ("README.md", FileContent::from("# Sample")),
//!         ("package.json", FileContent::json(json!({ "name": "sample" }))),
//!     ])
//!     .unwrap();
//! assert_eq!(tree.len(), 2);
//! ```
//!
//! ## Key components
//!
//! - [`Workspace`] — one directory per (caller file, workspace name).
//! - [`FileContent`] — text or JSON payload, deserializable from manifests.
//! - [`WorkspaceOptions`] — name, `.gitignore` placeholder, caller override.
//! - [`encode_name`] — filesystem-safe, injective name encoding.

pub mod content;
pub mod encode;
pub mod error;
pub mod indent;
pub mod options;
pub mod workspace;

pub use content::{ContentType, FileContent};
pub use encode::encode_name;
pub use error::WorkspaceError;
pub use indent::normalize_indent;
pub use options::WorkspaceOptions;
pub use workspace::{
    create_workspace, workspace_dir, DemoFile, Workspace, DEMOS_DIR, GITIGNORE_FILE,
};
