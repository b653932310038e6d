// call_site.rs — Capture and resolve the location that invoked a workspace.
//
// `Location::caller()` inside a `#[track_caller]` function reports the
// location of the first caller that is *not* itself `#[track_caller]`.
// Library entry points carry the attribute all the way down, so the
// captured site is the test author's call.
//
// The compiler records paths the way they were passed to rustc. Cargo
// compiles from the workspace root, so for path dependencies and local
// tests the recorded path is relative to that root, while the test binary
// runs from the package directory. Resolution therefore walks up from the
// current directory looking for the recorded path.

use std::env;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};

use crate::error::CallerError;

/// One captured call location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    file: &'static str,
    line: u32,
    column: u32,
}

impl CallSite {
    /// Capture the location of the nearest caller outside `#[track_caller]`
    /// functions.
    #[track_caller]
    pub fn capture() -> Self {
        let location = Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
            column: location.column(),
        }
    }

    /// Build a call site from explicit parts.
    pub fn new(file: &'static str, line: u32, column: u32) -> Self {
        Self { file, line, column }
    }

    /// The source path as recorded by the compiler.
    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    /// Map the recorded source path to an absolute, canonical path on disk.
    pub fn resolve_file(&self) -> Result<PathBuf, CallerError> {
        resolve_recorded(self.file)
    }
}

/// Resolve the source file of whoever called into the library.
///
/// Fails with [`CallerError::LocationUnresolved`] if the recorded path is
/// empty or does not exist relative to any search root.
#[track_caller]
pub fn resolve_caller_file() -> Result<PathBuf, CallerError> {
    let site = CallSite::capture();
    tracing::trace!(
        file = site.file(),
        line = site.line(),
        column = site.column(),
        "captured call site"
    );
    site.resolve_file()
}

fn resolve_recorded(recorded: &str) -> Result<PathBuf, CallerError> {
    if recorded.is_empty() {
        return Err(CallerError::LocationUnresolved {
            file: String::new(),
            reason: "no source path recorded for call site".to_string(),
        });
    }

    let recorded_path = Path::new(recorded);
    let found = if recorded_path.is_absolute() {
        recorded_path.is_file().then(|| recorded_path.to_path_buf())
    } else {
        search_roots()?.iter().find_map(|root| {
            root.ancestors()
                .map(|dir| dir.join(recorded_path))
                .inspect(|candidate| {
                    tracing::trace!(candidate = %candidate.display(), "probing caller path")
                })
                .find(|candidate| candidate.is_file())
        })
    };

    let path = found.ok_or_else(|| CallerError::LocationUnresolved {
        file: recorded.to_string(),
        reason: "source file not found from the current directory or its ancestors"
            .to_string(),
    })?;

    fs::canonicalize(&path).map_err(|source| CallerError::IoError { path, source })
}

/// Directories whose ancestors may contain the recorded path.
fn search_roots() -> Result<Vec<PathBuf>, CallerError> {
    let cwd = env::current_dir().map_err(|source| CallerError::IoError {
        path: PathBuf::from("."),
        source,
    })?;

    let mut roots = vec![cwd];
    // Set by cargo for `cargo test` / `cargo run`.
    if let Some(manifest_dir) = env::var_os("CARGO_MANIFEST_DIR") {
        roots.push(PathBuf::from(manifest_dir));
    }
    Ok(roots)
}
