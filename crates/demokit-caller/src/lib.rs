//! # demokit-caller
//!
//! Resolves the source file of the code that asked for a test workspace.
//!
//! The compiler records the call location of every `#[track_caller]`
//! function. As long as each public function between the test author and
//! [`resolve_caller_file`] carries the attribute, the recorded location is
//! the test author's own call site.
//!
//! ## Quick Example
//!
//! ```rust,no_run
//! #[track_caller]
//! fn scratch_dir_for_caller() -> std::path::PathBuf {
//!     let file = demokit_caller::resolve_caller_file().unwrap();
//!     file.parent().unwrap().join("scratch")
//! }
//! ```

pub mod call_site;
pub mod error;

pub use call_site::{resolve_caller_file, CallSite};
pub use error::CallerError;
