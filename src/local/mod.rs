//! Local Git repository queries.
//!
//! The tool only needs one fact from the working copy: the message of the
//! most recent commit, offered as the default pull request title. It is read
//! by running the `git` executable so that the user's own Git configuration
//! and repository discovery apply.
//!
//! # Example
//!
//! ```no_run
//! use gh_createpr::local::last_commit_message;
//! use gh_createpr::process::SystemCommandRunner;
//!
//! let message = last_commit_message(&SystemCommandRunner)?;
//! # Ok::<(), gh_createpr::process::ProcessError>(())
//! ```

mod commit;

pub use commit::{GIT_PROGRAM, last_commit_message};
