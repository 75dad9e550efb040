//! Command-line frontend.
//!
//! - [`args`]: Flag parsing and action selection
//! - [`console`]: Prompting and output over arbitrary streams
//! - [`output`]: Formatting of listings and submission results
//!
//! [`run`] ties them together: it resolves one [`Action`] from the flags and
//! either edits the configuration or walks through pull request creation.

pub mod args;
pub mod console;
mod frontend;
pub mod output;

pub use args::{Action, CliArgs, CreateOptions};
pub use console::Console;
pub use frontend::run;
