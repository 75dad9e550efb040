//! gh-createpr CLI entrypoint.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use gh_createpr::cli::{self, CliArgs, Console};
use gh_createpr::{AppError, ConfigStore, SystemCommandRunner};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (`tracing-subscriber` syntax).
const LOG_ENV: &str = "GH_CREATEPR_LOG";

fn main() -> ExitCode {
    init_tracing();

    let args = CliArgs::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::from(error.exit_code())
        }
    }
}

fn run(args: &CliArgs) -> Result<(), AppError> {
    let store = match args.config.clone() {
        Some(path) => ConfigStore::new(path),
        None => ConfigStore::at_default_location()?,
    };

    let mut console = Console::new(io::stdin().lock(), io::stdout());
    cli::run(args, &store, &SystemCommandRunner, &mut console)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
