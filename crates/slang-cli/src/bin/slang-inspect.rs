//! slang-inspect - look up a language code and print the decoded record
//!
//! ```text
//! slang-inspect [-v] [--pretty] [--add <TABSTR>]... <LANG>
//! ```
//!
//! Exits 1 when the library reports a non-zero code.

use clap::Parser;
use colored::control;
use slang_cli::cli::InspectCli;
use slang_cli::error::{format_error, Result};
use slang_cli::inspect;
use slang_cli::logging::{self, LoggingConfig};
use std::ffi::OsString;
use std::io;
use std::process;
use tracing::instrument;

fn main() {
    let program = std::env::args_os()
        .next()
        .unwrap_or_else(|| OsString::from("slang-inspect"));
    let cli = InspectCli::parse();

    control::set_override(cli.use_color());

    if let Err(e) = init_logging(&cli) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match run(&cli, program) {
        Ok(()) => process::exit(0),
        Err(e) => {
            if !e.is_reported() {
                eprintln!("{}", format_error(&e, cli.use_color()));
            }
            process::exit(e.exit_code());
        }
    }
}

#[instrument(skip(cli, program), fields(lang_code = ?cli.lang_code))]
fn run(cli: &InspectCli, program: OsString) -> Result<()> {
    let mut stdout = io::stdout().lock();
    inspect::execute(cli, &program, &mut stdout)
}

/// Initialize the logging system from `-v` and the environment
fn init_logging(cli: &InspectCli) -> Result<()> {
    let mut logging_config = LoggingConfig::from_verbosity(cli.verbose);
    logging_config.merge_with_env();
    logging::init_logging(logging_config)
}
