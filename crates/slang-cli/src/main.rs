//! slang-demo - call SlangParseLang once and print the result
//!
//! ```text
//! Usage: slang-demo <lang-code>
//! ```
//!
//! Exits 0 whether or not the library recognised the code; only a failure
//! to write the output itself makes it exit non-zero.

use colored::control;
use is_terminal::IsTerminal;
use slang_cli::cli::DemoCli;
use slang_cli::error::format_error;
use slang_cli::logging::{self, LoggingConfig};
use slang_cli::{demo, LinkedCallee};
use std::ffi::OsString;
use std::io;
use std::process;

fn main() {
    let cli = DemoCli::from_args(std::env::args_os());
    let program = cli
        .program
        .clone()
        .unwrap_or_else(|| OsString::from("slang-demo"));

    let mut logging_config = LoggingConfig::default();
    logging_config.merge_with_env();
    if let Err(e) = logging::init_logging(logging_config) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let mut stdout = io::stdout().lock();
    let result = demo::run(
        &program,
        cli.lang_code.as_deref(),
        &LinkedCallee::new(),
        &mut stdout,
    );

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            let use_color = io::stderr().is_terminal();
            control::set_override(use_color);
            eprintln!("{}", format_error(&e, use_color));
            process::exit(e.exit_code());
        }
    }
}
