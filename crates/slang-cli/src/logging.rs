//! Logging setup for the harnesses
//!
//! Logs always go to stderr; stdout carries nothing but the harness output.
//! Configuration comes from the verbosity flag and two environment variables:
//! - `SLANG_LOG`: filter directive (e.g. `debug`, `slang_ffi=trace`)
//! - `SLANG_LOG_FORMAT`: `compact`, `full` or `json`

use crate::error::{Error, Result};
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter
    pub level: String,
    /// Output format: compact, full, json
    pub format: LogFormat,
    /// Emit ANSI colors
    pub ansi: bool,
    /// Include thread IDs
    pub thread_ids: bool,
    /// Include file and line numbers
    pub source_location: bool,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact format for production
    Compact,
    /// Full format with all details
    Full,
    /// JSON structured format
    Json,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Compact,
            ansi: std::io::stderr().is_terminal(),
            thread_ids: false,
            source_location: false,
        }
    }
}

impl LoggingConfig {
    /// Create logging config from verbosity level
    pub fn from_verbosity(verbosity: u8) -> Self {
        let mut config = Self::default();

        match verbosity {
            0 => {}
            1 => {
                config.level = "info".to_string();
            }
            2 => {
                config.level = "debug".to_string();
                config.source_location = true;
            }
            _ => {
                config.level = "trace".to_string();
                config.format = LogFormat::Full;
                config.source_location = true;
                config.thread_ids = true;
            }
        }

        config
    }

    /// Apply `SLANG_LOG` and `SLANG_LOG_FORMAT` from the process environment
    pub fn merge_with_env(&mut self) {
        self.merge_with(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key/value source
    pub fn merge_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("SLANG_LOG") {
            self.level = level;
        }

        if let Some(format) = lookup("SLANG_LOG_FORMAT") {
            match format.to_lowercase().as_str() {
                "compact" => self.format = LogFormat::Compact,
                "full" => self.format = LogFormat::Full,
                "json" => self.format = LogFormat::Json,
                _ => tracing::warn!("Invalid log format: {}, using default", format),
            }
        }
    }
}

/// Initialize the global logging system
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let env_filter = create_env_filter(&config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(config.thread_ids)
        .with_file(config.source_location)
        .with_line_number(config.source_location);

    // each format is its own subscriber type
    let installed = match config.format {
        LogFormat::Compact => tracing::subscriber::set_global_default(
            builder.with_ansi(config.ansi).compact().finish(),
        ),
        LogFormat::Full => {
            tracing::subscriber::set_global_default(builder.with_ansi(config.ansi).finish())
        }
        LogFormat::Json => {
            tracing::subscriber::set_global_default(builder.with_ansi(false).json().finish())
        }
    };
    installed.map_err(|e| Error::Logging(format!("Failed to initialize logging: {}", e)))?;

    tracing::debug!(config = ?config, "Logging system initialized");
    Ok(())
}

/// Create environment filter based on configuration
fn create_env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    EnvFilter::try_new(&config.level)
        .map_err(|e| Error::Logging(format!("Invalid filter directive {:?}: {}", config.level, e)))
}

/// Performance timing utilities
pub mod timing {
    use std::time::Instant;

    /// A timer that logs its duration when dropped
    pub struct Timer {
        start: Instant,
        operation: &'static str,
    }

    impl Timer {
        pub fn new(operation: &'static str) -> Self {
            Self {
                start: Instant::now(),
                operation,
            }
        }
    }

    impl Drop for Timer {
        fn drop(&mut self) {
            tracing::debug!(
                operation = self.operation,
                duration_us = self.start.elapsed().as_micros() as u64,
                "Operation completed"
            );
        }
    }
}
