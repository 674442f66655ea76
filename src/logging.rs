//! Tracing setup.
//!
//! The TUI owns the terminal, so logs only go to a file there. Export runs
//! log to stderr.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the configured log filter.
pub const LOG_ENV: &str = "MULTISPAN_LOG";

/// Where log lines are written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
    Off,
}

/// Install the global subscriber. Returns warnings for the user; logging
/// problems never abort the program.
pub fn init_logging(target: &LogTarget, level: &str) -> Vec<String> {
    let mut warnings = Vec::new();
    let filter = match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).unwrap_or_else(|e| {
            warnings.push(format!("Invalid log level '{}': {}; using 'info'", level, e));
            EnvFilter::new("info")
        }),
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = match target {
        LogTarget::Off => return warnings,
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            match OpenOptions::new().create(true).append(true).open(path) {
                Ok(file) => builder
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .try_init(),
                Err(e) => {
                    warnings.push(format!("Failed to open log file {}: {}", path.display(), e));
                    return warnings;
                }
            }
        }
    };
    if let Err(e) = installed {
        warnings.push(format!("Failed to install logger: {}", e));
    }
    warnings
}
