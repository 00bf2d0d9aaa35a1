//! Tracing subscriber setup.
//!
//! Command-line commands log to stderr. The interactive timer owns the
//! terminal, so it logs to a file instead.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::TaskTokError;

/// Environment variable holding a log filter directive.
pub const LOG_ENV: &str = "TASKTOK_LOG";

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error.
    Stderr,
    /// Append to a file.
    File(PathBuf),
}

/// Pick the filter directive: command line, then environment, then config.
#[must_use]
pub fn resolve_level(cli: Option<&str>, env: Option<String>, config: &str) -> String {
    cli.map(str::to_string)
        .or_else(|| env.filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| config.to_string())
}

/// Build the filter for a directive such as `info` or `tasktok=debug`.
///
/// A bare level applies to this crate only.
///
/// # Errors
///
/// Returns an error if the directive cannot be parsed.
pub fn build_filter(directive: &str) -> Result<EnvFilter, TaskTokError> {
    let directive = directive.trim();
    let full = if directive.contains('=') || directive.contains(',') {
        directive.to_string()
    } else {
        format!("tasktok={directive}")
    };
    EnvFilter::try_new(&full)
        .map_err(|e| TaskTokError::Config(format!("Invalid log level '{directive}': {e}")))
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if the filter is invalid, the log file cannot be
/// opened, or a subscriber is already installed.
pub fn init(directive: &str, target: &LogTarget) -> Result<(), TaskTokError> {
    let filter = build_filter(directive)?;

    let result = match target {
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init(),
        LogTarget::File(path) => {
            let file = open_log_file(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
        }
    };

    result.map_err(|e| TaskTokError::Config(format!("Failed to initialize logging: {e}")))
}

fn open_log_file(path: &Path) -> Result<std::fs::File, TaskTokError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            TaskTokError::Config(format!("Failed to open log file {}: {e}", path.display()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_level_precedence() {
        assert_eq!(
            resolve_level(Some("debug"), Some("info".into()), "warn"),
            "debug"
        );
        assert_eq!(resolve_level(None, Some("info".into()), "warn"), "info");
        assert_eq!(resolve_level(None, Some("  ".into()), "warn"), "warn");
        assert_eq!(resolve_level(None, None, "error"), "error");
    }

    #[test]
    fn test_build_filter() {
        assert!(build_filter("info").is_ok());
        assert!(build_filter("tasktok=trace,warn").is_ok());
        assert!(matches!(
            build_filter("tasktok=loud"),
            Err(TaskTokError::Config(_))
        ));
    }

    #[test]
    fn test_open_log_file_creates_parent() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("logs").join("tasktok.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }
}
