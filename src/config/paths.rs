//! Path resolution for tasktok configuration files.
//!
//! All tasktok files live in `~/.tasktok/`:
//! - `config.yaml` - Main configuration file
//! - `tasktok.log` - Log output of the interactive timer

use std::path::PathBuf;

use crate::error::TaskTokError;

/// Environment variable overriding the root directory.
pub const HOME_ENV: &str = "TASKTOK_HOME";

/// Paths to tasktok configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.tasktok/`
    pub root: PathBuf,
    /// Config file: `~/.tasktok/config.yaml`
    pub config_file: PathBuf,
    /// Log file: `~/.tasktok/tasktok.log`
    pub log_file: PathBuf,
}

impl Paths {
    /// Create paths based on `TASKTOK_HOME`, or the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TaskTokError> {
        if let Some(root) = std::env::var_os(HOME_ENV) {
            return Ok(Self::with_root(PathBuf::from(root)));
        }

        let home = std::env::var("HOME").map_err(|_| {
            TaskTokError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".tasktok")))
    }

    /// Create paths with a custom root directory.
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            log_file: root.join("tasktok.log"),
            root,
        }
    }

    /// Ensure the root directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), TaskTokError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                TaskTokError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-tasktok");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
        assert_eq!(paths.log_file, root.join("tasktok.log"));
    }

    #[test]
    fn test_ensure_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("nested").join(".tasktok"));

        paths.ensure_dirs().unwrap();

        assert!(paths.root.exists());
    }
}
