//! Configuration management for tasktok.
//!
//! This module handles loading and saving configuration from `~/.tasktok/`.

mod paths;
mod settings;

pub use paths::{Paths, HOME_ENV};
pub use settings::{ColorSetting, Config, GeneralConfig, LoggingConfig, TimerConfig};
