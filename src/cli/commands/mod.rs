//! Command implementations for tasktok.
//!
//! Each command returns the text to print; `main` does the printing.

mod completions;
mod config;
mod run;

pub use completions::completions;
pub use config::config;
pub use run::{run, run_session};

use tracing::debug;

use crate::cli::args::{OutputFormat, TimerArgs};
use crate::config::Config;
use crate::error::TaskTokError;
use crate::output::{format_presets, format_time_parts};
use crate::timer::{format_time, TimerController};

/// Build a controller from the config file's durations, then the preset,
/// then explicit `--work`/`--break` values.
///
/// # Errors
///
/// Returns `TaskTokError::NotFound` if the named preset does not exist.
pub fn build_controller(args: &TimerArgs, config: &Config) -> Result<TimerController, TaskTokError> {
    let mut controller = TimerController::with_durations(
        i64::from(config.timer.work_minutes),
        i64::from(config.timer.break_minutes),
    );

    if let Some(ref key) = args.preset {
        let book = config.preset_book();
        let preset = book.find(key)?;
        debug!(preset = %preset.name, "starting from preset");
        controller.apply_preset(
            i64::from(preset.work_minutes),
            i64::from(preset.break_minutes),
        );
    }

    if let Some(ref work) = args.work {
        controller.set_work_duration_input(work);
    }
    if let Some(ref brk) = args.break_minutes {
        controller.set_break_duration_input(brk);
    }

    Ok(controller)
}

/// Execute presets command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn presets(config: &Config, format: OutputFormat) -> Result<String, TaskTokError> {
    let book = config.preset_book();
    format_presets(book.all(), format)
}

/// Execute format command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn format_seconds(seconds: u32, format: OutputFormat) -> Result<String, TaskTokError> {
    format_time_parts(&format_time(seconds), format)
}
