//! Output formatting for tasktok.
//!
//! This module renders timer snapshots, presets and clock values either as
//! colored text or as JSON.

mod json;
mod pretty;

use chrono::{DateTime, Local};

use crate::cli::args::OutputFormat;
use crate::error::TaskTokError;
use crate::timer::{Preset, TimeParts, TimerState, Transition};

pub use json::*;
pub use pretty::*;

/// Format a timer snapshot based on output format
///
/// # Errors
///
/// Returns `TaskTokError::Parse` if JSON serialization fails.
pub fn format_state(state: &TimerState, format: OutputFormat) -> Result<String, TaskTokError> {
    match format {
        OutputFormat::Pretty => Ok(format_state_pretty(state)),
        OutputFormat::Json => format_state_json(state),
    }
}

/// Format a phase transition based on output format
///
/// # Errors
///
/// Returns `TaskTokError::Parse` if JSON serialization fails.
pub fn format_transition(
    transition: &Transition,
    at: DateTime<Local>,
    state: &TimerState,
    format: OutputFormat,
) -> Result<String, TaskTokError> {
    match format {
        OutputFormat::Pretty => Ok(format_transition_pretty(transition, at)),
        OutputFormat::Json => format_transition_json(transition, at, state),
    }
}

/// Format presets based on output format
///
/// # Errors
///
/// Returns `TaskTokError::Parse` if JSON serialization fails.
pub fn format_presets(presets: &[Preset], format: OutputFormat) -> Result<String, TaskTokError> {
    match format {
        OutputFormat::Pretty => Ok(format_presets_pretty(presets)),
        OutputFormat::Json => format_presets_json(presets),
    }
}

/// Format a clock decomposition based on output format
///
/// # Errors
///
/// Returns `TaskTokError::Parse` if JSON serialization fails.
pub fn format_time_parts(parts: &TimeParts, format: OutputFormat) -> Result<String, TaskTokError> {
    match format {
        OutputFormat::Pretty => Ok(format_time_pretty(parts)),
        OutputFormat::Json => format_time_json(parts),
    }
}
