//! Pomodoro timer core.
//!
//! - [`controller`]: the work/break countdown state machine
//! - [`format`]: clock-style formatting of remaining time
//! - [`preset`]: named work/break pairs
//! - [`scheduler`]: turns elapsed wall-clock time into ticks

pub mod controller;
pub mod format;
pub mod preset;
pub mod scheduler;

pub use controller::{Phase, TimerController, TimerState, Transition};
pub use format::{format_minutes, format_time, render_progress_bar, TimeParts};
pub use preset::{Preset, PresetBook};
pub use scheduler::{Clock, Scheduler, SystemClock};
