//! Countdown and work/break session controller.
//!
//! The controller owns a single [`TimerState`] and is the only thing allowed
//! to mutate it. Presentation layers read copies through
//! [`TimerController::state`] and drive time forward by calling
//! [`TimerController::tick`] once per elapsed second while running.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::format::{format_time, TimeParts};

/// Default work phase length in minutes.
pub const DEFAULT_WORK_MINUTES: u32 = 25;
/// Default break phase length in minutes.
pub const DEFAULT_BREAK_MINUTES: u32 = 5;
/// Allowed work durations in minutes.
pub const WORK_MINUTES_RANGE: (u32, u32) = (1, 60);
/// Allowed break durations in minutes.
pub const BREAK_MINUTES_RANGE: (u32, u32) = (1, 30);

/// Current mode of the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Focus interval.
    #[default]
    Work,
    /// Rest interval.
    Break,
}

impl Phase {
    /// The other phase.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Work => Self::Break,
            Self::Break => Self::Work,
        }
    }

    /// Label shown above the countdown.
    #[must_use]
    pub const fn headline(self) -> &'static str {
        match self {
            Self::Work => "🍅 Focus Time!",
            Self::Break => "☕ Break Time!",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Work => write!(f, "Work"),
            Self::Break => write!(f, "Break"),
        }
    }
}

/// Snapshot of the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimerState {
    /// Seconds left in the current phase.
    pub remaining_seconds: u32,
    /// Current phase.
    pub phase: Phase,
    /// Whether the countdown is ticking.
    pub is_running: bool,
    /// Configured work length.
    pub work_duration_minutes: u32,
    /// Configured break length.
    pub break_duration_minutes: u32,
    /// Number of Work phases that ran down to zero.
    pub completed_work_sessions: u32,
}

impl TimerState {
    /// Full length of the given phase in seconds.
    #[must_use]
    pub const fn duration_seconds(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Work => self.work_duration_minutes * 60,
            Phase::Break => self.break_duration_minutes * 60,
        }
    }

    /// Fraction of the current phase that has elapsed, in `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        let total = self.duration_seconds(self.phase);
        if total == 0 {
            return 1.0;
        }
        let remaining = self.remaining_seconds.min(total);
        1.0 - f64::from(remaining) / f64::from(total)
    }

    /// Remaining time split into display components.
    #[must_use]
    pub const fn time_parts(&self) -> TimeParts {
        format_time(self.remaining_seconds)
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self {
            remaining_seconds: DEFAULT_WORK_MINUTES * 60,
            phase: Phase::Work,
            is_running: false,
            work_duration_minutes: DEFAULT_WORK_MINUTES,
            break_duration_minutes: DEFAULT_BREAK_MINUTES,
            completed_work_sessions: 0,
        }
    }
}

/// A phase change produced by a tick reaching zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transition {
    /// Phase that just ended.
    pub from: Phase,
    /// Phase that is now loaded (paused).
    pub to: Phase,
    /// Session count after the transition.
    pub completed_work_sessions: u32,
}

/// Sanitize a requested duration: non-positive values fall back to
/// `default`, values above the range are clamped to its upper bound.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn sanitize_minutes(requested: i64, range: (u32, u32), default: u32) -> u32 {
    let (min, max) = range;
    if requested < 1 {
        return default;
    }
    requested.clamp(i64::from(min), i64::from(max)) as u32
}

/// Parse user-entered minutes. Anything that is not an integer maps to 0,
/// which [`sanitize_minutes`] turns into the fallback.
#[must_use]
pub fn parse_minutes_input(input: &str) -> i64 {
    input.trim().parse::<i64>().unwrap_or(0)
}

/// The work/break countdown state machine.
#[derive(Debug, Clone, Default)]
pub struct TimerController {
    state: TimerState,
}

impl TimerController {
    /// Create a controller with the default 25/5 configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controller seeded with the given durations, in Work phase.
    #[must_use]
    pub fn with_durations(work_minutes: i64, break_minutes: i64) -> Self {
        let mut controller = Self::new();
        controller.apply_preset(work_minutes, break_minutes);
        controller
    }

    /// Copy of the current state.
    #[must_use]
    pub const fn state(&self) -> TimerState {
        self.state
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Whether the countdown is ticking.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.state.is_running
    }

    /// Seconds left in the current phase.
    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.state.remaining_seconds
    }

    /// Full length of the current phase in seconds.
    #[must_use]
    pub const fn phase_duration_seconds(&self) -> u32 {
        self.state.duration_seconds(self.state.phase)
    }

    /// Remaining time split into display components.
    #[must_use]
    pub const fn time_parts(&self) -> TimeParts {
        self.state.time_parts()
    }

    /// Fraction of the current phase already elapsed (0.0 - 1.0).
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.state.progress()
    }

    /// Start or resume the countdown.
    pub fn start(&mut self) {
        if self.state.remaining_seconds > 0 && !self.state.is_running {
            self.state.is_running = true;
            debug!(phase = %self.state.phase, remaining = self.state.remaining_seconds, "timer started");
        }
    }

    /// Pause the countdown.
    pub fn pause(&mut self) {
        if self.state.is_running {
            self.state.is_running = false;
            debug!(phase = %self.state.phase, remaining = self.state.remaining_seconds, "timer paused");
        }
    }

    /// Stop and rewind the current phase to its full length.
    pub fn reset(&mut self) {
        self.state.is_running = false;
        self.state.remaining_seconds = self.phase_duration_seconds();
        debug!(phase = %self.state.phase, "timer reset");
    }

    /// Advance the countdown by one second.
    ///
    /// Does nothing while paused. Returns the transition when the current
    /// phase runs out; the next phase is loaded paused.
    pub fn tick(&mut self) -> Option<Transition> {
        if !self.state.is_running {
            return None;
        }

        self.state.remaining_seconds = self.state.remaining_seconds.saturating_sub(1);

        if self.state.remaining_seconds == 0 {
            Some(self.transition())
        } else {
            None
        }
    }

    fn transition(&mut self) -> Transition {
        let from = self.state.phase;
        self.state.is_running = false;
        if from == Phase::Work {
            self.state.completed_work_sessions += 1;
        }
        self.state.phase = from.flipped();
        self.state.remaining_seconds = self.phase_duration_seconds();

        info!(
            from = %from,
            to = %self.state.phase,
            completed = self.state.completed_work_sessions,
            "phase finished"
        );

        Transition {
            from,
            to: self.state.phase,
            completed_work_sessions: self.state.completed_work_sessions,
        }
    }

    /// Change the work length. Takes effect immediately when in Work phase,
    /// even while running.
    pub fn set_work_duration(&mut self, minutes: i64) {
        let minutes = sanitize_minutes(minutes, WORK_MINUTES_RANGE, DEFAULT_WORK_MINUTES);
        self.state.work_duration_minutes = minutes;
        if self.state.phase == Phase::Work {
            self.state.remaining_seconds = minutes * 60;
        }
    }

    /// Change the break length. Takes effect immediately when in Break
    /// phase, even while running.
    pub fn set_break_duration(&mut self, minutes: i64) {
        let minutes = sanitize_minutes(minutes, BREAK_MINUTES_RANGE, DEFAULT_BREAK_MINUTES);
        self.state.break_duration_minutes = minutes;
        if self.state.phase == Phase::Break {
            self.state.remaining_seconds = minutes * 60;
        }
    }

    /// [`Self::set_work_duration`] from text input.
    pub fn set_work_duration_input(&mut self, input: &str) {
        self.set_work_duration(parse_minutes_input(input));
    }

    /// [`Self::set_break_duration`] from text input.
    pub fn set_break_duration_input(&mut self, input: &str) {
        self.set_break_duration(parse_minutes_input(input));
    }

    /// Load a new work/break pair and rewind into a paused Work phase.
    pub fn apply_preset(&mut self, work_minutes: i64, break_minutes: i64) {
        self.state.is_running = false;
        self.state.work_duration_minutes =
            sanitize_minutes(work_minutes, WORK_MINUTES_RANGE, DEFAULT_WORK_MINUTES);
        self.state.break_duration_minutes =
            sanitize_minutes(break_minutes, BREAK_MINUTES_RANGE, DEFAULT_BREAK_MINUTES);
        self.state.phase = Phase::Work;
        self.state.remaining_seconds = self.state.work_duration_minutes * 60;
        debug!(
            work_minutes = self.state.work_duration_minutes,
            break_minutes = self.state.break_duration_minutes,
            "preset applied"
        );
    }

    /// Zero the completed-session counter.
    pub fn reset_session_count(&mut self) {
        self.state.completed_work_sessions = 0;
    }
}
