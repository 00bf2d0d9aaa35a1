//! Time formatting for countdown display.

use std::fmt;

use serde::Serialize;

/// A number of seconds split into clock components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeParts {
    /// Whole hours.
    pub hours: u32,
    /// Minutes past the hour, 0-59.
    pub minutes: u32,
    /// Seconds past the minute, 0-59.
    pub seconds: u32,
}

impl TimeParts {
    /// Recompose into a total number of seconds.
    #[must_use]
    pub const fn total_seconds(&self) -> u32 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }
}

impl fmt::Display for TimeParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// Split a number of seconds into hours, minutes and seconds.
#[must_use]
pub const fn format_time(total_seconds: u32) -> TimeParts {
    TimeParts {
        hours: total_seconds / 3600,
        minutes: (total_seconds % 3600) / 60,
        seconds: total_seconds % 60,
    }
}

/// Format a minute count as a human-readable string.
#[must_use]
pub fn format_minutes(minutes: u32) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;

    match (hours, rest) {
        (0, m) => format!("{} minute{}", m, if m == 1 { "" } else { "s" }),
        (h, 0) => format!("{} hour{}", h, if h == 1 { "" } else { "s" }),
        (h, m) => format!(
            "{} hour{}, {} minute{}",
            h,
            if h == 1 { "" } else { "s" },
            m,
            if m == 1 { "" } else { "s" }
        ),
    }
}

/// Render a progress bar.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_progress_bar(progress: f64, width: usize) -> String {
    let filled = ((progress.clamp(0.0, 1.0)) * width as f64) as usize;
    let empty = width.saturating_sub(filled);

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}
