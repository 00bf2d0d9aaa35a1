//! Human-readable output formatting for tasktok.

use chrono::{DateTime, Local};
use colored::Colorize;

use crate::timer::{
    format_minutes, render_progress_bar, Phase, Preset, TimeParts, TimerState, Transition,
};

/// Format a timer snapshot as a multi-line status block.
pub fn format_state_pretty(state: &TimerState) -> String {
    let mut output = Vec::new();

    output.push(state.phase.headline().bold().to_string());
    output.push("─".repeat(40));
    output.push(format!("Time:      {}", state.time_parts().to_string().bold()));
    output.push(format!(
        "State:     {}",
        if state.is_running {
            "running".green()
        } else {
            "paused".yellow()
        }
    ));
    output.push(format!(
        "Work:      {}",
        format_minutes(state.work_duration_minutes)
    ));
    output.push(format!(
        "Break:     {}",
        format_minutes(state.break_duration_minutes)
    ));
    output.push(format!(
        "🏆 {} Session{} Complete!",
        state.completed_work_sessions,
        if state.completed_work_sessions == 1 { "" } else { "s" }
    ));

    output.join("\n")
}

/// Format the one-line countdown shown while the headless runner ticks.
pub fn format_status_line(state: &TimerState) -> String {
    let progress = state.progress();
    let phase = match state.phase {
        Phase::Work => "Work ".red(),
        Phase::Break => "Break".cyan(),
    };
    format!(
        "{} {} {} {:>3}%  🏆 {}",
        phase,
        state.time_parts().to_string().bold(),
        render_progress_bar(progress, 20),
        (progress * 100.0).round(),
        state.completed_work_sessions
    )
}

/// Format a phase transition notice.
pub fn format_transition_pretty(transition: &Transition, at: DateTime<Local>) -> String {
    let time = at.format("%H:%M").to_string();
    match transition.to {
        Phase::Break => format!(
            "✅ Work session {} done at {}. {}",
            transition.completed_work_sessions,
            time,
            Phase::Break.headline()
        )
        .green()
        .to_string(),
        Phase::Work => format!("⏰ Break over at {}. {}", time, Phase::Work.headline())
            .yellow()
            .to_string(),
    }
}

/// Format presets as a numbered list.
pub fn format_presets_pretty(presets: &[Preset]) -> String {
    let mut output = Vec::new();
    output.push("✨ Quick Presets ✨".bold().to_string());
    output.push("─".repeat(40));

    for (i, preset) in presets.iter().enumerate() {
        output.push(format!(
            "{:>2}. {:<20} {}",
            i + 1,
            preset.name,
            format!(
                "{} work / {} break",
                format_minutes(preset.work_minutes),
                format_minutes(preset.break_minutes)
            )
            .dimmed()
        ));
    }

    output.join("\n")
}

/// Format a clock decomposition.
pub fn format_time_pretty(parts: &TimeParts) -> String {
    parts.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::TimerController;

    #[test]
    fn test_format_state_pretty() {
        colored::control::set_override(false);
        let mut timer = TimerController::new();
        timer.start();
        let output = format_state_pretty(&timer.state());

        assert!(output.contains("Focus Time!"));
        assert!(output.contains("00:25:00"));
        assert!(output.contains("running"));
        assert!(output.contains("0 Sessions Complete!"));
    }

    #[test]
    fn test_format_status_line() {
        colored::control::set_override(false);
        let mut timer = TimerController::with_durations(1, 1);
        timer.start();
        for _ in 0..30 {
            timer.tick();
        }
        let line = format_status_line(&timer.state());
        assert!(line.contains("00:00:30"));
        assert!(line.contains("50%"));
    }

    #[test]
    fn test_format_presets_pretty() {
        colored::control::set_override(false);
        let output = format_presets_pretty(&Preset::builtin());
        assert!(output.contains(" 1. 25 min Focus"));
        assert!(output.contains("1 hour work / 10 minutes break"));
    }
}
