//! JSON output formatting for tasktok.

use chrono::{DateTime, Local};
use serde::Serialize;
use serde_json::json;

use crate::error::TaskTokError;
use crate::timer::{Preset, TimeParts, TimerState, Transition};

/// Format a timer snapshot as JSON, including the display string.
///
/// # Errors
///
/// Returns `TaskTokError::Parse` if JSON serialization fails.
pub fn format_state_json(state: &TimerState) -> Result<String, TaskTokError> {
    let output = json!({
        "state": state,
        "display": state.time_parts().to_string(),
    });
    Ok(serde_json::to_string(&output)?)
}

/// Format a phase transition event as a single JSON line.
///
/// # Errors
///
/// Returns `TaskTokError::Parse` if JSON serialization fails.
pub fn format_transition_json(
    transition: &Transition,
    at: DateTime<Local>,
    state: &TimerState,
) -> Result<String, TaskTokError> {
    let output = json!({
        "event": "transition",
        "at": at.to_rfc3339(),
        "transition": transition,
        "state": state,
    });
    Ok(serde_json::to_string(&output)?)
}

/// Format presets as JSON.
///
/// # Errors
///
/// Returns `TaskTokError::Parse` if JSON serialization fails.
pub fn format_presets_json(presets: &[Preset]) -> Result<String, TaskTokError> {
    let items: Vec<_> = presets
        .iter()
        .enumerate()
        .map(|(i, p)| {
            json!({
                "index": i + 1,
                "name": p.name,
                "work_minutes": p.work_minutes,
                "break_minutes": p.break_minutes,
            })
        })
        .collect();
    let output = json!({
        "count": presets.len(),
        "items": items,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a clock decomposition as JSON.
///
/// # Errors
///
/// Returns `TaskTokError::Parse` if JSON serialization fails.
pub fn format_time_json(parts: &TimeParts) -> Result<String, TaskTokError> {
    let output = json!({
        "hours": parts.hours,
        "minutes": parts.minutes,
        "seconds": parts.seconds,
        "display": parts.to_string(),
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Convert any serializable value to a pretty JSON string.
///
/// # Errors
///
/// Returns `TaskTokError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, TaskTokError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::{format_time, Phase, TimerController};

    #[test]
    fn test_format_state_json() {
        let state = TimerController::new().state();
        let json = format_state_json(&state).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["display"], "00:25:00");
        assert_eq!(value["state"]["phase"], "work");
        assert_eq!(value["state"]["remaining_seconds"], 1500);
        assert_eq!(value["state"]["is_running"], false);
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_format_transition_json() {
        let state = TimerController::new().state();
        let transition = Transition {
            from: Phase::Work,
            to: Phase::Break,
            completed_work_sessions: 3,
        };
        let json = format_transition_json(&transition, Local::now(), &state).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["event"], "transition");
        assert_eq!(value["transition"]["from"], "work");
        assert_eq!(value["transition"]["to"], "break");
        assert_eq!(value["transition"]["completed_work_sessions"], 3);
    }

    #[test]
    fn test_format_presets_json() {
        let json = format_presets_json(&Preset::builtin()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["count"], 4);
        assert_eq!(value["items"][3]["index"], 4);
        assert_eq!(value["items"][3]["work_minutes"], 60);
    }

    #[test]
    fn test_format_time_json() {
        let json = format_time_json(&format_time(3725)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["hours"], 1);
        assert_eq!(value["minutes"], 2);
        assert_eq!(value["seconds"], 5);
        assert_eq!(value["display"], "01:02:05");
    }
}
