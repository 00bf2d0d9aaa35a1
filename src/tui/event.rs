//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::TaskTokError;

/// Longest time to block waiting for input.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start or pause the countdown.
    ToggleRunning,
    /// Rewind the current phase.
    Reset,
    /// Zero the session counter.
    ResetSessions,
    /// Change the work duration by this many minutes.
    AdjustWork(i64),
    /// Change the break duration by this many minutes.
    AdjustBreak(i64),
    /// Apply the preset at this 1-based position.
    Preset(usize),
    /// Open or close the settings panel.
    ToggleSettings,
    /// Show key help.
    Help,
}

/// Wait up to `timeout` (capped at the poll interval) for a key press.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(timeout: Option<Duration>) -> Result<Option<Action>, TaskTokError> {
    let timeout = timeout.map_or(POLL_INTERVAL, |t| t.min(POLL_INTERVAL));

    if event::poll(timeout)
        .map_err(|e| TaskTokError::Terminal(format!("Event poll failed: {e}")))?
    {
        if let Event::Key(key) = event::read()
            .map_err(|e| TaskTokError::Terminal(format!("Event read failed: {e}")))?
        {
            if key.kind == KeyEventKind::Press {
                return Ok(map_key(key));
            }
        }
    }

    Ok(None)
}

/// Translate a key press into an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),

        KeyCode::Char(' ' | 's') | KeyCode::Enter => Some(Action::ToggleRunning),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Char('c') => Some(Action::ResetSessions),

        // Durations
        KeyCode::Char('+' | '=') | KeyCode::Up => Some(Action::AdjustWork(1)),
        KeyCode::Char('-' | '_') | KeyCode::Down => Some(Action::AdjustWork(-1)),
        KeyCode::Char(']') | KeyCode::Right => Some(Action::AdjustBreak(1)),
        KeyCode::Char('[') | KeyCode::Left => Some(Action::AdjustBreak(-1)),

        // Presets
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| usize::try_from(d).ok())
            .map(Action::Preset),

        KeyCode::Char('o') => Some(Action::ToggleSettings),
        KeyCode::Char('?') => Some(Action::Help),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(map_key(key(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_timer_keys() {
        assert_eq!(map_key(key(KeyCode::Char(' '))), Some(Action::ToggleRunning));
        assert_eq!(map_key(key(KeyCode::Char('r'))), Some(Action::Reset));
        assert_eq!(map_key(key(KeyCode::Char('c'))), Some(Action::ResetSessions));
        assert_eq!(map_key(key(KeyCode::Char('+'))), Some(Action::AdjustWork(1)));
        assert_eq!(map_key(key(KeyCode::Char('['))), Some(Action::AdjustBreak(-1)));
    }

    #[test]
    fn test_preset_keys() {
        assert_eq!(map_key(key(KeyCode::Char('1'))), Some(Action::Preset(1)));
        assert_eq!(map_key(key(KeyCode::Char('9'))), Some(Action::Preset(9)));
        assert_eq!(map_key(key(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_unmapped_key() {
        assert_eq!(map_key(key(KeyCode::Char('z'))), None);
        assert_eq!(map_key(key(KeyCode::Tab)), None);
    }
}
