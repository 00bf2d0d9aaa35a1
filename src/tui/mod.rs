//! Terminal User Interface (TUI) for tasktok.
//!
//! The interactive timer screen. Built with ratatui and crossterm. The event
//! loop owns the timer: it forwards key presses to [`App`] and lets the
//! scheduler deliver ticks between redraws.

mod app;
mod event;
mod ui;

pub use app::App;
pub use event::{map_key, Action};

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::info;

use crate::error::TaskTokError;
use crate::timer::{Clock, PresetBook, TimerController};

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(controller: TimerController, presets: PresetBook) -> Result<(), TaskTokError> {
    // Setup terminal
    enable_raw_mode()
        .map_err(|e| TaskTokError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| TaskTokError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| TaskTokError::Terminal(format!("Failed to create terminal: {e}")))?;

    // Create app state and run main loop
    let mut app = App::new(controller, presets);
    info!("tui started");
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    let state = app.state();
    info!(
        completed = state.completed_work_sessions,
        "tui closed"
    );
    result
}

/// Run the main application loop.
fn run_app<B: Backend, C: Clock>(
    terminal: &mut Terminal<B>,
    app: &mut App<C>,
) -> Result<(), TaskTokError> {
    while !app.should_quit {
        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| TaskTokError::Terminal(format!("Failed to draw: {e}")))?;

        // Handle events
        if let Some(action) = event::handle_events(app.until_next_tick())? {
            apply(app, action);
        }

        app.on_tick();
    }

    Ok(())
}

/// Apply an action to the app.
pub fn apply<C: Clock>(app: &mut App<C>, action: Action) {
    match action {
        Action::Quit => app.should_quit = true,
        Action::ToggleRunning => app.toggle_running(),
        Action::Reset => app.reset(),
        Action::ResetSessions => app.reset_sessions(),
        Action::AdjustWork(delta) => app.adjust_work(delta),
        Action::AdjustBreak(delta) => app.adjust_break(delta),
        Action::Preset(index) => app.apply_preset(index),
        Action::ToggleSettings => app.toggle_settings(),
        Action::Help => app.show_help(),
    }
}
