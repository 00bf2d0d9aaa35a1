//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
    Frame,
};

use crate::timer::{Clock, Phase};
use crate::tui::app::{App, KEY_HELP};

/// Accent color for a phase.
const fn phase_color(phase: Phase) -> Color {
    match phase {
        Phase::Work => Color::Magenta,
        Phase::Break => Color::Cyan,
    }
}

/// Render the application UI.
pub fn render<C: Clock>(frame: &mut Frame<'_>, app: &App<C>) {
    let settings_height = if app.show_settings {
        u16::try_from(app.presets.all().len()).unwrap_or(u16::MAX).saturating_add(5)
    } else {
        0
    };

    // Create layout: header, clock, gauge, sessions, settings, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),               // Header
            Constraint::Length(5),               // Clock
            Constraint::Length(3),               // Progress
            Constraint::Length(3),               // Sessions
            Constraint::Length(settings_height), // Settings
            Constraint::Min(0),                  // Spacer
            Constraint::Length(1),               // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_clock(frame, app, chunks[1]);
    render_progress(frame, app, chunks[2]);
    render_sessions(frame, app, chunks[3]);
    if app.show_settings {
        render_settings(frame, app, chunks[4]);
    }
    render_status_bar(frame, app, chunks[6]);
}

/// Render the title and phase label.
fn render_header<C: Clock>(frame: &mut Frame<'_>, app: &App<C>, area: Rect) {
    let state = app.state();
    let color = phase_color(state.phase);

    let lines = vec![
        Line::from(Span::styled(
            "TASKTOK",
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            state.phase.headline(),
            Style::default().fg(color),
        )),
    ];

    let header = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );

    frame.render_widget(header, area);
}

/// Render the HH:MM:SS countdown.
fn render_clock<C: Clock>(frame: &mut Frame<'_>, app: &App<C>, area: Rect) {
    let state = app.state();
    let parts = state.time_parts();

    let digits = Style::default().add_modifier(Modifier::BOLD);
    let labels = Style::default().fg(Color::DarkGray);

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{:02}", parts.hours), digits),
            Span::raw("  :  "),
            Span::styled(format!("{:02}", parts.minutes), digits),
            Span::raw("  :  "),
            Span::styled(format!("{:02}", parts.seconds), digits),
        ]),
        Line::from(Span::styled("HRS     MIN     SEC", labels)),
        Line::from(if state.is_running {
            Span::styled("▶ running", Style::default().fg(Color::Green))
        } else {
            Span::styled("⏸ paused", Style::default().fg(Color::Yellow))
        }),
    ];

    let clock = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(clock, area);
}

/// Render progress through the current phase.
fn render_progress<C: Clock>(frame: &mut Frame<'_>, app: &App<C>, area: Rect) {
    let state = app.state();
    let ratio = app.progress().clamp(0.0, 1.0);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Progress "))
        .gauge_style(Style::default().fg(phase_color(state.phase)))
        .ratio(ratio);

    frame.render_widget(gauge, area);
}

/// Render the completed-session counter.
fn render_sessions<C: Clock>(frame: &mut Frame<'_>, app: &App<C>, area: Rect) {
    let state = app.state();
    let mut text = format!(
        "🏆 {} Session{} Complete!",
        state.completed_work_sessions,
        if state.completed_work_sessions == 1 { "" } else { "s" }
    );
    if let Some((transition, at)) = app.last_transition {
        text.push_str(&format!("   last: {} ended {}", transition.from, at.format("%H:%M")));
    }

    let sessions = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(sessions, area);
}

/// Render the settings panel: durations and presets.
fn render_settings<C: Clock>(frame: &mut Frame<'_>, app: &App<C>, area: Rect) {
    let state = app.state();

    let mut items = vec![
        ListItem::new(format!(
            "Work Time:  {:>2} min   (+/-)",
            state.work_duration_minutes
        )),
        ListItem::new(format!(
            "Break Time: {:>2} min   (]/[)",
            state.break_duration_minutes
        )),
        ListItem::new(Line::from(Span::styled(
            "✨ Quick Presets ✨",
            Style::default().add_modifier(Modifier::BOLD),
        ))),
    ];

    items.extend(app.presets.all().iter().enumerate().map(|(i, preset)| {
        let active = preset.work_minutes == state.work_duration_minutes
            && preset.break_minutes == state.break_duration_minutes;
        let style = if active {
            Style::default().fg(Color::Magenta)
        } else {
            Style::default()
        };
        ListItem::new(format!(
            "{}. {:<18} {}",
            i + 1,
            preset.name,
            preset.summary()
        ))
        .style(style)
    }));

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" ⚙ Timer Settings "),
    );

    frame.render_widget(list, area);
}

/// Render the status bar.
fn render_status_bar<C: Clock>(frame: &mut Frame<'_>, app: &App<C>, area: Rect) {
    let status_text = app.status.as_deref().unwrap_or(KEY_HELP);

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::timer::{PresetBook, TimerController};

    fn rendered_text<C: Clock>(app: &App<C>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_default_screen() {
        let app = App::new(TimerController::new(), PresetBook::default());
        let text = rendered_text(&app);

        assert!(text.contains("TASKTOK"));
        assert!(text.contains("Focus Time!"));
        assert!(text.contains("25"));
        assert!(text.contains("paused"));
        assert!(text.contains("0 Sessions Complete!"));
        assert!(!text.contains("Quick Presets"));
    }

    #[test]
    fn test_render_settings_panel() {
        let mut app = App::new(TimerController::new(), PresetBook::default());
        app.toggle_settings();
        let text = rendered_text(&app);

        assert!(text.contains("Timer Settings"));
        assert!(text.contains("1 Hour Focus"));
        assert!(text.contains("Work Time:  25 min"));
    }
}
