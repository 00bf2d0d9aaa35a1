//! Application state for the TUI.

use chrono::{DateTime, Local};
use tracing::info;

use crate::timer::{
    Clock, Phase, PresetBook, Scheduler, SystemClock, TimerController, TimerState, Transition,
};

/// Default key help shown in the status bar.
pub const KEY_HELP: &str =
    "space:start/pause | r:reset | c:clear count | +/-:work | ]/[:break | 1-9:preset | o:settings | q:quit";

/// Application state.
pub struct App<C: Clock = SystemClock> {
    /// The timer being displayed.
    controller: TimerController,
    /// Delivers ticks while the timer runs.
    scheduler: Scheduler<C>,
    /// Presets selectable with the number keys.
    pub presets: PresetBook,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the settings panel is open.
    pub show_settings: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Most recent phase change and when it happened.
    pub last_transition: Option<(Transition, DateTime<Local>)>,
}

impl App<SystemClock> {
    /// Create a new app instance on the system clock.
    #[must_use]
    pub fn new(controller: TimerController, presets: PresetBook) -> Self {
        Self::with_scheduler(controller, presets, Scheduler::system())
    }
}

impl<C: Clock> App<C> {
    /// Create an app with a specific scheduler.
    pub fn with_scheduler(
        controller: TimerController,
        presets: PresetBook,
        scheduler: Scheduler<C>,
    ) -> Self {
        Self {
            controller,
            scheduler,
            presets,
            status: Some("Press ? for help".to_string()),
            show_settings: false,
            should_quit: false,
            last_transition: None,
        }
    }

    /// Current timer snapshot.
    #[must_use]
    pub fn state(&self) -> TimerState {
        self.controller.state()
    }

    /// Fraction of the current phase elapsed.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.controller.progress()
    }

    /// Deliver due ticks and report any phase change.
    pub fn on_tick(&mut self) {
        for transition in self.scheduler.poll(&mut self.controller) {
            let at = Local::now();
            info!(to = %transition.to, "phase changed in tui");
            self.status = Some(match transition.to {
                Phase::Break => format!(
                    "Session {} complete at {}! Press space to start your break",
                    transition.completed_work_sessions,
                    at.format("%H:%M")
                ),
                Phase::Work => format!(
                    "Break over at {}. Press space to focus",
                    at.format("%H:%M")
                ),
            });
            self.last_transition = Some((transition, at));
        }
    }

    /// How long the event loop may wait before the next tick is due.
    #[must_use]
    pub fn until_next_tick(&self) -> Option<std::time::Duration> {
        self.scheduler.until_next_tick(&self.controller)
    }

    /// Start when paused, pause when running.
    pub fn toggle_running(&mut self) {
        if self.controller.is_running() {
            self.controller.pause();
            self.status = Some("Paused".to_string());
        } else {
            self.controller.start();
            self.scheduler.resync();
            self.status = Some(format!("{} started", self.controller.phase()));
        }
    }

    /// Rewind the current phase.
    pub fn reset(&mut self) {
        self.controller.reset();
        self.scheduler.resync();
        self.status = Some(format!("{} reset", self.controller.phase()));
    }

    /// Zero the session counter.
    pub fn reset_sessions(&mut self) {
        self.controller.reset_session_count();
        self.status = Some("Session count cleared".to_string());
    }

    /// Change the work duration by `delta` minutes, never below one.
    pub fn adjust_work(&mut self, delta: i64) {
        let current = i64::from(self.controller.state().work_duration_minutes);
        self.controller.set_work_duration((current + delta).max(1));
        if self.controller.phase() == Phase::Work {
            self.scheduler.resync();
        }
        self.status = Some(format!(
            "Work: {} min",
            self.controller.state().work_duration_minutes
        ));
    }

    /// Change the break duration by `delta` minutes, never below one.
    pub fn adjust_break(&mut self, delta: i64) {
        let current = i64::from(self.controller.state().break_duration_minutes);
        self.controller.set_break_duration((current + delta).max(1));
        if self.controller.phase() == Phase::Break {
            self.scheduler.resync();
        }
        self.status = Some(format!(
            "Break: {} min",
            self.controller.state().break_duration_minutes
        ));
    }

    /// Apply the preset at a 1-based position.
    pub fn apply_preset(&mut self, index: usize) {
        let Some(preset) = self.presets.get(index).cloned() else {
            self.status = Some(format!("No preset {index}"));
            return;
        };
        self.controller.apply_preset(
            i64::from(preset.work_minutes),
            i64::from(preset.break_minutes),
        );
        self.scheduler.resync();
        self.status = Some(format!("Preset: {} ({})", preset.name, preset.summary()));
    }

    /// Open or close the settings panel.
    pub fn toggle_settings(&mut self) {
        self.show_settings = !self.show_settings;
    }

    /// Show key help in the status bar.
    pub fn show_help(&mut self) {
        self.status = Some(KEY_HELP.to_string());
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::{Duration, Instant};

    use super::*;

    struct TestClock(Arc<Mutex<Instant>>);

    impl Clock for TestClock {
        fn now(&self) -> Instant {
            *self.0.lock().unwrap()
        }
    }

    fn test_app(work: i64, brk: i64) -> (App<TestClock>, Arc<Mutex<Instant>>) {
        let now = Arc::new(Mutex::new(Instant::now()));
        let scheduler = Scheduler::new(TestClock(Arc::clone(&now)));
        let app = App::with_scheduler(
            TimerController::with_durations(work, brk),
            PresetBook::default(),
            scheduler,
        );
        (app, now)
    }

    fn advance(now: &Arc<Mutex<Instant>>, secs: u64) {
        advance_ms(now, secs * 1000);
    }

    fn advance_ms(now: &Arc<Mutex<Instant>>, millis: u64) {
        *now.lock().unwrap() += Duration::from_millis(millis);
    }

    #[test]
    fn test_toggle_running() {
        let (mut app, now) = test_app(25, 5);
        app.toggle_running();
        assert!(app.state().is_running);

        advance(&now, 3);
        app.on_tick();
        assert_eq!(app.state().remaining_seconds, 1497);

        app.toggle_running();
        assert!(!app.state().is_running);
        advance(&now, 30);
        app.on_tick();
        assert_eq!(app.state().remaining_seconds, 1497);
    }

    #[test]
    fn test_transition_sets_status() {
        let (mut app, now) = test_app(1, 1);
        app.toggle_running();
        advance(&now, 60);
        app.on_tick();

        let state = app.state();
        assert_eq!(state.phase, Phase::Break);
        assert!(!state.is_running);
        assert!(app.last_transition.is_some());
        assert!(app.status.as_deref().unwrap_or("").contains("Session 1 complete"));
    }

    #[test]
    fn test_adjust_durations_floor_at_one() {
        let (mut app, _) = test_app(1, 1);
        app.adjust_work(-1);
        assert_eq!(app.state().work_duration_minutes, 1);
        app.adjust_work(5);
        assert_eq!(app.state().work_duration_minutes, 6);
        assert_eq!(app.state().remaining_seconds, 360);

        app.adjust_break(100);
        assert_eq!(app.state().break_duration_minutes, 30);
    }

    #[test]
    fn test_adjusting_other_phase_keeps_partial_second() {
        let (mut app, now) = test_app(25, 5);
        app.toggle_running();

        for _ in 0..10 {
            advance_ms(&now, 900);
            app.adjust_break(1);
            app.adjust_break(-1);
            app.on_tick();
        }

        let state = app.state();
        assert_eq!(state.phase, Phase::Work);
        assert_eq!(state.break_duration_minutes, 5);
        assert_eq!(state.remaining_seconds, 1491);
    }

    #[test]
    fn test_adjusting_current_phase_restarts_second() {
        let (mut app, now) = test_app(25, 5);
        app.toggle_running();

        advance_ms(&now, 900);
        app.adjust_work(1);
        advance_ms(&now, 900);
        app.on_tick();

        assert_eq!(app.state().remaining_seconds, 1560);
        assert!(app.state().is_running);
    }

    #[test]
    fn test_apply_preset() {
        let (mut app, _) = test_app(25, 5);
        app.toggle_running();
        app.apply_preset(4);
        let state = app.state();
        assert_eq!(state.remaining_seconds, 3600);
        assert!(!state.is_running);

        app.apply_preset(9);
        assert_eq!(app.status.as_deref(), Some("No preset 9"));
        assert_eq!(app.state().remaining_seconds, 3600);
    }

    #[test]
    fn test_reset_and_sessions() {
        let (mut app, now) = test_app(1, 1);
        app.toggle_running();
        advance(&now, 60);
        app.on_tick();
        assert_eq!(app.state().completed_work_sessions, 1);

        app.toggle_running();
        advance(&now, 10);
        app.on_tick();
        app.reset();
        assert_eq!(app.state().remaining_seconds, 60);
        assert_eq!(app.state().phase, Phase::Break);

        app.reset_sessions();
        assert_eq!(app.state().completed_work_sessions, 0);
    }
}
