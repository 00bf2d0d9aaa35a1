//! Tick scheduling.
//!
//! The controller only knows what a tick does. [`Scheduler`] decides when
//! ticks happen: it measures wall-clock time through a [`Clock`] and hands
//! the controller one tick per whole elapsed second, and only while it is
//! running.

use std::time::{Duration, Instant};

use tracing::trace;

use super::controller::{TimerController, Transition};

/// Length of one tick.
pub const TICK: Duration = Duration::from_secs(1);

/// Source of the current time.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    /// The current instant.
    fn now(&self) -> Instant;
}

/// The real monotonic clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Delivers ticks to a [`TimerController`] as time passes.
#[derive(Debug)]
pub struct Scheduler<C: Clock = SystemClock> {
    clock: C,
    last: Instant,
    carry: Duration,
}

impl Scheduler<SystemClock> {
    /// Scheduler backed by the system clock.
    #[must_use]
    pub fn system() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> Scheduler<C> {
    /// Create a scheduler; time starts counting from now.
    pub fn new(clock: C) -> Self {
        let last = clock.now();
        Self {
            clock,
            last,
            carry: Duration::ZERO,
        }
    }

    /// Forget any partially elapsed second.
    ///
    /// Call after starting the timer or rewinding it, so the first tick
    /// lands a full second later.
    pub fn resync(&mut self) {
        self.last = self.clock.now();
        self.carry = Duration::ZERO;
    }

    /// Deliver every tick that is due and return the transitions they caused.
    ///
    /// Time that passes while the controller is paused is dropped. When a
    /// tick ends a phase the controller stops, and the leftover fraction of a
    /// second is dropped with it.
    pub fn poll(&mut self, controller: &mut TimerController) -> Vec<Transition> {
        let now = self.clock.now();
        let elapsed = now.saturating_duration_since(self.last);
        self.last = now;

        if !controller.is_running() {
            self.carry = Duration::ZERO;
            return Vec::new();
        }

        self.carry += elapsed;
        let mut transitions = Vec::new();
        while self.carry >= TICK && controller.is_running() {
            self.carry -= TICK;
            if let Some(transition) = controller.tick() {
                transitions.push(transition);
            }
        }

        if !controller.is_running() {
            self.carry = Duration::ZERO;
        }

        trace!(carry_ms = self.carry.as_millis(), "scheduler polled");
        transitions
    }

    /// How long until the next tick is due, or `None` while paused.
    #[must_use]
    pub fn until_next_tick(&self, controller: &TimerController) -> Option<Duration> {
        if !controller.is_running() {
            return None;
        }
        let since_last = self.clock.now().saturating_duration_since(self.last);
        Some(TICK.saturating_sub(self.carry + since_last))
    }
}
