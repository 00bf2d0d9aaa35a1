//! tasktok - A Pomodoro-style focus timer
//!
//! This crate provides the timer core (a work/break countdown state machine
//! with session counting), plus a terminal UI and command line around it.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod timer;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::TaskTokError;
pub use timer::{Phase, TimerController, TimerState};
