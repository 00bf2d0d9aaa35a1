//! Headless countdown runner.
//!
//! Drives the timer from the command line without the interactive screen.
//! The runner plays the user's part: after every phase change it starts the
//! next phase itself, until enough work sessions have been completed.

use std::io::{self, Write};
use std::time::Duration;

use chrono::Local;
use crossterm::{
    queue,
    terminal::{Clear, ClearType},
};
use tracing::info;

use crate::cli::args::{OutputFormat, RunArgs};
use crate::config::Config;
use crate::error::TaskTokError;
use crate::output::{format_state, format_state_json, format_status_line, format_transition};
use crate::timer::scheduler::TICK;
use crate::timer::{Clock, Phase, Scheduler, TimerController};

use super::build_controller;

/// Execute run command
///
/// # Errors
///
/// Returns an error if the preset is unknown or stdout cannot be written.
pub fn run(args: &RunArgs, config: &Config, format: OutputFormat) -> Result<String, TaskTokError> {
    let mut controller = build_controller(&args.timer, config)?;
    let mut scheduler = Scheduler::system();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    run_session(
        &mut controller,
        &mut scheduler,
        args.cycles,
        format,
        &mut out,
        std::thread::sleep,
    )
}

/// Count down until `cycles` more work sessions have completed.
///
/// `sleep` is called between ticks; the returned string is the final
/// snapshot.
///
/// # Errors
///
/// Returns an error if writing progress to `out` fails.
pub fn run_session<C, W, S>(
    controller: &mut TimerController,
    scheduler: &mut Scheduler<C>,
    cycles: u32,
    format: OutputFormat,
    out: &mut W,
    mut sleep: S,
) -> Result<String, TaskTokError>
where
    C: Clock,
    W: Write,
    S: FnMut(Duration),
{
    let target = controller.state().completed_work_sessions + cycles;
    info!(cycles, target, "headless run started");

    if format == OutputFormat::Json {
        writeln!(out, "{}", format_state_json(&controller.state())?)?;
    }

    controller.start();
    scheduler.resync();

    'outer: loop {
        for transition in scheduler.poll(controller) {
            let state = controller.state();
            if format == OutputFormat::Pretty {
                queue!(out, Clear(ClearType::CurrentLine))?;
                write!(out, "\r")?;
            }
            writeln!(
                out,
                "{}",
                format_transition(&transition, Local::now(), &state, format)?
            )?;

            if transition.from == Phase::Work && transition.completed_work_sessions >= target {
                break 'outer;
            }
        }

        if !controller.is_running() {
            controller.start();
            scheduler.resync();
        }

        if format == OutputFormat::Pretty {
            write!(out, "\r{}", format_status_line(&controller.state()))?;
        }
        out.flush()?;

        sleep(scheduler.until_next_tick(controller).unwrap_or(TICK));
    }

    controller.pause();
    info!(
        completed = controller.state().completed_work_sessions,
        "headless run finished"
    );
    format_state(&controller.state(), format)
}
