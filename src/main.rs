use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use tasktok::cli::args::{Cli, Commands};
use tasktok::cli::commands;
use tasktok::config::{Config, Paths};
use tasktok::error::TaskTokError;
use tasktok::logging::{self, LogTarget, LOG_ENV};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        let code = e
            .downcast_ref::<TaskTokError>()
            .map_or(1, TaskTokError::exit_code);
        std::process::exit(code);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = Paths::new()?;
    let config = Config::load_from_path(&paths.config_file).context("loading configuration")?;
    config.general.color.apply();
    let format = cli.output.unwrap_or(config.general.default_output);

    let level = logging::resolve_level(
        cli.log_level.as_deref(),
        std::env::var(LOG_ENV).ok(),
        &config.logging.level,
    );
    let interactive = matches!(cli.command, None | Some(Commands::Tui(_)));
    let target = if interactive {
        LogTarget::File(
            config
                .logging
                .file
                .clone()
                .unwrap_or_else(|| paths.log_file.clone()),
        )
    } else {
        LogTarget::Stderr
    };
    logging::init(&level, &target)?;
    tracing::debug!(?format, ?target, "starting");

    let output = match cli.command {
        None => {
            let controller = commands::build_controller(&cli.timer, &config)?;
            tasktok::tui::run(controller, config.preset_book())?;
            String::new()
        }
        Some(Commands::Tui(args)) => {
            let controller = commands::build_controller(&args, &config)?;
            tasktok::tui::run(controller, config.preset_book())?;
            String::new()
        }
        Some(Commands::Run(args)) => commands::run(&args, &config, format)?,
        Some(Commands::Presets) => commands::presets(&config, format)?,
        Some(Commands::Format { seconds }) => commands::format_seconds(seconds, format)?,
        Some(Commands::Config(args)) => commands::config(&paths, &config, &args.command, format)?,
        Some(Commands::Completions { shell, install }) => commands::completions(shell, install)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
