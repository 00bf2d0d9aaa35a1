use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "tasktok")]
#[command(about = "A Pomodoro-style focus timer for the terminal")]
#[command(long_about = "tasktok - A Pomodoro-style focus timer

Alternates Work and Break countdowns and counts the work sessions you
finish. Run without a command to open the interactive timer.

QUICK START:
  tasktok                       Open the interactive timer
  tasktok --preset 4            Start from the '1 Hour Focus' preset
  tasktok run --cycles 2        Headless countdown, two work sessions
  tasktok presets               List quick presets

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  tasktok <command> --help")]
#[command(version, propagate_version = true, args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output,
    /// or 'json' for machine-readable output suitable for scripting.
    /// Defaults to the config file's `general.default_output`.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Log filter (error, warn, info, debug, trace or a full directive)
    ///
    /// Overrides TASKTOK_LOG and the config file.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Timer options for the default interactive command.
    #[command(flatten)]
    pub timer: TimerArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive timer (default)
    ///
    /// Full-screen countdown with phase label, progress gauge,
    /// session counter and quick presets.
    ///
    /// # Keys
    ///
    ///   space / s   Start or pause
    ///   r           Reset the current phase
    ///   c           Reset the session counter
    ///   + / -       Work duration up / down
    ///   ] / [       Break duration up / down
    ///   1-9         Apply a preset
    ///   o           Toggle the settings panel
    ///   q / Esc     Quit
    #[command(alias = "t")]
    Tui(TimerArgs),

    /// Run a countdown without the interactive screen
    ///
    /// Starts a Work phase immediately and keeps going through
    /// breaks until the requested number of work sessions is done.
    ///
    /// # Examples
    ///
    ///   tasktok run                      One 25-minute session
    ///   tasktok run --work 50 --break 10 Custom durations
    ///   tasktok run --preset "1 hour focus" --cycles 3
    ///   tasktok run -o json              JSON event per phase change
    Run(RunArgs),

    /// List quick presets
    ///
    /// Shows the built-in presets and any defined under `presets:`
    /// in the config file, with the index used by --preset.
    Presets,

    /// Format a number of seconds as HH:MM:SS
    ///
    /// Example: tasktok format 3725   ->   01:02:05
    Format {
        /// Total seconds
        seconds: u32,
    },

    /// Show or create the configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// Example: tasktok completions zsh > ~/.zfunc/_tasktok
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,

        /// Show installation instructions instead
        #[arg(long, short = 'i')]
        install: bool,
    },
}

/// Options that seed the timer's durations.
#[derive(Args, Clone, Debug, Default)]
pub struct TimerArgs {
    /// Work duration in minutes (1-60; invalid values fall back to 25)
    #[arg(long, short = 'w')]
    pub work: Option<String>,

    /// Break duration in minutes (1-30; invalid values fall back to 5)
    #[arg(long = "break", short = 'b')]
    pub break_minutes: Option<String>,

    /// Preset to start from, by number or name (see 'tasktok presets')
    ///
    /// --work and --break are applied on top of the preset.
    #[arg(long, short = 'p')]
    pub preset: Option<String>,
}

/// Arguments for the headless runner.
#[derive(Args, Clone, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub timer: TimerArgs,

    /// Number of work sessions to complete before exiting
    #[arg(long, short = 'n', default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub cycles: u32,
}

/// Arguments for config management.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Print the config file location
    Path,

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long, short = 'f')]
        force: bool,
    },
}
