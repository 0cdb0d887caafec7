//! Flags accepted before or after any subcommand.

use std::path::PathBuf;

use clap::Args;

/// Flags shared by every `stackup` subcommand.
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Log verbosity counter: `-v` info, `-vv` debug, `-vvv` trace.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "More log output (-v, -vv, -vvv)",
        long_help = "Raise the log level on stderr:
    (none)  - warnings and errors
    -v      - info (scaffold progress)
    -vv     - debug (plan steps, resolved paths)
    -vvv    - trace"
    )]
    pub verbose: u8,

    /// Only errors reach the terminal.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print errors and machine output only"
    )]
    pub quiet: bool,

    /// Honours `NO_COLOR` (<https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Never emit ANSI colors"
    )]
    pub no_color: bool,

    /// Replaces the user and project config files.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read settings from this TOML file only"
    )]
    pub config: Option<PathBuf>,

    /// Uncolored copy of the log, at the same level as stderr.
    #[arg(
        long = "log-file",
        global = true,
        value_name = "FILE",
        help = "Also write log events to FILE"
    )]
    pub log_file: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How results are printed on stdout"
    )]
    pub output_format: OutputFormat,
}

/// Rendering of stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human when stdout is a terminal, plain otherwise.
    #[default]
    Auto,
    /// Colored, with headers and the closing banner.
    Human,
    /// Same text as human, no ANSI codes.
    Plain,
    /// One JSON value per command.
    Json,
}
