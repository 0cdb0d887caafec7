//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "stackup",
    bin_name = "stackup",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Scaffold a database, API and frontend wired together with docker-compose",
    long_about = "stackup asks which database, API and frontend you want, runs their \
                  boilerplate generators, and writes a docker-compose.yml that links \
                  the services together.",
    after_help = "EXAMPLES:\n\
        \x20 stackup new\n\
        \x20 stackup new --name shop --database postgresql --api express --front-back react --yes\n\
        \x20 stackup compose --database mysql --api flask --front-back none\n\
        \x20 stackup completions bash > /usr/share/bash-completion/completions/stackup",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scaffold a new stack in a directory.
    #[command(
        visible_alias = "n",
        about = "Scaffold a new stack",
        after_help = "EXAMPLES:\n\
            \x20 stackup new                                   # answer the wizard\n\
            \x20 stackup new --yes                             # take every default\n\
            \x20 stackup new --database none --api express --front-back vue --dir ./app\n\
            \x20 stackup new --database mysql --yes --dry-run  # show the plan only"
    )]
    New(NewArgs),

    /// List the supported choices per tier.
    #[command(
        visible_alias = "ls",
        about = "List supported databases, APIs and frontends",
        after_help = "EXAMPLES:\n\
            \x20 stackup list\n\
            \x20 stackup list --format json"
    )]
    List(ListArgs),

    /// Print the docker-compose document for a selection.
    #[command(
        about = "Print the docker-compose.yml for a selection",
        after_help = "EXAMPLES:\n\
            \x20 stackup compose --database postgresql --api cocasus --front-back react\n\
            \x20 stackup compose --front-back vue > docker-compose.yml"
    )]
    Compose(ComposeArgs),

    /// Initialise a stackup configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 stackup init           # platform config directory\n\
            \x20 stackup init --local   # .stackup.toml in the current directory\n\
            \x20 stackup init --force   # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stackup completions bash > ~/.local/share/bash-completion/completions/stackup\n\
            \x20 stackup completions zsh  > ~/.zfunc/_stackup\n\
            \x20 stackup completions fish > ~/.config/fish/completions/stackup.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the stackup configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 stackup config get defaults.database\n\
            \x20 stackup config list\n\
            \x20 stackup config path"
    )]
    Config(ConfigCommands),
}

// ── shared selection flags ────────────────────────────────────────────────────

/// Answers that can be given on the command line instead of the wizard.
///
/// Choices are kept as strings so that an unknown value is reported by the
/// domain with the list of supported choices.
#[derive(Debug, Clone, Default, Args)]
pub struct SelectionArgs {
    /// Project name, used in image and container names.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Project name")]
    pub name: Option<String>,

    #[arg(
        short = 'd',
        long = "database",
        value_name = "DATABASE",
        help = "Database: none, mysql, postgresql"
    )]
    pub database: Option<String>,

    #[arg(
        short = 'a',
        long = "api",
        value_name = "API",
        help = "API framework: none, cocasus, express, flask"
    )]
    pub api: Option<String>,

    #[arg(
        short = 'f',
        long = "front-back",
        value_name = "FRAMEWORK",
        help = "Frontend/backend framework: none, cocasus, react, vue, flask"
    )]
    pub front_back: Option<String>,

    #[arg(long = "db-name", value_name = "NAME", help = "Database name")]
    pub db_name: Option<String>,

    #[arg(long = "db-user", value_name = "USER", help = "Database user")]
    pub db_user: Option<String>,

    #[arg(long = "db-password", value_name = "PASSWORD", help = "Database user password")]
    pub db_password: Option<String>,

    #[arg(
        long = "db-root-password",
        value_name = "PASSWORD",
        help = "Database root password"
    )]
    pub db_root_password: Option<String>,
}

impl SelectionArgs {
    /// Whether any credential flag was given.
    pub fn has_credentials(&self) -> bool {
        self.db_name.is_some()
            || self.db_user.is_some()
            || self.db_password.is_some()
            || self.db_root_password.is_some()
    }
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `stackup new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Directory to scaffold into (default: current directory).
    #[arg(
        short = 'o',
        long = "dir",
        value_name = "DIR",
        help = "Directory to scaffold into (default: current directory)"
    )]
    pub dir: Option<PathBuf>,

    /// Take defaults for every unanswered question.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Do not prompt; use configured defaults for missing answers"
    )]
    pub yes: bool,

    /// Empty a non-empty target directory without asking (destructive).
    #[arg(long = "clear", help = "Clear a non-empty directory without asking")]
    pub clear: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── compose ───────────────────────────────────────────────────────────────────

/// Arguments for `stackup compose`.
///
/// Never prompts: missing answers come from the configured defaults.
#[derive(Debug, Args)]
pub struct ComposeArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `stackup list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One `tier:choice` per line.
    List,
    /// JSON object keyed by tier.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `stackup init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.stackup.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `stackup completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `stackup config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.database`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_new_with_every_flag() {
        let cli = Cli::parse_from([
            "stackup",
            "new",
            "--name",
            "shop",
            "--database",
            "postgresql",
            "--api",
            "express",
            "--front-back",
            "react",
            "--db-name",
            "orders",
            "--dir",
            "/tmp/shop",
            "--yes",
            "--clear",
            "--dry-run",
        ]);
        let Commands::New(args) = cli.command else {
            panic!("expected New command");
        };
        assert_eq!(args.selection.name.as_deref(), Some("shop"));
        assert_eq!(args.selection.database.as_deref(), Some("postgresql"));
        assert_eq!(args.selection.api.as_deref(), Some("express"));
        assert_eq!(args.selection.front_back.as_deref(), Some("react"));
        assert_eq!(args.dir, Some(PathBuf::from("/tmp/shop")));
        assert!(args.selection.has_credentials());
        assert!(args.yes && args.clear && args.dry_run);
    }

    #[test]
    fn new_without_flags_leaves_everything_unanswered() {
        let cli = Cli::parse_from(["stackup", "n"]);
        let Commands::New(args) = cli.command else {
            panic!("expected New command");
        };
        assert!(args.selection.name.is_none());
        assert!(args.selection.database.is_none());
        assert!(!args.selection.has_credentials());
        assert!(!args.yes);
    }

    #[test]
    fn compose_shares_selection_flags() {
        let cli = Cli::parse_from(["stackup", "compose", "-d", "mysql", "-a", "flask", "-f", "vue"]);
        let Commands::Compose(args) = cli.command else {
            panic!("expected Compose command");
        };
        assert_eq!(args.selection.database.as_deref(), Some("mysql"));
        assert_eq!(args.selection.api.as_deref(), Some("flask"));
        assert_eq!(args.selection.front_back.as_deref(), Some("vue"));
    }

    #[test]
    fn list_format_defaults_to_table() {
        let cli = Cli::parse_from(["stackup", "ls"]);
        let Commands::List(args) = cli.command else {
            panic!("expected List command");
        };
        assert_eq!(args.format, ListFormat::Table);
    }

    #[test]
    fn log_file_is_global() {
        let cli = Cli::parse_from(["stackup", "list", "--log-file", "run.log"]);
        assert_eq!(cli.global.log_file, Some(PathBuf::from("run.log")));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["stackup", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
