//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "modelgen",
    bin_name = "modelgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Write a data-model template with the model name filled in",
    long_about = "modelgen substitutes $mod, $modlc, $date and $year in a \
                  template and writes the result into the current directory.",
    after_help = "EXAMPLES:\n\
        \x20 modelgen write Invoice --template model.tmpl\n\
        \x20 modelgen write Invoice -t model.tmpl --extension rs --dry-run\n\
        \x20 cat model.tmpl | modelgen write Invoice -t -\n\
        \x20 modelgen completions bash > /usr/share/bash-completion/completions/modelgen",
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
    /// Render a template for a model and write it to the current directory.
    #[command(
        visible_alias = "w",
        about = "Write a model file from a template",
        after_help = "PLACEHOLDERS:\n\
            \x20 $mod    model name as given\n\
            \x20 $modlc  model name in lowercase\n\
            \x20 $date   today's date (YYYY-MM-DD)\n\
            \x20 $year   the current year\n\
            \x20 $$      a literal dollar sign"
    )]
    Write(WriteArgs),

    /// Initialise a modelgen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 modelgen init           # default location\n\
            \x20 modelgen init --local   # .modelgen.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 modelgen completions bash > ~/.local/share/bash-completion/completions/modelgen\n\
            \x20 modelgen completions zsh  > ~/.zfunc/_modelgen"
    )]
    Completions(CompletionsArgs),

    /// Inspect the modelgen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 modelgen config get naming.extension\n\
            \x20 modelgen config list"
    )]
    Config(ConfigCommands),
}

// ── write ─────────────────────────────────────────────────────────────────────

/// Arguments for `modelgen write`.
#[derive(Debug, Args)]
pub struct WriteArgs {
    /// Model name; seeds `$mod`, `$modlc` and the output file name.
    #[arg(value_name = "MODEL", help = "Model name")]
    pub model_name: OsString,

    /// Template file, or `-` to read standard input.
    #[arg(
        short = 't',
        long = "template",
        value_name = "FILE",
        help = "Template file ('-' for stdin)"
    )]
    pub template: PathBuf,

    /// Output file extension, overriding `naming.extension`.
    #[arg(
        short = 'e',
        long = "extension",
        value_name = "EXT",
        help = "Output file extension (default from config: py)"
    )]
    pub extension: Option<String>,

    /// Print the rendered file instead of writing it.
    #[arg(long = "dry-run", help = "Show what would be written without writing")]
    pub dry_run: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `modelgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.modelgen.toml` in the current directory.
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

/// Arguments for `modelgen completions`.
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

/// Subcommands for `modelgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `naming.extension`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
