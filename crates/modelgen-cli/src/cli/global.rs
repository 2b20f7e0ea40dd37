//! Flags accepted by every subcommand, flattened into [`super::Cli`].

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more (-v info and writer phases, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print nothing but errors and command payloads
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Never emit ANSI colours (also honours NO_COLOR)
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Read settings from FILE instead of the user and project config files
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// How results are printed on stdout
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Auto)]
    pub output_format: OutputFormat,
}

impl GlobalArgs {
    /// Any `-v` turns on the template writer's phase messages.
    pub fn writer_verbose(&self) -> bool {
        self.verbose > 0
    }
}

/// Output format for command results; also settable as `output.format`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` when piped
    #[default]
    Auto,
    /// Status symbols with colour
    Human,
    /// Status symbols without colour
    Plain,
    /// One JSON object per command
    Json,
}
