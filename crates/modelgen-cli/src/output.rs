//! Output on stdout: status lines, payloads and JSON documents.
//!
//! Status lines (`✓`, `⚠`, `ℹ`) are chatter and vanish under `--quiet`.
//! Payloads, such as a dry-run rendering or `config get`, are the command's
//! result and are always written.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::{OwoColorize, Style};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Where and how command results are printed.
pub struct OutputManager {
    format: OutputFormat,
    quiet: bool,
    color: bool,
    term: Term,
}

impl OutputManager {
    /// Resolve the format (flag, then config, then TTY detection) and colour.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let format = match (args.output_format, config.output.format) {
            (OutputFormat::Auto, OutputFormat::Auto) if io::stdout().is_terminal() => {
                OutputFormat::Human
            }
            (OutputFormat::Auto, OutputFormat::Auto) => OutputFormat::Plain,
            (OutputFormat::Auto, configured) => configured,
            (flag, _) => flag,
        };
        let color = format == OutputFormat::Human && !args.no_color && !config.output.no_color;

        Self {
            format,
            quiet: args.quiet,
            color,
            term: Term::stdout(),
        }
    }

    /// Command payload; written even in quiet mode.
    pub fn payload(&self, text: &str) -> io::Result<()> {
        self.term.write_str(text)?;
        if !text.ends_with('\n') {
            self.term.write_line("")?;
        }
        Ok(())
    }

    /// One JSON document on its own line.
    pub fn json(&self, value: &serde_json::Value) -> io::Result<()> {
        self.term.write_line(&value.to_string())
    }

    /// `✓ Wrote ./invoice.py`
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.status('\u{2713}', Style::new().green(), msg)
    }

    /// `⚠ ...`, for outcomes that succeeded without doing anything.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.status('\u{26a0}', Style::new().yellow(), msg)
    }

    /// `ℹ ...`
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.status('\u{2139}', Style::new().blue(), msg)
    }

    /// Bold cyan heading; plain text without colour.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.color {
            text.cyan().bold().to_string()
        } else {
            text.to_owned()
        };
        self.term.write_line(&line)
    }

    pub fn supports_color(&self) -> bool {
        self.color
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    fn status(&self, symbol: char, style: Style, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&self.status_line(symbol, style, msg))
    }

    fn status_line(&self, symbol: char, style: Style, msg: &str) -> String {
        if self.color {
            format!("{} {}", symbol.style(style.bold()), msg.style(style))
        } else {
            format!("{symbol} {msg}")
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
