//! # modelgen CLI
//!
//! Writes a data-model file from a template with the model name filled in.
//!
//! Configuration is loaded before logging starts because `writer.verbose`
//! feeds the log level. Failures up to that point are reported without
//! `tracing`.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                      |
//! |------|----------------------------------------------|
//! |  0   | Success, or `--help` / `--version`           |
//! |  1   | File system or other internal failure        |
//! |  2   | Bad arguments, empty input, broken template  |
//! |  3   | Template file not found                      |
//! |  4   | Configuration could not be loaded            |

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

/// Everything a command needs once startup succeeded.
struct Session {
    cli: Cli,
    config: AppConfig,
    output: OutputManager,
}

fn main() -> ExitCode {
    // Missing .env is fine.
    let _ = dotenvy::dotenv();

    let session = match start() {
        Ok(session) => session,
        Err(code) => return code,
    };

    let verbose = session.cli.global.verbose > 0;
    let color = session.output.supports_color() && std::io::stderr().is_terminal();

    match run(session) {
        Ok(()) => {
            info!("modelgen finished");
            ExitCode::SUCCESS
        }
        Err(err) => {
            err.log();
            eprint!("{}", err.report(verbose, color));
            ExitCode::from(err.exit_code())
        }
    }
}

/// Parse arguments, load config, install logging and build the output.
fn start() -> Result<Session, ExitCode> {
    let cli = Cli::try_parse().map_err(|e| {
        let _ = e.print();
        // --help and --version are "errors" printed to stdout.
        ExitCode::from(if e.use_stderr() { 2 } else { 0 })
    })?;

    let config = AppConfig::load(cli.global.config.as_ref()).map_err(|e| {
        let err = CliError::ConfigError {
            message: format!("{e:#}"),
            source: None,
        };
        eprint!("{}", err.report(false, false));
        ExitCode::from(err.exit_code())
    })?;

    init_logging(&cli.global, config.writer.verbose).map_err(|e| {
        eprintln!("modelgen: cannot start logging: {e}");
        ExitCode::FAILURE
    })?;

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        extension = %config.naming.extension,
        writer_verbose = config.writer.verbose,
        "Startup complete"
    );

    let output = OutputManager::new(&cli.global, &config);
    Ok(Session {
        cli,
        config,
        output,
    })
}

/// Dispatch to the command handler.
#[instrument(skip_all)]
fn run(session: Session) -> CliResult<()> {
    let Session {
        cli,
        config,
        output,
    } = session;

    match cli.command {
        Commands::Write(cmd) => commands::write::execute(cmd, cli.global, config, output),
        Commands::Init(cmd) => commands::init::execute(cmd, output),
        Commands::Completions(cmd) => commands::completions::execute(cmd),
        Commands::Config(cmd) => commands::config::execute(cmd, config, output),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_version_matches_cargo() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn cli_has_author() {
        let cmd = Cli::command();
        assert!(cmd.get_author().is_some());
    }
}
