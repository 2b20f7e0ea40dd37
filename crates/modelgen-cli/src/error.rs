//! CLI errors and how they reach the user.
//!
//! Every failure of a command ends up as a [`CliError`]. `main` logs it,
//! prints [`CliError::report`] on stderr and exits with
//! [`CliError::exit_code`].

use std::error::Error;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use modelgen_core::error::{ErrorCategory as CoreCategory, ModelgenError};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// The `--template` file does not exist.
    #[error("Template not found: {}", path.display())]
    TemplateNotFound { path: PathBuf },

    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation, template or write failure from the writer.
    #[error("Write failed: {0}")]
    Core(#[from] ModelgenError),

    /// Reading the template or writing CLI output failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

/// How a failure is classified for exit codes and log severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad arguments, empty input or a malformed template.
    UserError,
    /// The template file is missing.
    NotFound,
    /// Config file or environment could not be used.
    Configuration,
    /// File system or other system failure.
    Internal,
}

impl CliError {
    /// Hints printed under the error message.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { path } => vec![
                format!("No file at '{}'", path.display()),
                "Pass the template path with --template FILE".into(),
                "Use '--template -' to read the template from stdin".into(),
            ],
            Self::ConfigError { .. } => vec![
                format!(
                    "Check {} and {} for typos",
                    crate::config::AppConfig::config_path().display(),
                    crate::config::AppConfig::LOCAL_FILE,
                ),
                "MODELGEN_<SECTION>__<KEY> variables override both files".into(),
                "Run 'modelgen init --force' to write a fresh default config".into(),
            ],
            Self::Core(core) => core.suggestions(),
            Self::IoError { .. } => vec![
                "Check that the paths are readable and the directory is writable".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation | CoreCategory::Template => ErrorCategory::UserError,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Underlying errors, outermost first.
    fn causes(&self) -> impl Iterator<Item = &(dyn Error + 'static)> {
        std::iter::successors(self.source(), |&err: &&(dyn Error + 'static)| err.source())
    }

    /// Message block for stderr.
    ///
    /// ```text
    /// error: Template not found: model.tmpl
    ///   caused by: ...            (verbose only)
    /// hint: Pass the template path with --template FILE
    /// ```
    ///
    /// Without `verbose`, a trailing line points at `-v` when causes were
    /// left out.
    pub fn report(&self, verbose: bool, color: bool) -> String {
        let mut lines = Vec::new();

        let label = if color {
            "error:".red().bold().to_string()
        } else {
            "error:".to_owned()
        };
        lines.push(format!("{label} {self}"));

        if verbose {
            for cause in self.causes() {
                let cause = cause.to_string();
                lines.push(if color {
                    format!("  caused by: {}", cause.dimmed())
                } else {
                    format!("  caused by: {cause}")
                });
            }
        }

        for hint in self.suggestions() {
            lines.push(if color {
                format!("{} {hint}", "hint:".yellow().bold())
            } else {
                format!("hint: {hint}")
            });
        }

        if !verbose && self.causes().next().is_some() {
            lines.push("(run with -v to see the underlying cause)".to_owned());
        }

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }

    /// Emit one event at a severity matching the category.
    pub fn log(&self) {
        let exit_code = self.exit_code();
        let cause = self.causes().last().map(|err| err.to_string());
        match self.category() {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(exit_code, cause = cause.as_deref(), "{self}")
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(exit_code, cause = cause.as_deref(), "{self}")
            }
        }
    }
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Extension trait to convert `io::Error` results into [`CliError`] at
/// call-sites with a descriptive context message.
pub trait IntoCli<T> {
    /// Convert to `CliResult` attaching a human-readable context message.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modelgen_core::application::ApplicationError;
    use modelgen_core::domain::DomainError;
    use std::io;

    fn read_failure() -> CliError {
        CliError::IoError {
            message: "reading template".into(),
            source: io::Error::other("disk on fire"),
        }
    }

    // ── suggestions ───────────────────────────────────────────────────────

    #[test]
    fn template_not_found_mentions_stdin() {
        let err = CliError::TemplateNotFound {
            path: PathBuf::from("missing.tmpl"),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("--template -")));
    }

    #[test]
    fn core_suggestions_pass_through() {
        let err = CliError::Core(DomainError::MalformedPlaceholder { line: 1, column: 1 }.into());
        assert!(err.suggestions().iter().any(|s| s.contains("$$")));
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn validation_and_template_errors_are_user_errors() {
        let invalid = CliError::Core(
            DomainError::InvalidArgument {
                argument: "content",
                message: "missing content".into(),
            }
            .into(),
        );
        let malformed = CliError::Core(DomainError::MalformedPlaceholder { line: 3, column: 1 }.into());
        let escaping = CliError::Core(
            DomainError::UnsafeFileName {
                name: "/etc/x.py".into(),
            }
            .into(),
        );

        assert_eq!(invalid.exit_code(), 2);
        assert_eq!(malformed.exit_code(), 2);
        assert_eq!(escaping.exit_code(), 2);
    }

    #[test]
    fn exit_code_not_found() {
        let err = CliError::TemplateNotFound {
            path: PathBuf::from("x"),
        };
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn exit_code_configuration() {
        let err = CliError::ConfigError {
            message: "x".into(),
            source: None,
        };
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn exit_code_internal() {
        let io_failure = ApplicationError::io(
            "/ro/a.py",
            "write",
            &io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(CliError::Core(io_failure.into()).exit_code(), 1);
        assert_eq!(read_failure().exit_code(), 1);
    }

    // ── report ────────────────────────────────────────────────────────────

    #[test]
    fn plain_report_has_message_and_hints() {
        let err = CliError::TemplateNotFound {
            path: PathBuf::from("/tmp/x"),
        };
        let text = err.report(false, false);

        assert!(text.starts_with("error: Template not found: /tmp/x\n"));
        assert!(text.contains("hint: Pass the template path with --template FILE"));
        assert!(!text.contains("-v to see"), "no causes to hide");
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn verbose_report_lists_causes() {
        let text = read_failure().report(true, false);

        assert!(text.contains("  caused by: disk on fire"));
        assert!(!text.contains("-v to see"));
    }

    #[test]
    fn terse_report_points_at_verbose_flag() {
        let text = read_failure().report(false, false);

        assert!(!text.contains("disk on fire"));
        assert!(text.ends_with("(run with -v to see the underlying cause)\n"));
    }

    // ── IntoCli ───────────────────────────────────────────────────────────

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "reading config");
        assert!(matches!(cli, Err(CliError::IoError { .. })));
    }
}
