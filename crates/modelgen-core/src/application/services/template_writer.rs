//! Template Writer - the single write-one-file use case.
//!
//! Workflow for one call:
//! 1. Validate the request (fail fast, no side effects)
//! 2. Ask the `NameFormatter` for the output file name, which must be a
//!    relative path made of plain segments
//! 3. Build the substitution context for today and render
//! 4. Write `<current dir>/<file name>` and set mode `0666`

use std::path::{Component, Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, info, instrument};

use crate::{
    application::ports::{DiagnosticSink, Filesystem, NameFormatter},
    domain::{DomainError, FileMode, SubstitutionContext, TemplateRequest},
    error::ModelgenResult,
};

/// Result of a write that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The rendered template was written to `path`.
    Written { path: PathBuf },
    /// The formatter returned an empty name, nothing was written.
    Skipped,
}

impl WriteOutcome {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Written { path } => Some(path),
            Self::Skipped => None,
        }
    }
}

/// A rendered template and where it would be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedModel {
    pub path: PathBuf,
    pub content: String,
}

/// Writes a model template with its placeholders filled in.
///
/// Holds a single piece of state, the check status: `false` until a `write`
/// call passes validation, `true` from then on.
pub struct TemplateWriter {
    formatter: Box<dyn NameFormatter>,
    filesystem: Box<dyn Filesystem>,
    sink: Box<dyn DiagnosticSink>,
    fixed_date: Option<NaiveDate>,
    check_status: bool,
}

impl TemplateWriter {
    /// Tag attached to every diagnostic message from the writer.
    pub const VERBOSE_TAG: &'static str = "MODELGEN::MODEL::WRITE_TEMPLATE";

    /// Create a writer with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use modelgen_core::application::TemplateWriter;
    ///
    /// let mut writer = TemplateWriter::new(
    ///     formatter,  // impl NameFormatter
    ///     filesystem, // impl Filesystem
    ///     sink,       // impl DiagnosticSink
    ///     false,
    /// );
    /// writer.write("class $mod: ...", "Invoice", false)?;
    /// ```
    pub fn new(
        formatter: Box<dyn NameFormatter>,
        filesystem: Box<dyn Filesystem>,
        sink: Box<dyn DiagnosticSink>,
        verbose: bool,
    ) -> Self {
        sink.verbose_message(Self::VERBOSE_TAG, verbose, &["Initial writer"]);
        Self {
            formatter,
            filesystem,
            sink,
            fixed_date: None,
            check_status: false,
        }
    }

    /// Render `$date` / `$year` from `date` instead of the local calendar.
    pub fn with_fixed_date(mut self, date: NaiveDate) -> Self {
        self.fixed_date = Some(date);
        self
    }

    /// `true` once any `write` call has passed validation.
    pub fn check_status(&self) -> bool {
        self.check_status
    }

    /// Write `content` for `model_name` into the current directory.
    ///
    /// Returns `Ok(true)` whenever validation passes, including when the
    /// formatter yields an empty name and nothing is written; the upstream
    /// Python writer returned `False` in that case. Use
    /// [`Self::write_outcome`] to tell the two apart.
    ///
    /// # Errors
    /// - `InvalidArgument` if `content` or `model_name` is empty
    /// - `MalformedPlaceholder` if the template has a stray `$`
    /// - `UnsafeFileName` if the formatter's name would leave the current dir
    /// - `ApplicationError::Io` if the file cannot be written or chmod-ed
    pub fn write(&mut self, content: &str, model_name: &str, verbose: bool) -> ModelgenResult<bool> {
        let request = TemplateRequest::new(content, model_name)?;
        self.write_outcome(&request, verbose)?;
        Ok(true)
    }

    /// Write a validated request, reporting whether a file was produced.
    #[instrument(skip_all, fields(model = %request.model_name()))]
    pub fn write_outcome(
        &mut self,
        request: &TemplateRequest,
        verbose: bool,
    ) -> ModelgenResult<WriteOutcome> {
        self.sink
            .verbose_message(Self::VERBOSE_TAG, verbose, &["Writer template"]);
        self.check_status = true;

        let Some(rendered) = self.render(request)? else {
            info!("Formatter returned no file name, nothing written");
            return Ok(WriteOutcome::Skipped);
        };

        let path_text = rendered.path.display().to_string();
        self.sink.verbose_message(
            Self::VERBOSE_TAG,
            verbose,
            &["Write data model", path_text.as_str()],
        );

        self.filesystem.write_file(&rendered.path, &rendered.content)?;
        self.filesystem
            .set_mode(&rendered.path, FileMode::WORLD_READ_WRITE)?;

        info!(path = %rendered.path.display(), bytes = rendered.content.len(), "Model written");
        Ok(WriteOutcome::Written {
            path: rendered.path,
        })
    }

    /// Resolve the output path and render the template without writing.
    ///
    /// Returns `None` when the formatter yields an empty name. Does not touch
    /// the check status.
    #[instrument(skip_all, fields(model = %request.model_name()))]
    pub fn render(&self, request: &TemplateRequest) -> ModelgenResult<Option<RenderedModel>> {
        let file_name = self.formatter.format_name(request.model_name());
        if file_name.is_empty() {
            return Ok(None);
        }
        let relative = confined(&file_name)?;
        debug!(file_name = %file_name, "Output name resolved");

        let path = self.filesystem.current_dir()?.join(relative);
        let context = match self.fixed_date {
            Some(date) => SubstitutionContext::new(request.model_name(), date),
            None => SubstitutionContext::today(request.model_name()),
        };
        let content = context.render(request.content())?;

        Ok(Some(RenderedModel { path, content }))
    }
}

/// `name` as a path below the current directory.
///
/// Rejects absolute paths, prefixes, `.` and `..`, so joining can never
/// replace or climb out of the directory.
fn confined(name: &str) -> Result<&Path, DomainError> {
    let path = Path::new(name);
    if path
        .components()
        .all(|component| matches!(component, Component::Normal(_)))
    {
        Ok(path)
    } else {
        Err(DomainError::UnsafeFileName {
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use chrono::{Datelike, Local};
    use mockall::mock;

    use super::*;
    use crate::application::ApplicationError;
    use crate::domain::DomainError;
    use crate::error::ModelgenError;

    mock! {
        pub Formatter {}
        impl NameFormatter for Formatter {
            fn format_name(&self, model_name: &str) -> String;
        }
    }

    mock! {
        pub Fs {}
        impl Filesystem for Fs {
            fn current_dir(&self) -> ModelgenResult<PathBuf>;
            fn write_file(&self, path: &Path, content: &str) -> ModelgenResult<()>;
            fn set_mode(&self, path: &Path, mode: FileMode) -> ModelgenResult<()>;
        }
    }

    #[derive(Clone, Default)]
    struct Recorder(Arc<Mutex<Vec<String>>>);

    impl Recorder {
        fn lines(&self) -> Vec<String> {
            self.0.lock().unwrap().clone()
        }
    }

    impl DiagnosticSink for Recorder {
        fn verbose_message(&self, tag: &str, enabled: bool, parts: &[&str]) {
            if enabled {
                self.0
                    .lock()
                    .unwrap()
                    .push(format!("[{}] {}", tag, parts.join(" ")));
            }
        }
    }

    fn formatter_returning(name: &'static str) -> MockFormatter {
        let mut formatter = MockFormatter::new();
        formatter
            .expect_format_name()
            .returning(move |_| name.to_string());
        formatter
    }

    fn untouched_fs() -> MockFs {
        let mut fs = MockFs::new();
        fs.expect_current_dir().never();
        fs.expect_write_file().never();
        fs.expect_set_mode().never();
        fs
    }

    fn writer(formatter: MockFormatter, fs: MockFs, sink: Recorder, verbose: bool) -> TemplateWriter {
        TemplateWriter::new(Box::new(formatter), Box::new(fs), Box::new(sink), verbose)
    }

    #[test]
    fn new_writer_has_false_status() {
        let w = writer(MockFormatter::new(), untouched_fs(), Recorder::default(), false);
        assert!(!w.check_status());
    }

    #[test]
    fn writes_substituted_content_into_current_dir() {
        let mut fs = MockFs::new();
        fs.expect_current_dir()
            .times(1)
            .returning(|| Ok(PathBuf::from("/work")));
        fs.expect_write_file()
            .withf(|path, content| path == Path::new("/work/foo_model.txt") && content == "X=Foo")
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_set_mode()
            .withf(|path, mode| {
                path == Path::new("/work/foo_model.txt") && *mode == FileMode::WORLD_READ_WRITE
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let mut w = writer(formatter_returning("foo_model.txt"), fs, Recorder::default(), false);

        assert!(w.write("X=$mod", "Foo", false).unwrap());
        assert!(w.check_status());
    }

    #[test]
    fn substitutes_model_name_variants_and_year() {
        let year = Local::now().year();
        let expected = format!("Widget/widget/{year}");

        let mut fs = MockFs::new();
        fs.expect_current_dir().returning(|| Ok(PathBuf::from("/w")));
        fs.expect_write_file()
            .withf(move |_, content| content == expected)
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_set_mode().returning(|_, _| Ok(()));

        let mut w = writer(formatter_returning("widget.py"), fs, Recorder::default(), false);
        w.write("$mod/$modlc/$year", "Widget", false).unwrap();
    }

    #[test]
    fn empty_content_fails_before_any_side_effect() {
        let mut formatter = MockFormatter::new();
        formatter.expect_format_name().never();
        let mut w = writer(formatter, untouched_fs(), Recorder::default(), false);

        let err = w.write("", "Foo", false).unwrap_err();

        assert!(matches!(
            err,
            ModelgenError::Domain(DomainError::InvalidArgument {
                argument: "content",
                ..
            })
        ));
        assert!(!w.check_status());
    }

    #[test]
    fn empty_model_name_is_invalid_argument() {
        let mut w = writer(MockFormatter::new(), untouched_fs(), Recorder::default(), false);

        let err = w.write("$mod", "", false).unwrap_err();

        assert!(matches!(
            err,
            ModelgenError::Domain(DomainError::InvalidArgument {
                argument: "model_name",
                ..
            })
        ));
        assert!(!w.check_status());
    }

    #[test]
    fn empty_formatted_name_skips_write_but_reports_success() {
        let mut w = writer(formatter_returning(""), untouched_fs(), Recorder::default(), false);

        assert!(w.write("X=$mod", "Foo", false).unwrap());
        assert!(w.check_status());
    }

    #[test]
    fn write_outcome_distinguishes_skip() {
        let mut w = writer(formatter_returning(""), untouched_fs(), Recorder::default(), false);
        let request = TemplateRequest::new("X", "Foo").unwrap();

        assert_eq!(w.write_outcome(&request, false).unwrap(), WriteOutcome::Skipped);
    }

    #[test]
    fn malformed_template_writes_nothing() {
        let mut fs = MockFs::new();
        fs.expect_current_dir().returning(|| Ok(PathBuf::from("/w")));
        fs.expect_write_file().never();
        fs.expect_set_mode().never();

        let mut w = writer(formatter_returning("foo.py"), fs, Recorder::default(), false);
        let err = w.write("price: $5", "Foo", false).unwrap_err();

        assert!(matches!(
            err,
            ModelgenError::Domain(DomainError::MalformedPlaceholder { line: 1, column: 8 })
        ));
    }

    #[test]
    fn write_failure_propagates_and_skips_chmod() {
        let mut fs = MockFs::new();
        fs.expect_current_dir().returning(|| Ok(PathBuf::from("/ro")));
        fs.expect_write_file().returning(|path, _| {
            Err(ApplicationError::io(
                path,
                "write",
                &std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            )
            .into())
        });
        fs.expect_set_mode().never();

        let mut w = writer(formatter_returning("foo.py"), fs, Recorder::default(), false);
        let err = w.write("$mod", "Foo", false).unwrap_err();

        match err {
            ModelgenError::Application(app) => {
                assert_eq!(app.io_kind(), Some(std::io::ErrorKind::PermissionDenied))
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn verbose_messages_follow_phases() {
        let mut fs = MockFs::new();
        fs.expect_current_dir().returning(|| Ok(PathBuf::from("/w")));
        fs.expect_write_file().returning(|_, _| Ok(()));
        fs.expect_set_mode().returning(|_, _| Ok(()));

        let sink = Recorder::default();
        let mut w = writer(formatter_returning("foo.py"), fs, sink.clone(), true);
        w.write("$mod", "Foo", true).unwrap();

        let tag = TemplateWriter::VERBOSE_TAG;
        assert_eq!(
            sink.lines(),
            vec![
                format!("[{tag}] Initial writer"),
                format!("[{tag}] Writer template"),
                format!("[{tag}] Write data model /w/foo.py"),
            ]
        );
    }

    #[test]
    fn quiet_writer_emits_no_enabled_messages() {
        let sink = Recorder::default();
        let mut w = writer(formatter_returning(""), untouched_fs(), sink.clone(), false);
        w.write("x", "Foo", false).unwrap();

        assert!(sink.lines().is_empty());
    }

    #[test]
    fn render_does_not_touch_status_or_disk() {
        let mut fs = MockFs::new();
        fs.expect_current_dir().returning(|| Ok(PathBuf::from("/w")));
        fs.expect_write_file().never();
        fs.expect_set_mode().never();

        let w = writer(formatter_returning("invoice.py"), fs, Recorder::default(), false)
            .with_fixed_date(NaiveDate::from_ymd_opt(2024, 5, 6).unwrap());
        let request = TemplateRequest::new("# $mod $date", "Invoice").unwrap();

        let rendered = w.render(&request).unwrap().unwrap();

        assert_eq!(rendered.path, PathBuf::from("/w/invoice.py"));
        assert_eq!(rendered.content, "# Invoice 2024-05-06");
        assert!(!w.check_status());
    }

    #[test]
    fn status_stays_true_after_later_validation_failure() {
        let mut w = writer(formatter_returning(""), untouched_fs(), Recorder::default(), false);
        w.write("x", "Foo", false).unwrap();
        assert!(w.write("", "Foo", false).is_err());

        assert!(w.check_status());
    }

    #[test]
    fn names_leaving_the_current_dir_are_rejected() {
        for name in ["/etc/model.py", "../x.py", "./x.py", "models/../../x.py"] {
            let mut w = writer(formatter_returning(name), untouched_fs(), Recorder::default(), false);

            let err = w.write("$mod", "Foo", false).unwrap_err();

            match err {
                ModelgenError::Domain(DomainError::UnsafeFileName { name: rejected }) => {
                    assert_eq!(rejected, name)
                }
                other => panic!("{name}: unexpected error {other:?}"),
            }
        }
    }

    #[test]
    fn nested_relative_name_stays_below_current_dir() {
        let mut fs = MockFs::new();
        fs.expect_current_dir().returning(|| Ok(PathBuf::from("/w")));
        fs.expect_write_file()
            .withf(|path, _| path == Path::new("/w/models/foo.py"))
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_set_mode().returning(|_, _| Ok(()));

        let mut w = writer(formatter_returning("models/foo.py"), fs, Recorder::default(), false);

        assert!(w.write("$mod", "Foo", false).unwrap());
    }
}
