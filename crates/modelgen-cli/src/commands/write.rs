//! Implementation of the `modelgen write` command.
//!
//! Responsibility: read the template, wire the adapters into a
//! `TemplateWriter`, and display results. No business logic lives here.

use std::io::{self, Read};
use std::path::Path;

use serde_json::json;
use tracing::{debug, instrument};

use modelgen_adapters::{LocalFilesystem, SnakeCaseFormatter, TracingSink};
use modelgen_core::{
    application::{TemplateWriter, WriteOutcome},
    domain::TemplateRequest,
    error::ModelgenError,
};

use crate::{
    cli::{GlobalArgs, WriteArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `modelgen write` command.
///
/// Dispatch sequence:
/// 1. Read the template bytes (file or stdin)
/// 2. Validate them together with the model name
/// 3. Build the writer from the configured extension
/// 4. Render only (`--dry-run`) or write and chmod the file
/// 5. Report the outcome
#[instrument(skip_all, fields(template = %args.template.display()))]
pub fn execute(
    args: WriteArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let verbose = global.writer_verbose() || config.writer.verbose;

    // 1-2. Input
    let content = read_template(&args.template)?;
    let request =
        TemplateRequest::from_raw(content, args.model_name).map_err(ModelgenError::from)?;

    // 3. Writer
    let extension = args.extension.unwrap_or(config.naming.extension);
    debug!(extension = %extension, verbose, "Building writer");
    let mut writer = TemplateWriter::new(
        Box::new(SnakeCaseFormatter::new(extension)),
        Box::new(LocalFilesystem::new()),
        Box::new(TracingSink::new()),
        verbose,
    );

    // 4-5. Render or write
    if args.dry_run {
        return report_dry_run(&writer, &request, &output);
    }

    let outcome = writer.write_outcome(&request, verbose)?;
    report_outcome(&outcome, request.model_name(), &output)
}

/// Read the template from `path`, or from stdin when `path` is `-`.
fn read_template(path: &Path) -> CliResult<Vec<u8>> {
    if path == Path::new("-") {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .with_cli_context(|| "Failed to read template from stdin")?;
        return Ok(buf);
    }

    match std::fs::read(path) {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(CliError::TemplateNotFound {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(CliError::IoError {
            message: format!("Failed to read template '{}'", path.display()),
            source: e,
        }),
    }
}

fn report_dry_run(
    writer: &TemplateWriter,
    request: &TemplateRequest,
    output: &OutputManager,
) -> CliResult<()> {
    let rendered = writer.render(request)?;

    if output.is_json() {
        let value = match &rendered {
            Some(model) => json!({
                "status": "dry_run",
                "model": request.model_name(),
                "path": model.path.display().to_string(),
                "content": model.content,
            }),
            None => json!({ "status": "skipped", "model": request.model_name() }),
        };
        output.json(&value)?;
        return Ok(());
    }

    match rendered {
        Some(model) => {
            output.info(&format!("Dry run: would write {}", model.path.display()))?;
            output.payload(&model.content)?;
        }
        None => output.warning(&no_name_message(request.model_name()))?,
    }
    Ok(())
}

fn report_outcome(outcome: &WriteOutcome, model: &str, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        let value = match outcome {
            WriteOutcome::Written { path } => json!({
                "status": "written",
                "model": model,
                "path": path.display().to_string(),
                "mode": "0666",
            }),
            WriteOutcome::Skipped => json!({ "status": "skipped", "model": model }),
        };
        output.json(&value)?;
        return Ok(());
    }

    match outcome {
        WriteOutcome::Written { path } => {
            output.success(&format!("Wrote {}", path.display()))?;
        }
        WriteOutcome::Skipped => output.warning(&no_name_message(model))?,
    }
    Ok(())
}

fn no_name_message(model: &str) -> String {
    format!("No file name could be derived from '{model}', nothing written")
}
