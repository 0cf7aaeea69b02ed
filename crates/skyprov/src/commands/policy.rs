//! Policy document rendering and validation.

use std::path::Path;

use tabled::Tabled;

use skyprov_core::{PolicyDocument, PolicyError};
use skyprov_core::policy::{Issue, validate};

use crate::cli::{GlobalOpts, OutputFormat, PolicyArgs, PolicyCommand};
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct IssueRow {
    #[tabled(rename = "Severity")]
    severity: String,
    #[tabled(rename = "Path")]
    path: String,
    #[tabled(rename = "Message")]
    message: String,
}

fn issue_row(i: &Issue) -> IssueRow {
    IssueRow {
        severity: i.severity.to_string(),
        path: i.path.clone(),
        message: i.message.clone(),
    }
}

pub fn handle(
    args: PolicyArgs,
    global: &GlobalOpts,
    format: OutputFormat,
) -> Result<(), CliError> {
    match args.command {
        PolicyCommand::Render { file, compact } => {
            let doc = load(&file)?;
            let encoded = if compact {
                doc.to_json()
            } else {
                doc.to_json_pretty()
            }
            .map_err(|source| CliError::Policy {
                path: file.display().to_string(),
                source,
            })?;
            output::print_output(&encoded, global.quiet);
            Ok(())
        }

        PolicyCommand::Validate { file } => {
            let doc = load(&file)?;
            let report = validate(&doc);
            tracing::debug!(
                issues = report.issues.len(),
                file = %file.display(),
                "validated policy document"
            );

            let out = if report.issues.is_empty()
                && matches!(format, OutputFormat::Table | OutputFormat::Plain)
            {
                format!("{}: no issues found", file.display())
            } else {
                output::render_list(format, &report.issues, issue_row, Issue::to_string)?
            };
            output::print_output(&out, global.quiet);

            let count = report.errors().count();
            if count > 0 {
                return Err(CliError::ValidationFailed { count });
            }
            Ok(())
        }
    }
}

/// Decode a policy document, picking the format by file extension.
fn load(path: &Path) -> Result<PolicyDocument, CliError> {
    let display = path.display().to_string();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let decode: fn(&str) -> Result<PolicyDocument, PolicyError> = match ext.as_deref() {
        Some("json") => PolicyDocument::from_json,
        Some("yaml" | "yml") => PolicyDocument::from_yaml,
        _ => return Err(CliError::UnsupportedFormat { path: display }),
    };

    let contents = std::fs::read_to_string(path).map_err(|source| CliError::PolicyRead {
        path: display.clone(),
        source,
    })?;
    decode(&contents).map_err(|source| CliError::Policy {
        path: display,
        source,
    })
}
