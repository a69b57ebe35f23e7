//! Catalog validation command

use crate::error::{CliError, CliResult};
use crate::input::read_document;
use crate::output::{print_document, print_success, print_table, OutputFormat};
use clap::Args;
use inbound_search::{CatalogValidator, ValidationIssue};
use inbound_types::Inbound;
use std::path::PathBuf;
use tabled::Tabled;

/// Arguments of `inbound validate`
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Inbound catalog document
    #[arg(long)]
    pub inbounds: PathBuf,
}

/// Table row for a validation issue
#[derive(Debug, Tabled)]
struct IssueRow {
    index: usize,
    severity: String,
    code: String,
    description: String,
    inbound: String,
}

impl From<&ValidationIssue> for IssueRow {
    fn from(issue: &ValidationIssue) -> Self {
        Self {
            index: issue.index,
            severity: issue.severity.to_string(),
            code: issue.code.clone(),
            description: issue.description.clone(),
            inbound: issue.inbound.clone(),
        }
    }
}

/// Execute `inbound validate`; fails when an error-severity issue exists.
pub async fn execute(args: ValidateArgs, format: OutputFormat) -> CliResult<()> {
    let inbounds: Vec<Inbound> = read_document(&args.inbounds).await?;
    let report = CatalogValidator::new().validate(&inbounds);

    match format {
        OutputFormat::Table if report.issues.is_empty() => {
            print_success(&format!("{} inbound(s), no issues", inbounds.len()));
        }
        OutputFormat::Table => {
            print_table(report.issues.iter().map(IssueRow::from).collect());
        }
        _ => print_document(&report, format)?,
    }

    if report.is_valid() {
        Ok(())
    } else {
        Err(CliError::Validation(report.error_count()))
    }
}
