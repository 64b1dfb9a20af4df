use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use thiserror::Error;

use crate::app::markdown::MarkdownReport;
use crate::app::report_query::{LimitsSource, ReportQuery};
use crate::domain::policyreport::{
    limits::Limits, report_interface::ReportInterface, severity::ResultSeverity,
    status_filter::StatusFilter,
};
use crate::infra::{ReportReadError, read_report};

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
    Summary,
}

/// Inspect a policy report: summarise, filter by severity and enforce limits.
#[derive(Parser, Debug, Clone)]
#[command(name = "policy-report", version)]
pub struct Cli {
    /// Report document to read (.json, .yaml or .yml)
    pub report: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
    pub output: OutputFormat,

    /// Only keep results at or above this severity (critical, high, medium, low, info)
    #[arg(long)]
    pub min_severity: Option<ResultSeverity>,

    /// Enforce the limits declared in the report's own configuration
    #[arg(long, conflicts_with_all = ["max_results", "status"])]
    pub apply_limits: bool,

    /// Keep at most this many results (0 means no limit)
    #[arg(long)]
    pub max_results: Option<usize>,

    /// Keep only results with this status; may be repeated
    #[arg(long)]
    pub status: Vec<StatusFilter>,
}

impl From<&Cli> for ReportQuery {
    fn from(value: &Cli) -> Self {
        let limits = if value.apply_limits {
            LimitsSource::FromReport
        } else if value.max_results.is_some() || !value.status.is_empty() {
            LimitsSource::Explicit(Limits {
                max_results: value.max_results.unwrap_or_default(),
                status_filter: value.status.clone(),
            })
        } else {
            LimitsSource::None
        };

        ReportQuery {
            min_severity: value.min_severity,
            limits,
        }
    }
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Read(#[from] ReportReadError),

    #[error("unable to serialize report: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Loads the report named on the command line and renders the requested view.
pub fn render(cli: &Cli) -> Result<String, CliError> {
    let report = read_report(&cli.report)?;
    let report = ReportQuery::from(cli).run(&report);

    let rendered = match cli.output {
        OutputFormat::Markdown => MarkdownReport::from(&report).to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(&report).map_err(CliError::Serialize)?,
        OutputFormat::Summary => format!("{}: {}", report.key(), report.summary),
    };

    Ok(rendered)
}
