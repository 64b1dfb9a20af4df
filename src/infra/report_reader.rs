use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::policyreport::{
    report::Report, report_interface::ReportInterface, validation_error::ValidationError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Yaml,
}

impl ReportFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(ReportFormat::Json),
            "yaml" | "yml" => Some(ReportFormat::Yaml),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum ReportReadError {
    #[error("unable to read report {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported report format for {}, expected .json, .yaml or .yml", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("invalid json report: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("invalid yaml report: {0}")]
    InvalidYaml(String),

    #[error("invalid report: {0}")]
    Invalid(#[from] ValidationError),
}

/// Loads and validates a report, picking the format from the file extension.
pub fn read_report(path: impl AsRef<Path>) -> Result<Report, ReportReadError> {
    let path = path.as_ref();
    let format = ReportFormat::from_path(path)
        .ok_or_else(|| ReportReadError::UnsupportedFormat(path.to_path_buf()))?;

    debug!("reading {format:?} report from {}", path.display());
    let content = std::fs::read_to_string(path).map_err(|source| ReportReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let report = match format {
        ReportFormat::Json => report_from_json(&content)?,
        ReportFormat::Yaml => report_from_yaml(&content)?,
    };

    info!(
        "loaded report {} with {} results",
        report.key(),
        report.results.len()
    );
    Ok(report)
}

pub fn report_from_json(content: &str) -> Result<Report, ReportReadError> {
    let report: Report = serde_json::from_str(content)?;
    report.validate()?;
    Ok(report)
}

pub fn report_from_yaml(content: &str) -> Result<Report, ReportReadError> {
    let report: Report = marked_yaml::from_yaml(0, content)
        .map_err(|e| ReportReadError::InvalidYaml(e.to_string()))?;
    report.validate()?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::policyreport::{policy_result::PolicyResult, severity::ResultSeverity};
    use rstest::rstest;

    #[rstest]
    #[case("report.json", Some(ReportFormat::Json))]
    #[case("report.JSON", Some(ReportFormat::Json))]
    #[case("report.yaml", Some(ReportFormat::Yaml))]
    #[case("dir/report.yml", Some(ReportFormat::Yaml))]
    #[case("report.txt", None)]
    #[case("report", None)]
    fn format_is_picked_from_the_extension(
        #[case] path: &str,
        #[case] expected: Option<ReportFormat>,
    ) {
        assert_eq!(ReportFormat::from_path(Path::new(path)), expected);
    }

    #[test]
    fn it_loads_a_json_report() {
        let report = report_from_json(
            r#"{
                "metadata": {"name": "polr", "namespace": "default"},
                "source": "kyverno",
                "summary": {"pass": 0, "fail": 1, "warn": 0, "error": 0, "skip": 0},
                "results": [
                    {"policy": "require-labels", "result": "fail", "severity": "high"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(report.results[0].result, PolicyResult::Fail);
        assert_eq!(report.results[0].severity, ResultSeverity::High);
        assert!(report.has_consistent_summary());
    }

    #[test]
    fn it_rejects_ambiguous_scope() {
        let err = report_from_json(
            r#"{
                "scope": {"kind": "Namespace", "name": "default"},
                "scopeSelector": {"matchLabels": {"team": "a"}}
            }"#,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            ReportReadError::Invalid(ValidationError::AmbiguousScope)
        ));
    }

    #[test]
    fn it_rejects_unknown_results_naming_the_field() {
        let err = report_from_json(r#"{"results": [{"policy": "p", "result": "passed"}]}"#)
            .unwrap_err();

        assert!(matches!(err, ReportReadError::InvalidJson(_)));
        assert!(err.to_string().contains("field `result`"), "{err}");
    }

    #[test]
    fn it_reports_unsupported_formats() {
        let err = read_report("report.toml").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported report format for report.toml, expected .json, .yaml or .yml"
        );
    }

    #[test]
    fn it_reports_missing_files() {
        let err = read_report("does/not/exist.json").unwrap_err();
        assert!(matches!(err, ReportReadError::Io { .. }));
    }
}
