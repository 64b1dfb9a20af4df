use tracing::info;

use crate::domain::policyreport::{
    limits::Limits, report::Report, report_interface::ReportInterface,
    report_result::ReportResult, severity::ResultSeverity,
};

/// Where the limits applied by a query come from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LimitsSource {
    #[default]
    None,
    /// The `configuration.limits` the report carries, if any.
    FromReport,
    Explicit(Limits),
}

/// Consumer-side view over a report: severity threshold first, then limits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportQuery {
    pub min_severity: Option<ResultSeverity>,
    pub limits: LimitsSource,
}

impl ReportQuery {
    pub fn with_min_severity(mut self, severity: ResultSeverity) -> Self {
        self.min_severity = Some(severity);
        self
    }

    pub fn with_limits(mut self, limits: LimitsSource) -> Self {
        self.limits = limits;
        self
    }

    pub fn is_passthrough(&self) -> bool {
        self.min_severity.is_none() && self.limits == LimitsSource::None
    }

    /// Returns a copy of `report` holding only the selected results, with its
    /// summary recomputed for them.
    pub fn run(&self, report: &Report) -> Report {
        if self.is_passthrough() {
            return report.clone();
        }

        let above_threshold: Vec<&ReportResult> = match self.min_severity {
            Some(threshold) => report.results_at_least(threshold),
            None => report.results.iter().collect(),
        };

        let selected = match self.resolve_limits(report) {
            Some(limits) => limits.apply(above_threshold),
            None => above_threshold.into_iter().cloned().collect(),
        };

        info!(
            "report {}: selected {} of {} results",
            report.key(),
            selected.len(),
            report.results.len()
        );

        let mut filtered = report.clone();
        filtered.results = selected;
        filtered.refresh_summary();
        filtered
    }

    fn resolve_limits<'a>(&'a self, report: &'a Report) -> Option<&'a Limits> {
        match &self.limits {
            LimitsSource::None => None,
            LimitsSource::FromReport => report.limits(),
            LimitsSource::Explicit(limits) => Some(limits),
        }
    }
}
