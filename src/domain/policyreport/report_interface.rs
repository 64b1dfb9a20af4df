use itertools::Itertools;

use super::object_reference::ObjectReference;
use super::report_result::ReportResult;
use super::report_summary::ReportSummary;
use super::severity::ResultSeverity;

/// Uniform read access to report-like objects.
///
/// `has_result`, `kinds` and `severities` are derived from `results` and are
/// never stored.
pub trait ReportInterface {
    fn id(&self) -> String;

    fn key(&self) -> String;

    fn scope(&self) -> Option<&ObjectReference>;

    fn results(&self) -> &[ReportResult];

    fn summary(&self) -> ReportSummary;

    fn source(&self) -> &str;

    /// An empty id never matches.
    fn has_result(&self, id: &str) -> bool {
        !id.is_empty() && self.results().iter().any(|r| r.id() == id)
    }

    /// Distinct kinds of the resolved resources, in first-seen order.
    fn kinds(&self) -> Vec<String> {
        self.results()
            .iter()
            .map(ReportResult::kind)
            .filter(|kind| !kind.is_empty())
            .unique()
            .map(str::to_string)
            .collect()
    }

    /// Distinct assigned severities, in first-seen order.
    fn severities(&self) -> Vec<ResultSeverity> {
        self.results()
            .iter()
            .map(|r| r.severity)
            .filter(|severity| !severity.is_unset())
            .unique()
            .collect()
    }
}
