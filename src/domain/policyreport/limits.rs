use serde::{Deserialize, Serialize};
use tracing::debug;

use super::policy_result::PolicyResult;
use super::report_result::ReportResult;
use super::status_filter::StatusFilter;

/// Contract between report generators and consumers on what a report holds.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Limits {
    /// Maximum number of results in the report. Zero means no limit.
    #[serde(default)]
    pub max_results: usize,

    /// Only results with one of these statuses belong in the report. Empty
    /// means every status.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub status_filter: Vec<StatusFilter>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportConfiguration {
    #[serde(default)]
    pub limits: Limits,
}

impl Limits {
    pub fn is_unlimited(&self) -> bool {
        self.max_results == 0 && self.status_filter.is_empty()
    }

    pub fn allows(&self, status: PolicyResult) -> bool {
        self.status_filter.is_empty() || self.status_filter.iter().any(|f| f.matches(status))
    }

    /// Keeps the results whose status passes the filter, then truncates to
    /// `max_results`. Input order is preserved.
    pub fn apply<'a>(
        &self,
        results: impl IntoIterator<Item = &'a ReportResult>,
    ) -> Vec<ReportResult> {
        let max_results = match self.max_results {
            0 => usize::MAX,
            n => n,
        };

        let kept: Vec<ReportResult> = results
            .into_iter()
            .filter(|r| self.allows(r.result))
            .take(max_results)
            .cloned()
            .collect();

        debug!(
            "limits kept {} results (maxResults={}, statusFilter={:?})",
            kept.len(),
            self.max_results,
            self.status_filter
        );

        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn results() -> Vec<ReportResult> {
        vec![
            ReportResult::new("a", PolicyResult::Pass),
            ReportResult::new("b", PolicyResult::Fail),
            ReportResult::new("c", PolicyResult::Warn),
            ReportResult::new("d", PolicyResult::Fail),
            ReportResult::new("e", PolicyResult::Skip),
        ]
    }

    fn policies(results: &[ReportResult]) -> Vec<&str> {
        results.iter().map(|r| r.policy.as_str()).collect()
    }

    #[rstest]
    #[case(0, vec![], vec!["a", "b", "c", "d", "e"])]
    #[case(2, vec![], vec!["a", "b"])]
    #[case(0, vec![StatusFilter::Fail], vec!["b", "d"])]
    #[case(1, vec![StatusFilter::Fail, StatusFilter::Warn], vec!["b"])]
    #[case(10, vec![StatusFilter::Warn, StatusFilter::Skip], vec!["c", "e"])]
    #[case(0, vec![StatusFilter::Error], vec![])]
    fn it_filters_then_truncates(
        #[case] max_results: usize,
        #[case] status_filter: Vec<StatusFilter>,
        #[case] expected: Vec<&str>,
    ) {
        let limits = Limits {
            max_results,
            status_filter,
        };

        let results = results();
        assert_eq!(policies(&limits.apply(&results)), expected);
    }

    #[test]
    fn default_limits_are_unlimited() {
        assert!(Limits::default().is_unlimited());
        assert!(Limits::default().allows(PolicyResult::Error));
    }

    #[test]
    fn max_results_is_always_serialized() {
        let configuration = ReportConfiguration::default();
        assert_eq!(
            serde_json::to_value(&configuration).unwrap(),
            serde_json::json!({"limits": {"maxResults": 0}})
        );
    }
}
