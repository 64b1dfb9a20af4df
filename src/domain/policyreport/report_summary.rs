use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use super::policy_result::PolicyResult;
use super::report_result::ReportResult;

/// Count of results per status. Every count is always serialized, zero
/// included.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ReportSummary {
    #[serde(default)]
    pub pass: u64,
    #[serde(default)]
    pub fail: u64,
    #[serde(default)]
    pub warn: u64,
    #[serde(default)]
    pub error: u64,
    #[serde(default)]
    pub skip: u64,
}

impl ReportSummary {
    /// Recomputes the summary from scratch.
    pub fn compute<'a>(results: impl IntoIterator<Item = &'a ReportResult>) -> Self {
        results
            .into_iter()
            .fold(ReportSummary::default(), |mut summary, result| {
                summary.increment(result.result);
                summary
            })
    }

    pub fn increment(&mut self, status: PolicyResult) {
        let count = self.count_mut(status);
        *count = count.saturating_add(1);
    }

    pub fn count(&self, status: PolicyResult) -> u64 {
        match status {
            PolicyResult::Pass => self.pass,
            PolicyResult::Fail => self.fail,
            PolicyResult::Warn => self.warn,
            PolicyResult::Error => self.error,
            PolicyResult::Skip => self.skip,
        }
    }

    fn count_mut(&mut self, status: PolicyResult) -> &mut u64 {
        match status {
            PolicyResult::Pass => &mut self.pass,
            PolicyResult::Fail => &mut self.fail,
            PolicyResult::Warn => &mut self.warn,
            PolicyResult::Error => &mut self.error,
            PolicyResult::Skip => &mut self.skip,
        }
    }

    /// Saturates instead of overflowing: stored summaries are not trusted.
    pub fn total(&self) -> u64 {
        PolicyResult::ALL
            .iter()
            .map(|s| self.count(*s))
            .fold(0, u64::saturating_add)
    }

    pub fn has_violations(&self) -> bool {
        self.fail > 0 || self.warn > 0
    }
}

impl From<&[ReportResult]> for ReportSummary {
    fn from(value: &[ReportResult]) -> Self {
        ReportSummary::compute(value)
    }
}

impl Display for ReportSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "pass={} fail={} warn={} error={} skip={}",
            self.pass, self.fail, self.warn, self.error, self.skip
        )
    }
}
