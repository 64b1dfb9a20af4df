use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::policy_result::PolicyResult;
use super::validation_error::ValidationError;

/// Status a report generator is allowed to write into a report.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Debug)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum StatusFilter {
    Pass,
    Fail,
    Warn,
    Error,
    Skip,
}

impl StatusFilter {
    pub fn matches(&self, result: PolicyResult) -> bool {
        PolicyResult::from(*self) == result
    }
}

impl From<StatusFilter> for PolicyResult {
    fn from(value: StatusFilter) -> Self {
        match value {
            StatusFilter::Pass => PolicyResult::Pass,
            StatusFilter::Fail => PolicyResult::Fail,
            StatusFilter::Warn => PolicyResult::Warn,
            StatusFilter::Error => PolicyResult::Error,
            StatusFilter::Skip => PolicyResult::Skip,
        }
    }
}

impl From<PolicyResult> for StatusFilter {
    fn from(value: PolicyResult) -> Self {
        match value {
            PolicyResult::Pass => StatusFilter::Pass,
            PolicyResult::Fail => StatusFilter::Fail,
            PolicyResult::Warn => StatusFilter::Warn,
            PolicyResult::Error => StatusFilter::Error,
            PolicyResult::Skip => StatusFilter::Skip,
        }
    }
}

impl Display for StatusFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(PolicyResult::from(*self).as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value
            .parse::<PolicyResult>()
            .map(StatusFilter::from)
            .map_err(|_| ValidationError::InvalidValue {
                field: "statusFilter",
                value: value.to_string(),
                expected: "pass, fail, warn, error, skip",
            })
    }
}

impl TryFrom<String> for StatusFilter {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, ValidationError> {
        value.parse()
    }
}
