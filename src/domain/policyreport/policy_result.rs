use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::validation_error::ValidationError;

const EXPECTED_RESULTS: &str = "pass, fail, warn, error, skip";

/// Outcome of evaluating one policy rule.
///
/// - `Pass`: the policy requirements are met
/// - `Fail`: the policy requirements are not met
/// - `Warn`: the requirements are not met and the policy is not scored
/// - `Error`: the policy could not be evaluated
/// - `Skip`: the policy was not selected based on user inputs or applicability
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Debug)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum PolicyResult {
    Pass,
    Fail,
    Warn,
    Error,
    Skip,
}

impl PolicyResult {
    pub const ALL: [PolicyResult; 5] = [
        PolicyResult::Pass,
        PolicyResult::Fail,
        PolicyResult::Warn,
        PolicyResult::Error,
        PolicyResult::Skip,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyResult::Pass => "pass",
            PolicyResult::Fail => "fail",
            PolicyResult::Warn => "warn",
            PolicyResult::Error => "error",
            PolicyResult::Skip => "skip",
        }
    }

    /// `fail` and `warn` both mean the requirement was not met.
    pub fn is_violation(&self) -> bool {
        matches!(self, Self::Fail | Self::Warn)
    }
}

impl Display for PolicyResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyResult {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pass" => Ok(PolicyResult::Pass),
            "fail" => Ok(PolicyResult::Fail),
            "warn" => Ok(PolicyResult::Warn),
            "error" => Ok(PolicyResult::Error),
            "skip" => Ok(PolicyResult::Skip),
            other => Err(ValidationError::InvalidValue {
                field: "result",
                value: other.to_string(),
                expected: EXPECTED_RESULTS,
            }),
        }
    }
}

impl TryFrom<String> for PolicyResult {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, ValidationError> {
        value.parse()
    }
}
