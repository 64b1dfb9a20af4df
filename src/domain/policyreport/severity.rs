use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::validation_error::ValidationError;

const EXPECTED_SEVERITIES: &str = "critical, high, medium, low, info or empty";

/// Criticality of a result, independent of its pass/fail status.
///
/// `Unset` is the empty string on the wire and ranks below every named
/// severity.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Debug, Default)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ResultSeverity {
    Critical,
    High,
    Medium,
    Low,
    Info,
    #[default]
    #[serde(rename = "")]
    Unset,
}

/// Ranking table, lowest first.
pub const SEVERITY_LEVELS: [(ResultSeverity, i8); 6] = [
    (ResultSeverity::Unset, -1),
    (ResultSeverity::Info, 0),
    (ResultSeverity::Low, 1),
    (ResultSeverity::Medium, 2),
    (ResultSeverity::High, 3),
    (ResultSeverity::Critical, 4),
];

impl ResultSeverity {
    /// Rank from [`SEVERITY_LEVELS`]. Every variant has an entry.
    pub fn level(&self) -> i8 {
        SEVERITY_LEVELS
            .iter()
            .find(|(severity, _)| severity == self)
            .map_or(-1, |(_, level)| *level)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResultSeverity::Critical => "critical",
            ResultSeverity::High => "high",
            ResultSeverity::Medium => "medium",
            ResultSeverity::Low => "low",
            ResultSeverity::Info => "info",
            ResultSeverity::Unset => "",
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    pub fn is_at_least(&self, threshold: ResultSeverity) -> bool {
        *self >= threshold
    }
}

impl Ord for ResultSeverity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.level().cmp(&other.level())
    }
}

impl PartialOrd for ResultSeverity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for ResultSeverity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResultSeverity {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "critical" => Ok(ResultSeverity::Critical),
            "high" => Ok(ResultSeverity::High),
            "medium" => Ok(ResultSeverity::Medium),
            "low" => Ok(ResultSeverity::Low),
            "info" => Ok(ResultSeverity::Info),
            "" => Ok(ResultSeverity::Unset),
            other => Err(ValidationError::InvalidValue {
                field: "severity",
                value: other.to_string(),
                expected: EXPECTED_SEVERITIES,
            }),
        }
    }
}

impl TryFrom<String> for ResultSeverity {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
