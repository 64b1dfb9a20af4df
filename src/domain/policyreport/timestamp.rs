use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Seconds/nanos pair, the wire shape of a result timestamp.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Timestamp {
    #[serde(default)]
    pub seconds: i64,
    #[serde(default)]
    pub nanos: i32,
}

impl Timestamp {
    /// `None` when the pair is out of range for a calendar date.
    pub fn to_date_time(&self) -> Option<DateTime<Utc>> {
        let nanos = u32::try_from(self.nanos).ok()?;
        DateTime::from_timestamp(self.seconds, nanos)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self {
            seconds: value.timestamp(),
            nanos: value.timestamp_subsec_nanos() as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn it_converts_from_and_to_date_time() {
        let date = Utc.with_ymd_and_hms(2024, 5, 17, 10, 30, 0).unwrap();
        let timestamp = Timestamp::from(date);

        assert_eq!(timestamp.seconds, 1715941800);
        assert_eq!(timestamp.nanos, 0);
        assert_eq!(timestamp.to_date_time(), Some(date));
    }

    #[test]
    fn negative_nanos_are_not_a_date() {
        let timestamp = Timestamp {
            seconds: 10,
            nanos: -1,
        };
        assert!(timestamp.to_date_time().is_none());
    }
}
