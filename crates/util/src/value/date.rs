use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A point in time, stored as milliseconds since the Unix epoch.
///
/// Dates compare by timestamp only.
///
/// ```
/// use object_util::Date;
///
/// let date = Date::from_millis(1_000);
/// assert_eq!(date.millis(), 1_000);
/// assert_eq!(date.to_datetime().map(|dt| dt.timestamp()), Some(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date {
    millis: i64,
}

impl Date {
    pub fn from_millis(millis: i64) -> Self {
        Date { millis }
    }

    pub fn now() -> Self {
        Utc::now().into()
    }

    pub fn millis(&self) -> i64 {
        self.millis
    }

    /// Returns `None` when the timestamp is outside chrono's range.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.millis)
    }
}

impl From<DateTime<Utc>> for Date {
    fn from(dt: DateTime<Utc>) -> Self {
        Date::from_millis(dt.timestamp_millis())
    }
}
