use serde::{Deserialize, Serialize};

use crate::LedgerError;

/// Weekday bucket a movement is filed under.
///
/// The bucket is chosen by the caller when the movement is recorded and is
/// independent of the creation timestamp: entering Friday's groceries on
/// Saturday still files them under Friday. Nothing in the engine derives the
/// bucket from a clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayBucket {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayBucket {
    /// All seven buckets in week order.
    pub const ALL: [DayBucket; 7] = [
        DayBucket::Monday,
        DayBucket::Tuesday,
        DayBucket::Wednesday,
        DayBucket::Thursday,
        DayBucket::Friday,
        DayBucket::Saturday,
        DayBucket::Sunday,
    ];

    /// Canonical label, as stored.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            DayBucket::Monday => "Monday",
            DayBucket::Tuesday => "Tuesday",
            DayBucket::Wednesday => "Wednesday",
            DayBucket::Thursday => "Thursday",
            DayBucket::Friday => "Friday",
            DayBucket::Saturday => "Saturday",
            DayBucket::Sunday => "Sunday",
        }
    }
}

impl core::fmt::Display for DayBucket {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for DayBucket {
    type Error = LedgerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "monday" => Ok(DayBucket::Monday),
            "tuesday" => Ok(DayBucket::Tuesday),
            "wednesday" => Ok(DayBucket::Wednesday),
            "thursday" => Ok(DayBucket::Thursday),
            "friday" => Ok(DayBucket::Friday),
            "saturday" => Ok(DayBucket::Saturday),
            "sunday" => Ok(DayBucket::Sunday),
            other => Err(LedgerError::UnknownDay(other.to_string())),
        }
    }
}
