//! Group record, request payload and timestamp handling.

use crate::error::AppError;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// A stored group. Timestamps serialize as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Group {
    pub id: i64,
    pub group_name: String,
    #[serde(serialize_with = "serialize_timestamp")]
    pub arrival: DateTime<Utc>,
    #[serde(serialize_with = "serialize_timestamp")]
    pub departure: DateTime<Utc>,
}

/// Request body for create and update. Fields are optional so that missing ones
/// surface as validation errors instead of JSON rejections.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroupPayload {
    pub group_name: Option<String>,
    pub arrival: Option<String>,
    pub departure: Option<String>,
}

/// Validated values for the three mutable columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGroup {
    pub group_name: String,
    pub arrival: DateTime<Utc>,
    pub departure: DateTime<Utc>,
}

impl NewGroup {
    /// Materialize as a stored group with the given id.
    pub fn into_group(self, id: i64) -> Group {
        Group {
            id,
            group_name: self.group_name,
            arrival: self.arrival,
            departure: self.departure,
        }
    }
}

impl GroupPayload {
    pub fn validate(self) -> Result<NewGroup, AppError> {
        let group_name = self
            .group_name
            .ok_or_else(|| AppError::Validation("group_name is required".into()))?;
        let arrival = required_timestamp("arrival", self.arrival.as_deref())?;
        let departure = required_timestamp("departure", self.departure.as_deref())?;
        if arrival > departure {
            return Err(AppError::Validation("arrival must not be later than departure".into()));
        }
        Ok(NewGroup {
            group_name,
            arrival,
            departure,
        })
    }
}

fn required_timestamp(field: &str, value: Option<&str>) -> Result<DateTime<Utc>, AppError> {
    let raw = value.ok_or_else(|| AppError::Validation(format!("{} is required", field)))?;
    parse_timestamp(raw)
        .ok_or_else(|| AppError::Validation(format!("{} must be a valid ISO-8601 date", field)))
}

/// Parse a date string into UTC.
/// Accepts RFC 3339, naive date-times (taken as UTC) and bare dates (UTC midnight).
/// The UTC result must fall in years 1 through 9999 so it always formats with a four-digit year.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    parse_any(s.trim()).filter(|dt| (1..=9999).contains(&dt.year()))
}

fn parse_any(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// ISO-8601 with millisecond precision and `Z` suffix.
pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn serialize_timestamp<S: Serializer>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_timestamp(dt))
}
