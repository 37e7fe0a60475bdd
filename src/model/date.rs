//! Calendar date parsing for request payloads.
//!
//! Dates travel as `YYYY-MM-DD`. Inputs may also carry a full RFC 3339 timestamp such as
//! `2020-01-01T00:00:00.000Z`; only its date part is kept.

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;

pub fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    let raw = raw.trim();

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .map_err(|_| format!("invalid date '{}', expected YYYY-MM-DD", raw))
}

pub(crate) fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).map_err(D::Error::custom)
}
