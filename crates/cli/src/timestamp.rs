// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parsing of `--since` / `--until` values.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{Error, Result};

/// Parses an RFC 3339 timestamp or a bare `YYYY-MM-DD` date.
///
/// Bare dates mean midnight UTC at the start of that day.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| Error::InvalidTimestamp {
            value: value.to_string(),
        })
}

#[cfg(test)]
#[path = "timestamp_tests.rs"]
mod tests;
