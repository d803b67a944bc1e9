// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::TimeZone;
use yare::parameterized;

#[parameterized(
    rfc3339_utc = { "2026-01-15T12:00:00Z", Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap() },
    rfc3339_offset = { "2026-01-15T14:00:00+02:00", Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap() },
    bare_date = { "2026-01-15", Utc.with_ymd_and_hms(2026, 1, 15, 0, 0, 0).unwrap() },
    padded = { "  2026-01-15 ", Utc.with_ymd_and_hms(2026, 1, 15, 0, 0, 0).unwrap() },
)]
fn parse_timestamp_valid(input: &str, expected: DateTime<Utc>) {
    assert_eq!(parse_timestamp(input).unwrap(), expected);
}

#[parameterized(
    word = { "yesterday" },
    empty = { "" },
    bad_month = { "2026-13-01" },
    slashes = { "01/15/2026" },
)]
fn parse_timestamp_invalid(input: &str) {
    assert!(matches!(
        parse_timestamp(input),
        Err(Error::InvalidTimestamp { .. })
    ));
}
