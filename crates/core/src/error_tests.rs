// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    issue_not_found = { Error::IssueNotFound("issue-123".into()), "issue-123" },
    user_not_found = { Error::UserNotFound("user-9".into()), "user-9" },
    invalid_operation = { Error::InvalidOperation("epics cannot have parents".into()), "epics cannot have parents" },
    invalid_type = { Error::InvalidIssueType("bug".into()), "epic, story, task" },
    unknown_key = { Error::UnknownKey("e1".into()), "e1" },
)]
fn error_display_contains(err: Error, expected: &str) {
    assert!(err.to_string().contains(expected));
}

#[parameterized(
    issue = { Error::IssueNotFound("x".into()), true },
    user = { Error::UserNotFound("x".into()), true },
    invalid = { Error::InvalidOperation("x".into()), false },
    key = { Error::UnknownKey("x".into()), false },
)]
fn error_is_not_found(err: Error, expected: bool) {
    assert_eq!(err.is_not_found(), expected);
}

#[test]
fn error_from_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn error_from_json() {
    let json_err = serde_json::from_str::<()>("invalid").unwrap_err();
    let err: Error = json_err.into();
    assert!(matches!(err, Error::Json(_)));
}
