// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn user_new_has_no_issues() {
    let user = User::new("user-1".into(), "alice".into());
    assert_eq!(user.id(), "user-1");
    assert_eq!(user.name(), "alice");
    assert!(user.issues().is_empty());
}

#[test]
fn add_issue_ignores_duplicates() {
    let mut user = User::new("user-1".into(), "alice".into());
    user.add_issue("issue-a".into());
    user.add_issue("issue-b".into());
    user.add_issue("issue-a".into());
    assert_eq!(user.issues(), ["issue-a", "issue-b"]);
}

#[test]
fn remove_issue_drops_entry() {
    let mut user = User::new("user-1".into(), "alice".into());
    user.add_issue("issue-a".into());
    user.add_issue("issue-b".into());
    user.remove_issue("issue-a");
    user.remove_issue("missing");
    assert_eq!(user.issues(), ["issue-b"]);
}

#[test]
fn user_serialization() {
    let mut user = User::new("user-1".into(), "alice".into());
    user.add_issue("issue-a".into());
    let json = serde_json::to_string(&user).unwrap();
    assert_eq!(
        json,
        r#"{"id":"user-1","name":"alice","issues":["issue-a"]}"#
    );
}
