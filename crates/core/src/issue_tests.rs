// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

// IssueType parsing tests
#[parameterized(
    epic_lower = { "epic", IssueType::Epic },
    story_lower = { "story", IssueType::Story },
    task_lower = { "task", IssueType::Task },
    epic_upper = { "EPIC", IssueType::Epic },
    story_mixed = { "Story", IssueType::Story },
)]
fn issue_type_from_str_valid(input: &str, expected: IssueType) {
    assert_eq!(input.parse::<IssueType>().unwrap(), expected);
}

#[parameterized(
    invalid = { "bug" },
    empty = { "" },
)]
fn issue_type_from_str_invalid(input: &str) {
    assert!(matches!(
        input.parse::<IssueType>(),
        Err(Error::InvalidIssueType(_))
    ));
}

// State parsing tests
#[parameterized(
    todo = { "todo", State::Todo },
    in_progress = { "in_progress", State::InProgress },
    in_progress_dash = { "in-progress", State::InProgress },
    done = { "DONE", State::Done },
)]
fn state_from_str_valid(input: &str, expected: State) {
    assert_eq!(input.parse::<State>().unwrap(), expected);
}

#[parameterized(
    closed = { "closed" },
    empty = { "" },
)]
fn state_from_str_invalid(input: &str) {
    assert!(matches!(input.parse::<State>(), Err(Error::InvalidState(_))));
}

// Parent typing rules
#[parameterized(
    story_under_epic = { IssueType::Story, IssueType::Epic },
    task_under_epic = { IssueType::Task, IssueType::Epic },
    task_under_story = { IssueType::Task, IssueType::Story },
)]
fn check_parent_allowed(child: IssueType, parent: IssueType) {
    assert!(child.check_parent(parent).is_ok());
}

#[parameterized(
    epic_under_epic = { IssueType::Epic, IssueType::Epic, "epics" },
    epic_under_story = { IssueType::Epic, IssueType::Story, "epics" },
    epic_under_task = { IssueType::Epic, IssueType::Task, "epics" },
    story_under_story = { IssueType::Story, IssueType::Story, "stories" },
    story_under_task = { IssueType::Story, IssueType::Task, "stories" },
    task_under_task = { IssueType::Task, IssueType::Task, "tasks" },
)]
fn check_parent_rejected(child: IssueType, parent: IssueType, rule: &str) {
    let err = child.check_parent(parent).unwrap_err();
    assert!(err.starts_with(rule), "unexpected rule: {err}");
}

#[test]
fn issue_new_defaults() {
    let now = Utc::now();
    let issue = Issue::new("issue-1".into(), "Login".into(), IssueType::Story, now);

    assert_eq!(issue.id(), "issue-1");
    assert_eq!(issue.title(), "Login");
    assert_eq!(issue.issue_type(), IssueType::Story);
    assert_eq!(issue.state(), State::Todo);
    assert_eq!(issue.created_at(), now);
    assert!(issue.parent().is_none());
    assert!(issue.children().is_empty());
    assert!(issue.assignee().is_none());
}

#[test]
fn splice_child_keeps_sibling_order() {
    let mut issue = Issue::new("e".into(), "E".into(), IssueType::Epic, Utc::now());
    issue.add_child("a".into());
    issue.add_child("b".into());
    issue.add_child("c".into());

    issue.splice_child("b", &["x".to_string(), "y".to_string()]);
    assert_eq!(issue.children(), ["a", "x", "y", "c"]);

    issue.splice_child("x", &[]);
    assert_eq!(issue.children(), ["a", "y", "c"]);
}

#[test]
fn issue_type_serialization() {
    let json = serde_json::to_string(&IssueType::Story).unwrap();
    assert_eq!(json, "\"story\"");
    let parsed: IssueType = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, IssueType::Story);
}

#[test]
fn state_serialization() {
    let json = serde_json::to_string(&State::InProgress).unwrap();
    assert_eq!(json, "\"in_progress\"");
    let parsed: State = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, State::InProgress);
}

#[test]
fn issue_serialization_skips_empty_links() {
    let issue = Issue::new("issue-1".into(), "T".into(), IssueType::Task, Utc::now());
    let json = serde_json::to_string(&issue).unwrap();
    assert!(json.contains("\"issue_type\":\"task\""));
    assert!(json.contains("\"state\":\"todo\""));
    assert!(!json.contains("parent"));
    assert!(!json.contains("children"));
    assert!(!json.contains("assignee"));
}

#[test]
fn display_matches_as_str() {
    assert_eq!(format!("{}", IssueType::Epic), "epic");
    assert_eq!(format!("{}", State::InProgress), "in_progress");
    assert_eq!(format!("{}", State::Done), "done");
}
