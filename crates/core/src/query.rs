// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue query filters.
//!
//! Every filter that is set narrows the result; unset filters impose no
//! constraint. The date range is half-open: `since` is inclusive, `until`
//! is exclusive.

use chrono::{DateTime, Utc};

use crate::issue::{Issue, IssueType};

/// A conjunction of optional filters over issues.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IssueQuery {
    /// Keep only issues assigned to this user id.
    pub user_id: Option<String>,
    /// Keep only issues whose type is in this set.
    pub issue_types: Option<Vec<IssueType>>,
    /// Keep only issues created at or after this instant.
    pub start_date: Option<DateTime<Utc>>,
    /// Keep only issues created strictly before this instant.
    pub end_date: Option<DateTime<Utc>>,
}

impl IssueQuery {
    /// Creates a query with no filters, matching every issue.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assignee(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn types(mut self, types: impl IntoIterator<Item = IssueType>) -> Self {
        self.issue_types = Some(types.into_iter().collect());
        self
    }

    pub fn since(mut self, start: DateTime<Utc>) -> Self {
        self.start_date = Some(start);
        self
    }

    pub fn until(mut self, end: DateTime<Utc>) -> Self {
        self.end_date = Some(end);
        self
    }

    /// Returns true if no filter is set.
    pub fn is_empty(&self) -> bool {
        self.user_id.is_none()
            && self.issue_types.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }

    /// Checks an issue against every filter that is set.
    pub fn matches(&self, issue: &Issue) -> bool {
        if let Some(user_id) = &self.user_id {
            if issue.assignee() != Some(user_id.as_str()) {
                return false;
            }
        }
        if let Some(types) = &self.issue_types {
            if !types.contains(&issue.issue_type()) {
                return false;
            }
        }
        if let Some(start) = self.start_date {
            if issue.created_at() < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if issue.created_at() >= end {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
