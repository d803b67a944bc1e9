// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User accounts that issues can be assigned to.

use serde::Serialize;

/// An account that can be assigned to zero or more issues.
///
/// `issues` is a reverse index maintained by [`Board`](crate::Board); it is
/// never an ownership edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    id: String,
    name: String,
    issues: Vec<String>,
}

impl User {
    pub(crate) fn new(id: String, name: String) -> Self {
        User {
            id,
            name,
            issues: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ids of the issues currently assigned to this user, oldest first.
    pub fn issues(&self) -> &[String] {
        &self.issues
    }

    pub(crate) fn add_issue(&mut self, issue_id: String) {
        if !self.issues.contains(&issue_id) {
            self.issues.push(issue_id);
        }
    }

    pub(crate) fn remove_issue(&mut self, issue_id: &str) {
        self.issues.retain(|id| id != issue_id);
    }
}

#[cfg(test)]
#[path = "user_tests.rs"]
mod tests;
