// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Board operations as data.
//!
//! Every mutating board operation has an [`Op`] variant, so a sequence of
//! mutations can be stored as JSON Lines and replayed into a fresh board.
//! Ids are generated at replay time, so ops refer to entities through
//! script-local keys bound by `add_issue` and `add_user`.
//!
//! ```json
//! {"op":"add_issue","key":"e","title":"Checkout","issue_type":"epic"}
//! {"op":"add_issue","key":"s","title":"Pay by card","issue_type":"story"}
//! {"op":"set_parent","child":"s","parent":"e"}
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::board::Board;
use crate::clock::{ClockSource, SystemClock};
use crate::error::{Error, Result};
use crate::issue::{IssueType, State};

/// A single board mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Op {
    /// Create an issue and bind it to `key`.
    AddIssue {
        key: String,
        title: String,
        issue_type: IssueType,
    },

    /// Create a user and bind it to `key`.
    AddUser { key: String, name: String },

    /// Attach `child` under `parent`.
    SetParent { child: String, parent: String },

    /// Change the state of an issue.
    SetState { issue: String, state: State },

    /// Assign an issue to a user.
    Assign { user: String, issue: String },

    /// Clear the assignee of an issue.
    Unassign { issue: String },

    /// Remove an issue from the board.
    RemoveIssue { issue: String },

    /// Remove a user from the board.
    RemoveUser { user: String },
}

impl Op {
    /// Returns the snake_case name of this op.
    pub fn name(&self) -> &'static str {
        match self {
            Op::AddIssue { .. } => "add_issue",
            Op::AddUser { .. } => "add_user",
            Op::SetParent { .. } => "set_parent",
            Op::SetState { .. } => "set_state",
            Op::Assign { .. } => "assign",
            Op::Unassign { .. } => "unassign",
            Op::RemoveIssue { .. } => "remove_issue",
            Op::RemoveUser { .. } => "remove_user",
        }
    }
}

/// A board together with the key table of the script driving it.
pub struct Session<C: ClockSource = SystemClock> {
    board: Board<C>,
    issues: HashMap<String, String>,
    users: HashMap<String, String>,
}

impl Session<SystemClock> {
    pub fn new() -> Self {
        Self::with_board(Board::new())
    }
}

impl Default for Session<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ClockSource> Session<C> {
    /// Wraps an existing board. Keys start out empty.
    pub fn with_board(board: Board<C>) -> Self {
        Session {
            board,
            issues: HashMap::new(),
            users: HashMap::new(),
        }
    }

    pub fn board(&self) -> &Board<C> {
        &self.board
    }

    pub fn into_board(self) -> Board<C> {
        self.board
    }

    /// Returns the issue id bound to `key`, if any.
    pub fn issue_id(&self, key: &str) -> Option<&str> {
        self.issues.get(key).map(String::as_str)
    }

    /// Returns the user id bound to `key`, if any.
    pub fn user_id(&self, key: &str) -> Option<&str> {
        self.users.get(key).map(String::as_str)
    }

    /// Applies one op to the board.
    ///
    /// Keys are resolved before the board is touched, so a failed op leaves
    /// both the board and the key table unchanged.
    pub fn apply(&mut self, op: &Op) -> Result<()> {
        match op {
            Op::AddIssue {
                key,
                title,
                issue_type,
            } => {
                ensure_unbound(&self.issues, key)?;
                let id = self.board.add_issue(title.as_str(), *issue_type);
                self.issues.insert(key.clone(), id);
            }
            Op::AddUser { key, name } => {
                ensure_unbound(&self.users, key)?;
                let id = self.board.add_user(name.as_str());
                self.users.insert(key.clone(), id);
            }
            Op::SetParent { child, parent } => {
                let child = resolve(&self.issues, child)?;
                let parent = resolve(&self.issues, parent)?;
                self.board.set_parent_issue(child, parent)?;
            }
            Op::SetState { issue, state } => {
                let issue = resolve(&self.issues, issue)?;
                self.board.set_issue_state(issue, *state)?;
            }
            Op::Assign { user, issue } => {
                let user = resolve(&self.users, user)?;
                let issue = resolve(&self.issues, issue)?;
                self.board.assign_user(user, issue)?;
            }
            Op::Unassign { issue } => {
                let issue = resolve(&self.issues, issue)?;
                self.board.unassign_issue(issue)?;
            }
            Op::RemoveIssue { issue } => {
                let id = resolve(&self.issues, issue)?.to_string();
                self.board.remove_issue(&id)?;
                self.issues.remove(issue);
            }
            Op::RemoveUser { user } => {
                let id = resolve(&self.users, user)?.to_string();
                self.board.remove_user(&id)?;
                self.users.remove(user);
            }
        }
        Ok(())
    }
}

fn resolve<'a>(keys: &'a HashMap<String, String>, key: &str) -> Result<&'a str> {
    keys.get(key)
        .map(String::as_str)
        .ok_or_else(|| Error::UnknownKey(key.to_string()))
}

fn ensure_unbound(keys: &HashMap<String, String>, key: &str) -> Result<()> {
    if keys.contains_key(key) {
        return Err(Error::DuplicateKey(key.to_string()));
    }
    Ok(())
}

#[cfg(test)]
#[path = "op_tests.rs"]
mod tests;
