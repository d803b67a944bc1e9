// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core issue types for the board.
//!
//! This module contains the work item entity and its closed enumerations:
//! Issue, IssueType and State.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Classification of issues by their place in the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    /// Top-level initiative. Never has a parent.
    Epic,
    /// Mid-level work item. Parent must be an epic.
    Story,
    /// Leaf-level unit of work. Parent must not be another task.
    Task,
}

impl IssueType {
    /// Returns the string representation used in scripts and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueType::Epic => "epic",
            IssueType::Story => "story",
            IssueType::Task => "task",
        }
    }

    /// Checks whether an issue of this type may be placed under `parent`.
    ///
    /// On violation, returns the rule that was broken.
    pub fn check_parent(&self, parent: IssueType) -> std::result::Result<(), &'static str> {
        match (self, parent) {
            (IssueType::Epic, _) => Err("epics cannot have parents"),
            (IssueType::Story, IssueType::Epic) => Ok(()),
            (IssueType::Story, _) => Err("stories can only have epics as parents"),
            (IssueType::Task, IssueType::Task) => Err("tasks cannot have tasks as parents"),
            (IssueType::Task, _) => Ok(()),
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IssueType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "epic" => Ok(IssueType::Epic),
            "story" => Ok(IssueType::Story),
            "task" => Ok(IssueType::Task),
            _ => Err(Error::InvalidIssueType(s.to_string())),
        }
    }
}

/// Completion state of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum State {
    /// Not yet started. Initial state for new issues.
    Todo,
    /// Currently being worked on.
    InProgress,
    /// Completed.
    Done,
}

impl State {
    /// Returns the string representation used in scripts and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            State::Todo => "todo",
            State::InProgress => "in_progress",
            State::Done => "done",
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, State::Done)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for State {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "todo" => Ok(State::Todo),
            "in_progress" | "in-progress" => Ok(State::InProgress),
            "done" => Ok(State::Done),
            _ => Err(Error::InvalidState(s.to_string())),
        }
    }
}

/// A tracked work item.
///
/// Issues are created and mutated only through [`Board`](crate::Board),
/// which keeps `parent`, `children` and `assignee` consistent with the
/// rest of the board. Links are stored as ids into the board's maps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    id: String,
    title: String,
    issue_type: IssueType,
    state: State,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    assignee: Option<String>,
    created_at: DateTime<Utc>,
}

impl Issue {
    pub(crate) fn new(
        id: String,
        title: String,
        issue_type: IssueType,
        created_at: DateTime<Utc>,
    ) -> Self {
        Issue {
            id,
            title,
            issue_type,
            state: State::Todo,
            parent: None,
            children: Vec::new(),
            assignee: None,
            created_at,
        }
    }

    /// Unique identifier (format: `{prefix}-{hash}`).
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn issue_type(&self) -> IssueType {
        self.issue_type
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Id of the parent issue, if any.
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Ids of direct children, in the order they were attached.
    pub fn children(&self) -> &[String] {
        &self.children
    }

    /// Id of the assigned user, if any.
    pub fn assignee(&self) -> Option<&str> {
        self.assignee.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub(crate) fn set_state(&mut self, state: State) {
        self.state = state;
    }

    pub(crate) fn set_parent(&mut self, parent: Option<String>) {
        self.parent = parent;
    }

    pub(crate) fn set_assignee(&mut self, assignee: Option<String>) {
        self.assignee = assignee;
    }

    pub(crate) fn add_child(&mut self, child_id: String) {
        self.children.push(child_id);
    }

    pub(crate) fn remove_child(&mut self, child_id: &str) {
        self.children.retain(|id| id != child_id);
    }

    /// Replaces `child_id` in place with `replacements`, keeping sibling order.
    pub(crate) fn splice_child(&mut self, child_id: &str, replacements: &[String]) {
        match self.children.iter().position(|id| id == child_id) {
            Some(pos) => {
                let tail = self.children.split_off(pos + 1);
                self.children.truncate(pos);
                self.children.extend(replacements.iter().cloned());
                self.children.extend(tail);
            }
            None => self.children.extend(replacements.iter().cloned()),
        }
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
