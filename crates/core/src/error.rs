// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for board-core operations.

use thiserror::Error;

/// All possible errors that can occur in board-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("issue not found: {0}")]
    IssueNotFound(String),

    #[error("user not found: {0}")]
    UserNotFound(String),

    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    #[error("invalid issue type: '{0}'\n  hint: valid types are: epic, story, task")]
    InvalidIssueType(String),

    #[error("invalid state: '{0}'\n  hint: valid states are: todo, in_progress, done")]
    InvalidState(String),

    #[error("invalid prefix: '{0}'\n  hint: use 2+ lowercase alphanumeric characters with at least one letter")]
    InvalidPrefix(String),

    #[error("unknown key: '{0}'\n  hint: keys are bound by add_issue and add_user")]
    UnknownKey(String),

    #[error("duplicate key: '{0}'")]
    DuplicateKey(String),

    #[error("line {line}: {reason}")]
    InvalidLine { line: usize, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns true for the not-found family of errors.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::IssueNotFound(_) | Error::UserNotFound(_))
    }
}

/// A specialized Result type for board-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
