// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the board CLI.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] board_core::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("invalid timestamp: '{value}'\n  hint: use RFC 3339 (2026-01-15T12:00:00Z) or a date (2026-01-15)")]
    InvalidTimestamp { value: String },

    #[error("line {line}: {op} failed: {reason}")]
    OpFailed {
        line: usize,
        op: &'static str,
        reason: String,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
