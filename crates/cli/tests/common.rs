// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::path::PathBuf;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub fn board() -> Command {
    cargo_bin_cmd!("board")
}

/// A script with an epic/story/task chain, two users and one assignment.
pub const CHECKOUT: &str = r#"{"op":"add_issue","key":"e","title":"Checkout","issue_type":"epic"}
{"op":"add_issue","key":"s","title":"Pay by card","issue_type":"story"}
{"op":"add_issue","key":"t","title":"Validate number","issue_type":"task"}
{"op":"set_parent","child":"t","parent":"s"}
{"op":"set_parent","child":"s","parent":"e"}
{"op":"add_user","key":"alice","name":"Alice"}
{"op":"add_user","key":"bob","name":"Bob"}
{"op":"assign","user":"alice","issue":"t"}
{"op":"set_state","issue":"t","state":"in_progress"}
"#;

/// Helper to create a temp directory holding `ops.jsonl` with `content`.
pub fn script_dir(content: &str) -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("ops.jsonl");
    std::fs::write(&path, content).unwrap();
    (temp, path)
}

/// Helper to write `board.toml` into `temp`.
pub fn write_config(temp: &TempDir, content: &str) -> PathBuf {
    let path = temp.path().join("board.toml");
    std::fs::write(&path, content).unwrap();
    path
}
