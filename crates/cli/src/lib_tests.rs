// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

//! Tests for the public `run()` function.
//!
//! Commands that print a board are covered by the integration tests in
//! `tests/`; here we check routing and config resolution failures.

use super::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_run_with_missing_config_file() {
    let temp = TempDir::new().unwrap();
    let cli = Cli {
        config: Some(temp.path().join("missing.toml")),
        command: Command::Config,
    };
    assert!(matches!(run(cli), Err(Error::Config(_))));
}

#[test]
fn test_run_tree_propagates_op_failure() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("ops.jsonl");
    fs::write(&script, "{\"op\":\"set_state\",\"issue\":\"x\",\"state\":\"done\"}\n").unwrap();
    let config = temp.path().join("board.toml");
    fs::write(&config, "").unwrap();

    let cli = Cli {
        config: Some(config),
        command: Command::Tree {
            script,
            keep_going: false,
        },
    };
    assert!(matches!(
        run(cli),
        Err(Error::OpFailed { line: 1, op: "set_state", .. })
    ));
}

#[test]
fn test_run_list_missing_script() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("board.toml");
    fs::write(&config, "issue_prefix = \"prj\"\n").unwrap();

    let cli = Cli {
        config: Some(config),
        command: Command::List(ListArgs {
            script: PathBuf::from("/nonexistent/ops.jsonl"),
            issue_types: Vec::new(),
            assignee: None,
            since: None,
            until: None,
            output: OutputFormat::Text,
            keep_going: false,
        }),
    };
    assert!(matches!(run(cli), Err(Error::Core(board_core::Error::Io(_)))));
}
