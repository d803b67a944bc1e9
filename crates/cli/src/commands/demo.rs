// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io;

use board_core::{jsonl, ClockSource, IssueType, Op, Session, State};

use crate::config::Config;
use crate::display::format_forest;
use crate::error::Result;

pub fn run(config: &Config, script: bool) -> Result<()> {
    let ops = walkthrough();
    if script {
        jsonl::write_all(io::stdout().lock(), &ops)?;
        return Ok(());
    }

    let mut session = Session::with_board(config.new_board()?);
    for line in run_steps(&mut session, &ops) {
        println!("{}", line);
    }
    println!();
    for line in format_forest(session.board()) {
        println!("{}", line);
    }
    Ok(())
}

/// Applies each op and reports the outcome. Rejections are expected.
pub(crate) fn run_steps<C: ClockSource>(session: &mut Session<C>, ops: &[Op]) -> Vec<String> {
    ops.iter()
        .map(|op| match session.apply(op) {
            Ok(()) => format!("ok        {}", describe(op)),
            Err(e) => {
                tracing::debug!(op = op.name(), error = %e, "demo step rejected");
                format!("rejected  {} ({})", describe(op), e)
            }
        })
        .collect()
}

/// One-line summary of an op using its script keys.
pub(crate) fn describe(op: &Op) -> String {
    match op {
        Op::AddIssue {
            key,
            title,
            issue_type,
        } => format!("add_issue {key}: [{issue_type}] {title}"),
        Op::AddUser { key, name } => format!("add_user {key}: {name}"),
        Op::SetParent { child, parent } => format!("set_parent {child} -> {parent}"),
        Op::SetState { issue, state } => format!("set_state {issue} -> {state}"),
        Op::Assign { user, issue } => format!("assign {user} -> {issue}"),
        Op::Unassign { issue } => format!("unassign {issue}"),
        Op::RemoveIssue { issue } => format!("remove_issue {issue}"),
        Op::RemoveUser { user } => format!("remove_user {user}"),
    }
}

/// The built-in walkthrough: an epic, story and task linked into one tree,
/// driven to done bottom-up, plus a user removal that clears an assignment.
pub(crate) fn walkthrough() -> Vec<Op> {
    let issue = |key: &str, title: &str, issue_type| Op::AddIssue {
        key: key.into(),
        title: title.into(),
        issue_type,
    };
    let state = |key: &str, state| Op::SetState {
        issue: key.into(),
        state,
    };
    let user = |key: &str| Op::AddUser {
        key: key.into(),
        name: key.into(),
    };
    let assign = |user: &str, issue: &str| Op::Assign {
        user: user.into(),
        issue: issue.into(),
    };

    vec![
        issue("e", "Checkout", IssueType::Epic),
        issue("s", "Pay by card", IssueType::Story),
        issue("t", "Validate card number", IssueType::Task),
        Op::SetParent {
            child: "t".into(),
            parent: "s".into(),
        },
        Op::SetParent {
            child: "s".into(),
            parent: "e".into(),
        },
        user("alice"),
        assign("alice", "t"),
        state("t", State::InProgress),
        state("s", State::InProgress),
        state("e", State::InProgress),
        state("e", State::Done),
        state("t", State::Done),
        state("e", State::Done),
        state("s", State::Done),
        state("e", State::Done),
        user("bob"),
        assign("bob", "s"),
        Op::RemoveUser { user: "bob".into() },
    ]
}

#[cfg(test)]
#[path = "demo_tests.rs"]
mod tests;
