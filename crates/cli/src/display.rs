// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use board_core::{Board, ClockSource, Issue, State, User};

/// Format a single issue line for list output
pub fn format_issue_line(issue: &Issue, assignee: Option<&User>) -> String {
    let state_display = match assignee {
        Some(user) => format!("{}, @{}", issue.state(), user.name()),
        None => issue.state().to_string(),
    };
    format!(
        "- [{}] ({}) {}: {}",
        issue.issue_type(),
        state_display,
        issue.id(),
        issue.title()
    )
}

/// Format the label shared by tree roots and children.
fn tree_label(issue: &Issue, assignee: Option<&User>) -> String {
    let state_str = if issue.state() != State::Todo {
        format!(" [{}]", issue.state())
    } else {
        String::new()
    };
    let assignee_str = match assignee {
        Some(user) => format!(" @{}", user.name()),
        None => String::new(),
    };
    format!(
        "{}: ({}) {}{}{}",
        issue.id(),
        issue.issue_type(),
        issue.title(),
        state_str,
        assignee_str
    )
}

/// Format tree output for a root node
pub fn format_tree_root(issue: &Issue, assignee: Option<&User>) -> String {
    tree_label(issue, assignee)
}

/// Format tree output for child node
pub fn format_tree_child(
    issue: &Issue,
    assignee: Option<&User>,
    prefix: &str,
    is_last: bool,
) -> String {
    let connector = if is_last { "└── " } else { "├── " };
    format!("{}{}{}", prefix, connector, tree_label(issue, assignee))
}

/// Render every tree on the board, roots in creation order.
pub fn format_forest<C: ClockSource>(board: &Board<C>) -> Vec<String> {
    let mut lines = Vec::new();
    for root in board.roots() {
        lines.push(format_tree_root(root, assignee_of(board, root)));
        push_children(board, root, "", &mut lines);
    }
    lines
}

fn push_children<C: ClockSource>(
    board: &Board<C>,
    issue: &Issue,
    prefix: &str,
    lines: &mut Vec<String>,
) {
    let children: Vec<&Issue> = issue
        .children()
        .iter()
        .filter_map(|id| board.get_issue(id))
        .collect();

    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        lines.push(format_tree_child(
            child,
            assignee_of(board, child),
            prefix,
            is_last,
        ));

        let child_prefix = if is_last {
            format!("{}    ", prefix)
        } else {
            format!("{}│   ", prefix)
        };
        push_children(board, child, &child_prefix, lines);
    }
}

/// Looks up the user an issue is assigned to.
pub fn assignee_of<'a, C: ClockSource>(board: &'a Board<C>, issue: &Issue) -> Option<&'a User> {
    issue.assignee().and_then(|id| board.get_user(id))
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
