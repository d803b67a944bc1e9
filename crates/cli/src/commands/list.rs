// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use board_core::{ClockSource, IssueQuery, Session};

use crate::cli::{ListArgs, OutputFormat};
use crate::config::Config;
use crate::display::{assignee_of, format_issue_line};
use crate::error::Result;
use crate::timestamp::parse_timestamp;

use super::replay;

pub fn run(config: &Config, args: &ListArgs) -> Result<()> {
    let replay = replay(config, &args.script, args.keep_going)?;
    for line in render(&replay.session, args)? {
        println!("{}", line);
    }
    Ok(())
}

/// Runs the query described by `args` and formats the result.
pub(crate) fn render<C: ClockSource>(session: &Session<C>, args: &ListArgs) -> Result<Vec<String>> {
    let query = build_query(session, args)?;
    let board = session.board();
    let issues = board.get_issues(&query);

    match args.output {
        OutputFormat::Text => Ok(issues
            .iter()
            .map(|issue| format_issue_line(issue, assignee_of(board, issue)))
            .collect()),
        OutputFormat::Json => Ok(vec![serde_json::to_string_pretty(&issues)?]),
    }
}

/// Translates list flags into a query. The assignee is a script user key.
pub(crate) fn build_query<C: ClockSource>(
    session: &Session<C>,
    args: &ListArgs,
) -> Result<IssueQuery> {
    let mut query = IssueQuery::new();

    if !args.issue_types.is_empty() {
        query = query.types(args.issue_types.iter().copied());
    }
    if let Some(key) = &args.assignee {
        let user_id = session
            .user_id(key)
            .ok_or_else(|| board_core::Error::UnknownKey(key.clone()))?;
        query = query.assignee(user_id);
    }
    if let Some(since) = &args.since {
        query = query.since(parse_timestamp(since)?);
    }
    if let Some(until) = &args.until {
        query = query.until(parse_timestamp(until)?);
    }

    Ok(query)
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
