// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::IsTerminal;
use std::path::PathBuf;
use std::str::FromStr;

use anstyle::{Ansi256Color, Color, Style};
use board_core::IssueType;
use clap::builder::styling::Styles;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// 256-color codes for help output.
mod codes {
    pub const HEADER: u8 = 74;
    pub const LITERAL: u8 = 250;
    pub const CONTEXT: u8 = 245;
}

/// Help colors: on for a TTY or `COLOR=1`, off with `NO_COLOR=1`.
fn should_colorize() -> bool {
    if std::env::var("NO_COLOR").is_ok_and(|v| v == "1") {
        return false;
    }
    if std::env::var("COLOR").is_ok_and(|v| v == "1") {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn fg(code: u8) -> Style {
    Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))))
}

/// clap styles for help output.
pub fn styles() -> Styles {
    if !should_colorize() {
        return Styles::plain();
    }
    Styles::styled()
        .header(fg(codes::HEADER))
        .usage(fg(codes::HEADER))
        .literal(fg(codes::LITERAL))
        .placeholder(fg(codes::CONTEXT))
        .valid(fg(codes::CONTEXT))
}

/// Parse an issue type name (epic, story, task).
fn issue_type(s: &str) -> Result<IssueType, String> {
    IssueType::from_str(s).map_err(|e| e.to_string())
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "board")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "An in-memory board of epics, stories and tasks")]
#[command(
    long_about = "An in-memory board of epics, stories and tasks.\n\n\
    Boards are built by replaying JSON Lines scripts of operations; nothing is persisted."
)]
#[command(styles = styles())]
pub struct Cli {
    /// Read configuration from <path> instead of ./board.toml
    #[arg(long, global = true, value_name = "path")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the built-in walkthrough
    #[command(after_help = "\
Examples:
  board demo                      Apply the walkthrough and print the board
  board demo --script > demo.jsonl  Emit the walkthrough as a script")]
    Demo {
        /// Print the walkthrough as a JSON Lines script instead of running it
        #[arg(long)]
        script: bool,
    },

    /// Replay a script and list matching issues
    #[command(after_help = "\
Examples:
  board list ops.jsonl                    List every issue
  board list ops.jsonl -t story,task      List stories and tasks
  board list ops.jsonl -a alice           List issues assigned to user key 'alice'
  board list ops.jsonl --since 2026-01-01 List issues created on or after a date
  board list ops.jsonl -o json            Output as JSON")]
    List(ListArgs),

    /// Replay a script and print the issue hierarchy
    #[command(after_help = "\
Examples:
  board tree ops.jsonl                Print every tree on the board
  board tree ops.jsonl --keep-going   Skip failing ops instead of stopping")]
    Tree {
        /// JSON Lines script of operations
        script: PathBuf,

        /// Report failing operations and continue
        #[arg(long)]
        keep_going: bool,
    },

    /// Print the effective configuration
    Config,

    /// Generate shell completions
    #[command(hide = true)]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// JSON Lines script of operations
    pub script: PathBuf,

    /// Filter by issue type (comma-separated or repeated)
    #[arg(long = "type", short = 't', value_delimiter = ',', value_parser = issue_type)]
    pub issue_types: Vec<IssueType>,

    /// Filter by assignee (a user key bound in the script)
    #[arg(long, short)]
    pub assignee: Option<String>,

    /// Only issues created at or after this time (RFC 3339 or YYYY-MM-DD)
    #[arg(long)]
    pub since: Option<String>,

    /// Only issues created before this time (RFC 3339 or YYYY-MM-DD)
    #[arg(long)]
    pub until: Option<String>,

    /// Output format (text, json)
    #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Report failing operations and continue
    #[arg(long)]
    pub keep_going: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
