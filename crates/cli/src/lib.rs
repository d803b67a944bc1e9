// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! board-cli - command line front end for the in-memory issue board.
//!
//! Boards live only for the duration of a command: each invocation replays
//! a JSON Lines script of [`board_core::Op`]s into a fresh
//! [`board_core::Board`] and prints the result.
//!
//! # Main Components
//!
//! - [`Cli`] - clap definitions for the `board` binary
//! - [`Config`] - id prefixes and log filter from `board.toml`
//! - [`Error`] - Error types for all commands

mod cli;
mod commands;
mod display;
mod logging;
mod timestamp;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, ListArgs, OutputFormat};
pub use config::Config;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Runs a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let config = Config::resolve(cli.config.as_deref())?;
    logging::setup_logging(&config);
    tracing::debug!(?config, "resolved config");

    match cli.command {
        Command::Demo { script } => commands::demo::run(&config, script),
        Command::List(args) => commands::list::run(&config, &args),
        Command::Tree { script, keep_going } => commands::tree::run(&config, &script, keep_going),
        Command::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "board", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
