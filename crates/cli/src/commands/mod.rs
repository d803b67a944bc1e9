// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod demo;
pub mod list;
pub mod tree;

use std::path::Path;

use board_core::{jsonl, ClockSource, Op, Session};

use crate::config::Config;
use crate::error::{Error, Result};

/// A board rebuilt from a script.
pub struct Replay {
    pub session: Session,
    /// Ops that failed and were skipped under `--keep-going`.
    pub failed: usize,
}

/// Reads `script` and applies every op to a fresh board built from `config`.
pub fn replay(config: &Config, script: &Path, keep_going: bool) -> Result<Replay> {
    let ops = jsonl::read_all::<Op>(script)?;
    tracing::debug!(path = %script.display(), ops = ops.len(), "replaying script");

    let mut session = Session::with_board(config.new_board()?);
    let failed = apply_ops(&mut session, &ops, keep_going)?;
    Ok(Replay { session, failed })
}

/// Applies numbered ops in order.
///
/// Without `keep_going` the first failure aborts with [`Error::OpFailed`].
/// Otherwise failures are reported on stderr and counted.
pub(crate) fn apply_ops<C: ClockSource>(
    session: &mut Session<C>,
    ops: &[(usize, Op)],
    keep_going: bool,
) -> Result<usize> {
    let mut failed = 0;
    for (line, op) in ops {
        match session.apply(op) {
            Ok(()) => tracing::debug!(line, op = op.name(), "applied"),
            Err(e) if keep_going => {
                tracing::debug!(line, op = op.name(), error = %e, "skipped");
                eprintln!("warning: line {}: {} failed: {}", line, op.name(), e);
                failed += 1;
            }
            Err(e) => {
                return Err(Error::OpFailed {
                    line: *line,
                    op: op.name(),
                    reason: e.to_string(),
                })
            }
        }
    }
    Ok(failed)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
