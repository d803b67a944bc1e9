// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use crate::config::Config;
use crate::display::format_forest;
use crate::error::Result;

use super::replay;

pub fn run(config: &Config, script: &Path, keep_going: bool) -> Result<()> {
    let replay = replay(config, script, keep_going)?;
    for line in format_forest(replay.session.board()) {
        println!("{}", line);
    }
    if replay.failed > 0 {
        tracing::info!(failed = replay.failed, "some operations were skipped");
    }
    Ok(())
}
