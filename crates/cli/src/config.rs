// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI configuration.
//!
//! Configuration is read from `board.toml` (or the path given with
//! `--config`) and includes:
//! - `issue_prefix`: prefix for generated issue ids (e.g., "prj" → "prj-a1b2c3d4")
//! - `user_prefix`: prefix for generated user ids
//! - `log_filter`: default tracing filter when `RUST_LOG` is unset

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use board_core::id::{validate_prefix, DEFAULT_ISSUE_PREFIX, DEFAULT_USER_PREFIX};
use board_core::Board;

use crate::error::{Error, Result};

/// Config file looked up in the working directory when `--config` is absent.
pub const CONFIG_FILE_NAME: &str = "board.toml";

/// Effective configuration for a CLI invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prefix for issue ids (2+ lowercase alphanumeric with at least one letter).
    pub issue_prefix: String,
    /// Prefix for user ids (same rules as `issue_prefix`).
    pub user_prefix: String,
    /// Tracing filter directive, e.g. `"board_core=debug"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            issue_prefix: DEFAULT_ISSUE_PREFIX.to_string(),
            user_prefix: DEFAULT_USER_PREFIX.to_string(),
            log_filter: None,
        }
    }
}

impl Config {
    /// Loads and validates configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `board.toml` from `dir` if it exists, otherwise returns defaults.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Config::default())
        }
    }

    /// Resolves the effective config: an explicit path wins, then discovery
    /// in the current directory.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => Self::discover(&std::env::current_dir()?),
        }
    }

    /// Checks both id prefixes.
    pub fn validate(&self) -> Result<()> {
        for (field, prefix) in [
            ("issue_prefix", &self.issue_prefix),
            ("user_prefix", &self.user_prefix),
        ] {
            if !validate_prefix(prefix) {
                return Err(Error::Config(format!(
                    "invalid {field} '{prefix}': must be 2+ lowercase alphanumeric with at least one letter"
                )));
            }
        }
        Ok(())
    }

    /// Serializes the config as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))
    }

    /// Creates an empty board using this config's id prefixes.
    pub fn new_board(&self) -> Result<Board> {
        Ok(Board::new().with_prefixes(&self.issue_prefix, &self.user_prefix)?)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
