// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Identifier generation for issues and users.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use std::collections::HashSet;

use crate::error::{Error, Result};

/// Default prefix for issue ids.
pub const DEFAULT_ISSUE_PREFIX: &str = "issue";
/// Default prefix for user ids.
pub const DEFAULT_USER_PREFIX: &str = "user";

/// Validate that a prefix is valid (2+ lowercase alphanumeric with at least one letter)
pub fn validate_prefix(prefix: &str) -> bool {
    prefix.len() >= 2
        && prefix
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        && prefix.chars().any(|c| c.is_ascii_lowercase())
}

/// Issues ids that are unique for the lifetime of the generator.
///
/// Every id ever handed out is remembered, so an id freed by a removal is
/// never reissued. A running sequence number is mixed into the hash seed so
/// identical titles created in the same instant still get distinct base ids.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    prefix: String,
    seq: u64,
    issued: HashSet<String>,
}

impl IdGenerator {
    /// Creates a generator for the given prefix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPrefix`] if the prefix fails [`validate_prefix`].
    pub fn new(prefix: &str) -> Result<Self> {
        if !validate_prefix(prefix) {
            return Err(Error::InvalidPrefix(prefix.to_string()));
        }
        Ok(Self::with_valid_prefix(prefix))
    }

    /// Generator using [`DEFAULT_ISSUE_PREFIX`].
    pub fn for_issues() -> Self {
        Self::with_valid_prefix(DEFAULT_ISSUE_PREFIX)
    }

    /// Generator using [`DEFAULT_USER_PREFIX`].
    pub fn for_users() -> Self {
        Self::with_valid_prefix(DEFAULT_USER_PREFIX)
    }

    fn with_valid_prefix(prefix: &str) -> Self {
        IdGenerator {
            prefix: prefix.to_string(),
            seq: 0,
            issued: HashSet::new(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Produces the next id for an entity labelled `seed` created at `created_at`.
    ///
    /// The base id is `{prefix}-{8 hex}` from a SHA-256 of the seed, the
    /// sequence number and the timestamp. A base id already handed out gets
    /// the first free `-2`, `-3`, ... suffix.
    pub fn next_id(&mut self, seed: &str, created_at: &DateTime<Utc>) -> String {
        self.seq += 1;
        let base = self.hashed_id(seed, created_at);

        let mut id = base.clone();
        let mut suffix = 2;
        while self.issued.contains(&id) {
            id = format!("{base}-{suffix}");
            suffix += 1;
        }
        self.issued.insert(id.clone());
        id
    }

    fn hashed_id(&self, seed: &str, created_at: &DateTime<Utc>) -> String {
        let input = format!("{}#{}{}", seed, self.seq, created_at.to_rfc3339());
        let digest = Sha256::digest(input.as_bytes());
        format!("{}-{}", self.prefix, hex::encode(&digest[..4]))
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
