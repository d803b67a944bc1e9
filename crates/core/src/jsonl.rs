// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSONL (JSON Lines) utilities.
//!
//! Used to load op scripts. Each record is a single JSON line; blank lines
//! are skipped. Records keep their 1-based line number so callers can point
//! at the offending line.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{Error, Result};

/// Reads all records from a JSONL file, paired with their line numbers.
pub fn read_all<T: DeserializeOwned>(path: &Path) -> Result<Vec<(usize, T)>> {
    let file = File::open(path)?;
    read_from(BufReader::new(file))
}

/// Reads all records from any buffered reader, paired with their line numbers.
pub fn read_from<T: DeserializeOwned, R: BufRead>(reader: R) -> Result<Vec<(usize, T)>> {
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record: T = serde_json::from_str(&line).map_err(|e| Error::InvalidLine {
            line: index + 1,
            reason: e.to_string(),
        })?;
        records.push((index + 1, record));
    }

    Ok(records)
}

/// Writes records as JSON lines to `writer`.
pub fn write_all<T: Serialize, W: Write>(mut writer: W, records: &[T]) -> Result<()> {
    for record in records {
        let json = serde_json::to_string(record)?;
        writeln!(writer, "{json}")?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "jsonl_tests.rs"]
mod tests;
