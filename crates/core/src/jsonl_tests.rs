// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use serde::{Deserialize, Serialize};
use tempfile::TempDir;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct TestRecord {
    id: u32,
    name: String,
}

#[test]
fn read_all_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.jsonl");

    let err = read_all::<TestRecord>(&path).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn write_and_read_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("test.jsonl");

    let r1 = TestRecord {
        id: 1,
        name: "first".into(),
    };
    let r2 = TestRecord {
        id: 2,
        name: "second".into(),
    };
    let file = std::fs::File::create(&path).unwrap();
    write_all(file, &[r1.clone(), r2.clone()]).unwrap();

    let records: Vec<(usize, TestRecord)> = read_all(&path).unwrap();
    assert_eq!(records, vec![(1, r1), (2, r2)]);
}

#[test]
fn read_from_skips_empty_lines_and_keeps_line_numbers() {
    let input = "{\"id\":1,\"name\":\"a\"}\n\n   \n{\"id\":2,\"name\":\"b\"}\n";

    let records: Vec<(usize, TestRecord)> = read_from(input.as_bytes()).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].0, 1);
    assert_eq!(records[1].0, 4);
}

#[test]
fn read_from_reports_bad_line() {
    let input = "{\"id\":1,\"name\":\"a\"}\nnot json\n";

    let err = read_from::<TestRecord, _>(input.as_bytes()).unwrap_err();
    assert!(matches!(err, Error::InvalidLine { line: 2, .. }));
    assert!(err.to_string().starts_with("line 2:"));
}

#[test]
fn write_all_emits_one_line_per_record() {
    let mut out = Vec::new();
    let records = vec![
        TestRecord {
            id: 1,
            name: "a".into(),
        },
        TestRecord {
            id: 2,
            name: "b".into(),
        },
    ];
    write_all(&mut out, &records).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 2);
    assert!(text.ends_with('\n'));
}
