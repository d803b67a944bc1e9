// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! board-core: In-memory issue board
//!
//! This crate provides the domain model for a hierarchy of work items
//! (epics, stories, tasks): the [`Board`] aggregate that owns issues and
//! users and enforces the hierarchy and completion rules, plus the
//! collaborators it consumes (clock, id generator) and a replayable
//! operation format used by the `board` CLI.

pub mod board;
pub mod clock;
pub mod error;
pub mod id;
pub mod issue;
pub mod jsonl;
pub mod op;
pub mod query;
pub mod user;

pub use board::Board;
pub use clock::{ClockSource, MonotonicClock, SystemClock};
pub use error::{Error, Result};
pub use id::IdGenerator;
pub use issue::{Issue, IssueType, State};
pub use op::{Op, Session};
pub use query::IssueQuery;
pub use user::User;
