// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Timestamp sources for issue creation times.
//!
//! The board only compares `created_at` values when filtering, so the one
//! property it needs from a clock is that values never go backwards. A
//! [`MonotonicClock`] wraps any [`ClockSource`] and clamps its output to the
//! last value handed out.

use chrono::{DateTime, Utc};
use std::sync::Mutex;

/// Trait for getting the current wall clock time.
///
/// This allows injecting a mock clock for testing.
pub trait ClockSource: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;
}

/// System clock implementation using [`Utc::now`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<C: ClockSource> ClockSource for &C {
    fn now(&self) -> DateTime<Utc> {
        (*self).now()
    }
}

/// A clock that produces monotonically non-decreasing timestamps.
///
/// If the underlying source goes backwards, the last returned value is
/// repeated until the source catches up.
#[derive(Debug)]
pub struct MonotonicClock<C: ClockSource = SystemClock> {
    source: C,
    last: Mutex<Option<DateTime<Utc>>>,
}

impl MonotonicClock<SystemClock> {
    /// Creates a monotonic clock backed by the system clock.
    pub fn system() -> Self {
        Self::with_source(SystemClock)
    }
}

impl Default for MonotonicClock<SystemClock> {
    fn default() -> Self {
        Self::system()
    }
}

impl<C: ClockSource> MonotonicClock<C> {
    /// Creates a monotonic clock with a custom clock source.
    pub fn with_source(source: C) -> Self {
        MonotonicClock {
            source,
            last: Mutex::new(None),
        }
    }
}

impl<C: ClockSource> ClockSource for MonotonicClock<C> {
    fn now(&self) -> DateTime<Utc> {
        let physical = self.source.now();
        let mut last = self.last.lock().unwrap_or_else(|e| e.into_inner());

        let next = match *last {
            Some(prev) if prev > physical => prev,
            _ => physical,
        };
        *last = Some(next);
        next
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
