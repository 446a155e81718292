// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Elapsed time of a run.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wall-clock elapsed time split into hours, minutes and seconds.
///
/// Components are stored as given. Minutes and seconds are expected to be
/// in `0..60` but values outside that range are kept verbatim, never
/// normalized (e.g. `0h 70m 0s` stays `0h 70m 0s`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Duration {
    hours: i64,
    minutes: i64,
    seconds: i64,
}

impl Duration {
    pub const fn new(hours: i64, minutes: i64, seconds: i64) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    pub fn hours(&self) -> i64 {
        self.hours
    }

    pub fn minutes(&self) -> i64 {
        self.minutes
    }

    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Human readable form, e.g. `"1h 4m 1s"`.
    pub fn format(&self) -> String {
        self.to_string()
    }

    /// Total elapsed time in (fractional) minutes.
    pub fn total_minutes(&self) -> f64 {
        self.hours as f64 * 60.0 + self.minutes as f64 + self.seconds as f64 / 60.0
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m {}s", self.hours, self.minutes, self.seconds)
    }
}
