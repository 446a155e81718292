// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date formatting and parsing.

use chrono::{DateTime, NaiveDate};

/// Display format for run dates, e.g. `2013-Feb-03`.
pub const RUN_DATE_FORMAT: &str = "%Y-%b-%d";

/// Format a run date as `YYYY-Mon-DD`.
pub fn format_run_date(date: NaiveDate) -> String {
    date.format(RUN_DATE_FORMAT).to_string()
}

/// Parse a submitted run date.
///
/// Accepts `YYYY-MM-DD`, an RFC3339 timestamp (the calendar date as written
/// in its own offset is used) or the display form `YYYY-Mon-DD`.
pub fn parse_run_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.date_naive())
        })
        .or_else(|| NaiveDate::parse_from_str(raw, RUN_DATE_FORMAT).ok())
}

/// Serde adapter for run dates: serializes as `YYYY-MM-DD`, deserializes
/// anything [`parse_run_date`] accepts.
pub mod run_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format("%Y-%m-%d"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_run_date(&raw).ok_or_else(|| {
            de::Error::custom(format!(
                "invalid date '{raw}': expected YYYY-MM-DD, RFC3339 or YYYY-Mon-DD"
            ))
        })
    }
}
