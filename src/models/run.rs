// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Run record model and derived display values.

use crate::models::Duration;
use crate::time_utils::{format_run_date, run_date};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Pace text returned when a distance gives no finite pace.
pub const INVALID_DISTANCE: &str = "Invalid Distance";

/// One logged run.
///
/// Immutable once built; every derived value is a pure function of the
/// fields. Non-positive distances are valid records, they just have no pace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunRecord {
    #[serde(with = "run_date")]
    date: NaiveDate,
    distance_km: f64,
    duration: Duration,
}

impl RunRecord {
    pub fn new(date: NaiveDate, distance_km: f64, duration: Duration) -> Self {
        Self {
            date,
            distance_km,
            duration,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Run date as `YYYY-Mon-DD`.
    pub fn formatted_date(&self) -> String {
        format_run_date(self.date)
    }

    /// Distance exactly as stored with a `km` suffix (`5.42km`, `-10km`).
    pub fn formatted_distance(&self) -> String {
        format!("{}km", self.distance_km)
    }

    /// Minutes per kilometer with two decimals, or [`INVALID_DISTANCE`].
    ///
    /// Distances too small (or NaN) to give a finite pace count as invalid.
    pub fn pace(&self) -> String {
        if self.distance_km <= 0.0 {
            return INVALID_DISTANCE.to_string();
        }
        let pace = self.duration.total_minutes() / self.distance_km;
        if !pace.is_finite() {
            return INVALID_DISTANCE.to_string();
        }
        format!("{:.2}", pace)
    }
}

/// A run as presented to clients: every field pre-formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export, export_to = "bindings/"))]
pub struct RunView {
    pub date: String,
    pub distance: String,
    pub duration: String,
    pub pace: String,
}

impl From<&RunRecord> for RunView {
    fn from(run: &RunRecord) -> Self {
        Self {
            date: run.formatted_date(),
            distance: run.formatted_distance(),
            duration: run.duration().format(),
            pace: run.pace(),
        }
    }
}
