// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod duration;
pub mod run;

pub use duration::Duration;
pub use run::{RunRecord, RunView, INVALID_DISTANCE};
