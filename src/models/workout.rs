// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Finalized strength workouts and aggregate results.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::{Exercise, WorkoutType, ZoneDistribution};

/// A validated workout ready to be stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/lib/generated/")
)]
pub struct NewWorkout {
    pub user_id: String,
    #[serde(rename = "type")]
    pub workout_type: WorkoutType,
    pub exercises: Vec<Exercise>,
    /// Sum of weight × sets × reps
    pub total_volume: f64,
    /// Elapsed time in seconds
    pub duration: u64,
    pub notes: String,
}

/// Stored workout record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/lib/generated/")
)]
pub struct WorkoutRecord {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: u64,
    #[serde(flatten)]
    pub workout: NewWorkout,
    /// When the workout was stored (RFC 3339)
    pub saved_at: String,
}

/// Summary numbers shown on the dashboard for one activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/lib/generated/")
)]
pub struct AggregateResult {
    pub total_volume: f64,
    pub zone_distribution: ZoneDistribution,
}
