// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-user workout aggregates for dashboard queries.
//!
//! These aggregates are updated as each workout is stored, so the dashboard
//! never has to re-scan a user's whole workout history.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::WorkoutRecord;

/// Pre-computed workout statistics for a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/lib/generated/")
)]
pub struct UserStats {
    // ─── Totals ──────────────────────────────────────────────────
    /// Total workouts stored
    #[serde(default)]
    pub total_workouts: u32,
    /// Total training volume across all workouts (kg)
    #[serde(default)]
    pub total_volume: f64,
    /// Total logged workout time (seconds)
    #[serde(default)]
    pub total_duration_seconds: u64,

    // ─── By Workout Type ─────────────────────────────────────────
    /// Workout count per type
    #[serde(default)]
    pub workouts_by_type: HashMap<String, u32>,
    /// Volume per type
    #[serde(default)]
    pub volume_by_type: HashMap<String, f64>,

    // ─── Time Series ─────────────────────────────────────────────
    /// Workout count per month ("YYYY-MM" format)
    #[serde(default)]
    pub workouts_by_month: HashMap<String, u32>,

    // ─── Idempotency ─────────────────────────────────────────────
    /// Workout ids already counted
    #[serde(default)]
    #[cfg_attr(feature = "binding-generation", ts(type = "number[]"))]
    pub processed_workout_ids: HashSet<u64>,

    // ─── Metadata ────────────────────────────────────────────────
    /// Last update timestamp (ISO 8601)
    #[serde(default)]
    pub updated_at: String,
}

impl UserStats {
    /// Update stats with a stored workout.
    ///
    /// Returns `false` without changing anything if the workout was already
    /// counted. Counters saturate, so the update never panics part way.
    pub fn update_from_workout(&mut self, record: &WorkoutRecord) -> bool {
        if self.processed_workout_ids.contains(&record.id) {
            return false;
        }

        let workout = &record.workout;
        let type_key = workout.workout_type.as_str().to_string();
        let month_key = extract_month_key(&record.saved_at);

        self.processed_workout_ids.insert(record.id);
        self.updated_at = record.saved_at.clone();
        self.total_workouts = self.total_workouts.saturating_add(1);
        self.total_volume += workout.total_volume;
        self.total_duration_seconds = self
            .total_duration_seconds
            .saturating_add(workout.duration);

        let count = self.workouts_by_type.entry(type_key.clone()).or_insert(0);
        *count = count.saturating_add(1);
        *self.volume_by_type.entry(type_key).or_insert(0.0) += workout.total_volume;

        if let Some(month_key) = month_key {
            let count = self.workouts_by_month.entry(month_key).or_insert(0);
            *count = count.saturating_add(1);
        }

        true
    }
}

/// Extract "YYYY-MM" from an ISO 8601 date string.
fn extract_month_key(date: &str) -> Option<String> {
    // "2024-01-15T10:30:00Z" -> "2024-01"
    date.get(..7).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewWorkout, WorkoutType};

    fn make_record(id: u64, workout_type: WorkoutType, volume: f64, date: &str) -> WorkoutRecord {
        WorkoutRecord {
            id,
            workout: NewWorkout {
                user_id: "user-30".to_string(),
                workout_type,
                exercises: vec![],
                total_volume: volume,
                duration: 600,
                notes: String::new(),
            },
            saved_at: date.to_string(),
        }
    }

    #[test]
    fn test_update_from_workout_basic() {
        let mut stats = UserStats::default();
        let record = make_record(1, WorkoutType::Kettlebell, 960.0, "2024-01-15T10:00:00Z");

        assert!(stats.update_from_workout(&record));
        assert_eq!(stats.total_workouts, 1);
        assert_eq!(stats.total_volume, 960.0);
        assert_eq!(stats.total_duration_seconds, 600);
        assert_eq!(stats.workouts_by_type.get("kettlebell"), Some(&1));
        assert_eq!(stats.volume_by_type.get("kettlebell"), Some(&960.0));
        assert_eq!(stats.workouts_by_month.get("2024-01"), Some(&1));
        assert_eq!(stats.updated_at, "2024-01-15T10:00:00Z");
    }

    #[test]
    fn test_idempotency_skips_duplicate() {
        let mut stats = UserStats::default();
        let record = make_record(7, WorkoutType::Bodyweight, 0.0, "2024-01-15T10:00:00Z");

        stats.update_from_workout(&record);
        assert!(!stats.update_from_workout(&record));
        assert_eq!(stats.total_workouts, 1);
    }

    #[test]
    fn test_bodyweight_counts_workout_but_no_volume() {
        let mut stats = UserStats::default();
        stats.update_from_workout(&make_record(
            1,
            WorkoutType::Bodyweight,
            0.0,
            "2024-02-01T08:00:00Z",
        ));
        stats.update_from_workout(&make_record(
            2,
            WorkoutType::Kettlebell,
            480.0,
            "2024-03-01T08:00:00Z",
        ));

        assert_eq!(stats.total_workouts, 2);
        assert_eq!(stats.total_volume, 480.0);
        assert_eq!(stats.volume_by_type.get("bodyweight"), Some(&0.0));
        assert_eq!(stats.workouts_by_month.len(), 2);
    }

    #[test]
    fn test_duration_saturates_instead_of_overflowing() {
        let mut stats = UserStats::default();
        let mut first = make_record(1, WorkoutType::Barbell, 100.0, "2024-01-15T10:00:00Z");
        first.workout.duration = u64::MAX;
        let mut second = first.clone();
        second.id = 2;

        assert!(stats.update_from_workout(&first));
        assert!(stats.update_from_workout(&second));
        assert_eq!(stats.total_workouts, 2);
        assert_eq!(stats.total_duration_seconds, u64::MAX);
        assert_eq!(stats.processed_workout_ids.len(), 2);
    }

    #[test]
    fn test_short_date_has_no_month() {
        assert_eq!(extract_month_key("2024"), None);
        assert_eq!(extract_month_key("2024-05-01"), Some("2024-05".to_string()));
    }
}
