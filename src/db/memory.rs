// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process store with typed operations.
//!
//! Provides high-level operations for:
//! - Profiles (onboarding result, keyed by user id)
//! - Workouts (stored strength workouts)
//! - Stats (per-user aggregates, updated with each workout)

use crate::error::AppError;
use crate::models::{NewWorkout, UserProfile, UserStats, WorkoutRecord};
use crate::time_utils::format_utc_rfc3339;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Default)]
struct Inner {
    profiles: DashMap<String, UserProfile>,
    workouts: DashMap<u64, WorkoutRecord>,
    stats: DashMap<String, UserStats>,
    next_workout_id: AtomicU64,
}

/// Shared handle to the store. Clones refer to the same data.
#[derive(Clone, Default)]
pub struct MemoryDb {
    inner: Arc<Inner>,
    max_workouts_per_user: Option<usize>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that refuses new workouts once a user has `limit` of them.
    pub fn with_workout_limit(limit: usize) -> Self {
        Self {
            inner: Arc::default(),
            max_workouts_per_user: Some(limit),
        }
    }

    // ─── Profile Operations ──────────────────────────────────────

    pub fn get_profile(&self, user_id: &str) -> Option<UserProfile> {
        self.inner
            .profiles
            .get(user_id)
            .map(|entry| entry.value().clone())
    }

    /// Create or replace a user's profile.
    pub fn upsert_profile(&self, user_id: &str, profile: UserProfile) {
        tracing::debug!(user_id, hr_max = profile.hr_max, "Storing profile");
        self.inner.profiles.insert(user_id.to_string(), profile);
    }

    /// Whether the user has completed onboarding.
    pub fn onboarding_complete(&self, user_id: &str) -> bool {
        self.inner.profiles.contains_key(user_id)
    }

    // ─── Workout Operations ──────────────────────────────────────

    /// Store a workout and fold it into the user's stats.
    pub fn save_workout(
        &self,
        workout: NewWorkout,
        now: DateTime<Utc>,
    ) -> Result<WorkoutRecord, AppError> {
        // Holding the stats entry serializes concurrent saves for one user.
        let mut stats = self
            .inner
            .stats
            .entry(workout.user_id.clone())
            .or_default();

        if let Some(limit) = self.max_workouts_per_user {
            if stats.total_workouts as usize >= limit {
                return Err(AppError::BadRequest(format!(
                    "User {} already has {} workouts stored",
                    workout.user_id, limit
                )));
            }
        }

        let id = self
            .inner
            .next_workout_id
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_add(1))
            .map(|previous| previous + 1)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Workout id space exhausted")))?;
        let record = WorkoutRecord {
            id,
            workout,
            saved_at: format_utc_rfc3339(now),
        };

        stats.update_from_workout(&record);
        self.inner.workouts.insert(id, record.clone());

        tracing::info!(
            workout_id = id,
            user_id = %record.workout.user_id,
            total_volume = record.workout.total_volume,
            "Workout stored"
        );
        Ok(record)
    }

    pub fn get_workout(&self, id: u64) -> Option<WorkoutRecord> {
        self.inner.workouts.get(&id).map(|entry| entry.value().clone())
    }

    /// All workouts for a user, newest first.
    pub fn get_workouts_for_user(&self, user_id: &str) -> Vec<WorkoutRecord> {
        let mut records: Vec<WorkoutRecord> = self
            .inner
            .workouts
            .iter()
            .filter(|entry| entry.value().workout.user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect();
        records.sort_by(|a, b| b.id.cmp(&a.id));
        records
    }

    // ─── Stats Operations ────────────────────────────────────────

    pub fn get_user_stats(&self, user_id: &str) -> Option<UserStats> {
        self.inner
            .stats
            .get(user_id)
            .map(|entry| entry.value().clone())
    }

    /// Remove a user's profile, workouts and stats. Returns workouts removed.
    pub fn delete_user_data(&self, user_id: &str) -> usize {
        self.inner.profiles.remove(user_id);
        self.inner.stats.remove(user_id);

        let before = self.inner.workouts.len();
        self.inner
            .workouts
            .retain(|_, record| record.workout.user_id != user_id);
        let deleted = before.saturating_sub(self.inner.workouts.len());

        tracing::info!(user_id, deleted, "Deleted user data");
        deleted
    }
}
