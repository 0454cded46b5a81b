// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod exercise;
pub mod profile;
pub mod stats;
pub mod workout;
pub mod zone;

pub use exercise::{Exercise, ExercisePatch, WorkoutTemplate, WorkoutType};
pub use profile::{FitnessGoal, TrainingFocus, UserProfile};
pub use stats::UserStats;
pub use workout::{AggregateResult, NewWorkout, WorkoutRecord};
pub use zone::{ZoneBounds, ZoneDistribution, ZoneShare, ZoneTable, ZoneTimeSample, ZONE_COUNT};
