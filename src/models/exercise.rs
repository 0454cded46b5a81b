// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strength exercises, workout types and templates.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// Equipment category of a strength workout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/lib/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    Bodyweight,
    Kettlebell,
    Barbell,
    Machine,
}

impl WorkoutType {
    pub fn as_str(self) -> &'static str {
        match self {
            WorkoutType::Bodyweight => "bodyweight",
            WorkoutType::Kettlebell => "kettlebell",
            WorkoutType::Barbell => "barbell",
            WorkoutType::Machine => "machine",
        }
    }
}

impl std::fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single logged exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/lib/generated/")
)]
pub struct Exercise {
    /// Client-assigned id, unique within a session
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[validate(range(max = 1000))]
    pub sets: u32,
    #[validate(range(max = 1000))]
    pub reps: u32,
    /// Load in kilograms; 0 for bodyweight movements
    #[validate(range(min = 0.0, max = 1000.0))]
    pub weight: f64,
    /// Rate of perceived exertion
    #[validate(range(min = 1, max = 10))]
    pub rpe: u8,
    #[serde(default)]
    pub notes: String,
}

impl Exercise {
    pub const DEFAULT_SETS: u32 = 3;
    pub const DEFAULT_REPS: u32 = 10;
    pub const DEFAULT_RPE: u8 = 7;

    /// Blank exercise as added by "add exercise" in a custom workout.
    pub fn blank(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            sets: Self::DEFAULT_SETS,
            reps: Self::DEFAULT_REPS,
            weight: 0.0,
            rpe: Self::DEFAULT_RPE,
            notes: String::new(),
        }
    }

    /// Training volume: weight × sets × reps.
    pub fn volume(&self) -> f64 {
        self.weight * f64::from(self.sets) * f64::from(self.reps)
    }
}

/// Partial update to an exercise; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExercisePatch {
    pub name: Option<String>,
    pub sets: Option<u32>,
    pub reps: Option<u32>,
    pub weight: Option<f64>,
    pub rpe: Option<u8>,
    pub notes: Option<String>,
}

impl ExercisePatch {
    /// Apply the patch in place.
    pub fn apply(self, exercise: &mut Exercise) {
        if let Some(name) = self.name {
            exercise.name = name;
        }
        if let Some(sets) = self.sets {
            exercise.sets = sets;
        }
        if let Some(reps) = self.reps {
            exercise.reps = reps;
        }
        if let Some(weight) = self.weight {
            exercise.weight = weight;
        }
        if let Some(rpe) = self.rpe {
            exercise.rpe = rpe;
        }
        if let Some(notes) = self.notes {
            exercise.notes = notes;
        }
    }
}

/// Predefined list of exercises for a workout type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/lib/generated/")
)]
pub struct WorkoutTemplate {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub workout_type: WorkoutType,
    pub exercises: Vec<Exercise>,
}
