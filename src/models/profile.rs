// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User profile produced by onboarding.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::ZoneTable;

/// What the user wants to train for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub enum FitnessGoal {
    Endurance,
    Strength,
    Hybrid,
    #[default]
    GeneralHealth,
}

impl FitnessGoal {
    /// Training focus implied by this goal.
    pub fn training_focus(self) -> TrainingFocus {
        match self {
            FitnessGoal::Endurance => TrainingFocus::Cardio,
            FitnessGoal::Strength => TrainingFocus::Strength,
            FitnessGoal::Hybrid | FitnessGoal::GeneralHealth => TrainingFocus::Balanced,
        }
    }
}

/// Emphasis of the suggested training plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub enum TrainingFocus {
    Cardio,
    Strength,
    #[default]
    Balanced,
}

/// Stored user profile.
///
/// `hr_max` and `zones` are always derived from `age`; a new age means a
/// freshly built profile rather than an edit of this one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Age in years
    pub age: u32,
    /// Body weight in kilograms
    pub weight: f64,
    pub fitness_goal: FitnessGoal,
    pub training_focus: TrainingFocus,
    /// Maximum heart rate (BPM)
    pub hr_max: u32,
    pub zones: ZoneTable,
}
