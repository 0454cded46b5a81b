// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile construction at the end of onboarding.

use crate::models::{FitnessGoal, UserProfile};
use crate::services::zones::{zones_for_age, ZoneError};

/// Age assumed when onboarding does not supply one.
pub const DEFAULT_AGE: u32 = 30;
/// Body weight (kg) assumed when onboarding does not supply one.
pub const DEFAULT_WEIGHT_KG: f64 = 70.0;

/// Build a profile, deriving HRmax, zones and training focus.
pub fn build_profile(age: u32, weight: f64, fitness_goal: FitnessGoal) -> Result<UserProfile, ZoneError> {
    let (hr_max, zones) = zones_for_age(age)?;

    tracing::info!(age, hr_max, goal = ?fitness_goal, "Built user profile");

    Ok(UserProfile {
        age,
        weight,
        fitness_goal,
        training_focus: fitness_goal.training_focus(),
        hr_max,
        zones,
    })
}
