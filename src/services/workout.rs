// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout aggregation: volume, session validation and time-in-zone.

use crate::models::{
    AggregateResult, Exercise, WorkoutType, ZoneDistribution, ZoneShare, ZoneTimeSample,
    ZONE_COUNT,
};
use crate::services::zones::ZoneError;

/// Reasons a workout session cannot be finalized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing type")]
    MissingType,

    #[error("empty")]
    Empty,

    /// Position of the first exercise with a blank name
    #[error("unnamed exercise")]
    UnnamedExercise { index: usize },
}

impl ValidationError {
    /// Corrective message to show the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::MissingType => "Please select a workout type",
            ValidationError::Empty => "Please add at least one exercise",
            ValidationError::UnnamedExercise { .. } => "Please provide a name for all exercises",
        }
    }
}

/// Total training volume: sum of weight × sets × reps.
///
/// Bodyweight exercises (weight 0) add nothing.
pub fn compute_total_volume(exercises: &[Exercise]) -> f64 {
    exercises.iter().map(Exercise::volume).sum()
}

/// Check that a session can be saved.
///
/// Checks run in order: workout type, at least one exercise, then every
/// exercise has a non-blank name. Returns the exercises untouched on success.
pub fn validate_exercises(
    workout_type: Option<WorkoutType>,
    exercises: &[Exercise],
) -> Result<&[Exercise], ValidationError> {
    if workout_type.is_none() {
        return Err(ValidationError::MissingType);
    }
    if exercises.is_empty() {
        return Err(ValidationError::Empty);
    }
    if let Some(index) = exercises.iter().position(|ex| ex.name.trim().is_empty()) {
        return Err(ValidationError::UnnamedExercise { index });
    }
    Ok(exercises)
}

/// Sum time-in-zone samples into per-zone totals.
///
/// Index 0 holds time outside every zone.
fn sum_samples(samples: &[ZoneTimeSample]) -> Result<[f64; ZONE_COUNT + 1], ZoneError> {
    let mut totals = [0.0; ZONE_COUNT + 1];
    for sample in samples {
        if usize::from(sample.zone) > ZONE_COUNT {
            return Err(ZoneError::InvalidInput(format!(
                "zone {} is not in 0-{}",
                sample.zone, ZONE_COUNT
            )));
        }
        check_seconds(sample.seconds)?;
        totals[usize::from(sample.zone)] += sample.seconds;
    }
    Ok(totals)
}

fn check_seconds(seconds: f64) -> Result<(), ZoneError> {
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(ZoneError::InvalidInput(format!(
            "zone time must be a non-negative number of seconds, got {}",
            seconds
        )));
    }
    Ok(())
}

/// Distribution of time across zones 1-5 from precomputed per-zone seconds.
pub fn compute_zone_distribution_from_totals(
    totals: [f64; ZONE_COUNT],
) -> Result<ZoneDistribution, ZoneError> {
    let mut with_outside = [0.0; ZONE_COUNT + 1];
    for (slot, seconds) in with_outside[1..].iter_mut().zip(totals) {
        check_seconds(seconds)?;
        *slot = seconds;
    }
    build_distribution(with_outside)
}

/// Distribution of time across zones 1-5 from raw samples.
///
/// Percentages are shares of time spent inside a zone, so they sum to 100
/// whenever any in-zone time exists. Zone-0 time is reported separately.
pub fn compute_zone_distribution(
    samples: &[ZoneTimeSample],
) -> Result<ZoneDistribution, ZoneError> {
    let totals = sum_samples(samples)?;
    build_distribution(totals)
}

fn build_distribution(totals: [f64; ZONE_COUNT + 1]) -> Result<ZoneDistribution, ZoneError> {
    let total_seconds: f64 = totals[1..].iter().sum();
    // Large finite inputs can still sum to infinity
    if !total_seconds.is_finite() || !totals[0].is_finite() {
        return Err(ZoneError::InvalidInput(
            "total zone time is too large to represent".to_string(),
        ));
    }

    let zones = totals[1..]
        .iter()
        .enumerate()
        .map(|(i, &time)| ZoneShare {
            zone: i as u8 + 1,
            // Avoid dividing by zero for an activity with no in-zone time
            percentage: if total_seconds > 0.0 {
                100.0 * time / total_seconds
            } else {
                0.0
            },
            time,
        })
        .collect();

    Ok(ZoneDistribution {
        zones,
        total_seconds,
        outside_seconds: totals[0],
    })
}

/// Volume plus time-in-zone for one activity.
pub fn aggregate(
    exercises: &[Exercise],
    samples: &[ZoneTimeSample],
) -> Result<AggregateResult, ZoneError> {
    let total_volume = compute_total_volume(exercises);
    if !total_volume.is_finite() {
        return Err(ZoneError::InvalidInput(
            "total volume is too large to represent".to_string(),
        ));
    }
    let result = AggregateResult {
        total_volume,
        zone_distribution: compute_zone_distribution(samples)?,
    };
    tracing::debug!(
        exercises = exercises.len(),
        samples = samples.len(),
        total_volume = result.total_volume,
        "Aggregated workout"
    );
    Ok(result)
}
