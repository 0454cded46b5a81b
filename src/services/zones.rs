// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Heart-rate zone calculation.
//!
//! HRmax comes from the Tanaka formula (`208 - 0.7 × age`) and the five zones
//! are fixed fractions of HRmax: 50-60-70-80-90-100%. Every boundary is
//! rounded half-up on its own, and each zone after the first starts one BPM
//! above the previous zone's rounded max.
//!
//! Arithmetic is done in tenths of a beat so rounding is exact.

use crate::models::{ZoneBounds, ZoneTable};

/// Zone upper bounds as tenths of HRmax (zone 5 ends at HRmax itself).
const ZONE_FRACTIONS_TENTHS: [u64; 5] = [5, 6, 7, 8, 9];

/// Tanaka intercept, in tenths of a beat.
const TANAKA_INTERCEPT_TENTHS: u64 = 2080;
/// Tanaka age coefficient, in tenths of a beat per year.
const TANAKA_SLOPE_TENTHS: u64 = 7;

/// Errors from zone calculation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ZoneError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Round a non-negative value given in tenths to the nearest integer, halves up.
fn round_tenths(tenths: u64) -> u32 {
    ((tenths + 5) / 10) as u32
}

/// Compute maximum heart rate from age with the Tanaka formula.
pub fn compute_max_heart_rate(age: u32) -> Result<u32, ZoneError> {
    if age == 0 {
        return Err(ZoneError::InvalidInput(
            "age must be greater than 0".to_string(),
        ));
    }

    let hr_max = TANAKA_INTERCEPT_TENTHS
        .checked_sub(TANAKA_SLOPE_TENTHS * u64::from(age))
        .map(round_tenths)
        .unwrap_or(0);

    if hr_max == 0 {
        return Err(ZoneError::InvalidInput(format!(
            "age {} yields no positive maximum heart rate",
            age
        )));
    }

    tracing::debug!(age, hr_max, "Computed maximum heart rate");
    Ok(hr_max)
}

/// Compute the five heart-rate zones for a given HRmax.
pub fn compute_zones(hr_max: u32) -> Result<ZoneTable, ZoneError> {
    if hr_max == 0 {
        return Err(ZoneError::InvalidInput(
            "hrMax must be greater than 0".to_string(),
        ));
    }

    let at = |tenths: u64| round_tenths(u64::from(hr_max) * tenths);
    let [p50, p60, p70, p80, p90] = ZONE_FRACTIONS_TENTHS.map(at);

    Ok(ZoneTable {
        zone1: ZoneBounds { min: p50, max: p60 },
        zone2: ZoneBounds {
            min: p60 + 1,
            max: p70,
        },
        zone3: ZoneBounds {
            min: p70 + 1,
            max: p80,
        },
        zone4: ZoneBounds {
            min: p80 + 1,
            max: p90,
        },
        zone5: ZoneBounds {
            min: p90 + 1,
            max: hr_max,
        },
    })
}

/// Compute HRmax and zones for an age in one step.
pub fn zones_for_age(age: u32) -> Result<(u32, ZoneTable), ZoneError> {
    let hr_max = compute_max_heart_rate(age)?;
    let zones = compute_zones(hr_max)?;
    Ok((hr_max, zones))
}

/// Get the zone (1-5) a heart-rate reading falls into, or 0 if it is
/// outside every zone.
pub fn classify_heart_rate(bpm: u32, zones: &ZoneTable) -> u8 {
    if bpm < zones.zone1.min || bpm > zones.zone5.max {
        return 0;
    }
    zones
        .iter()
        .find(|(_, bounds)| bounds.contains(bpm))
        .map(|(zone, _)| zone)
        .unwrap_or(0)
}
