// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - heart-rate zone and workout metrics engine.

pub mod onboarding;
pub mod session;
pub mod templates;
pub mod workout;
pub mod zones;

pub use onboarding::build_profile;
pub use session::{SessionError, SessionState, WorkoutSession};
pub use templates::TemplateCatalog;
pub use workout::{
    aggregate, compute_total_volume, compute_zone_distribution,
    compute_zone_distribution_from_totals, validate_exercises, ValidationError,
};
pub use zones::{
    classify_heart_rate, compute_max_heart_rate, compute_zones, zones_for_age, ZoneError,
};
