// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Heart-rate zone and dashboard metric routes.

use crate::error::{AppError, Result};
use crate::models::{AggregateResult, Exercise, ZoneTable, ZoneTimeSample, ZONE_COUNT};
use crate::routes::ApiJson;
use crate::services::{
    aggregate, classify_heart_rate, compute_zone_distribution,
    compute_zone_distribution_from_totals, zones_for_age,
};
use crate::time_utils::format_clock;
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/zones", get(get_zones))
        .route("/api/zones/distribution", post(zone_distribution))
        .route("/api/heart-rate/classify", post(classify))
        .route("/api/workouts/aggregate", post(aggregate_workout))
}

// ─── Zones ───────────────────────────────────────────────────

#[derive(Deserialize)]
struct ZonesQuery {
    age: u32,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct ZonesResponse {
    pub hr_max: u32,
    pub zones: ZoneTable,
}

/// HRmax and zone table for an age.
async fn get_zones(Query(params): Query<ZonesQuery>) -> Result<Json<ZonesResponse>> {
    let (hr_max, zones) = zones_for_age(params.age)?;
    Ok(Json(ZonesResponse { hr_max, zones }))
}

// ─── Classification ──────────────────────────────────────────

/// A heart-rate reading plus either a zone table or an age to derive one.
#[derive(Deserialize, Validate)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/lib/generated/")
)]
pub struct ClassifyRequest {
    /// Readings above 300 BPM are rejected as sensor noise
    #[validate(range(max = 300))]
    pub bpm: u32,
    pub zones: Option<ZoneTable>,
    pub age: Option<u32>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/lib/generated/")
)]
pub struct ClassifyResponse {
    /// Zone 1-5, or 0 when outside every zone
    pub zone: u8,
}

async fn classify(ApiJson(req): ApiJson<ClassifyRequest>) -> Result<Json<ClassifyResponse>> {
    req.validate()?;

    let zones = match (req.zones, req.age) {
        (Some(zones), None) => zones,
        (None, Some(age)) => zones_for_age(age)?.1,
        _ => {
            return Err(AppError::BadRequest(
                "Provide exactly one of 'zones' or 'age'".to_string(),
            ))
        }
    };

    Ok(Json(ClassifyResponse {
        zone: classify_heart_rate(req.bpm, &zones),
    }))
}

// ─── Distribution ────────────────────────────────────────────

/// Time-in-zone input: raw samples or five per-zone totals.
#[derive(Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/lib/generated/")
)]
pub struct DistributionRequest {
    pub samples: Option<Vec<ZoneTimeSample>>,
    pub totals: Option<[f64; ZONE_COUNT]>,
}

/// One zone row on the dashboard.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/lib/generated/")
)]
pub struct ZoneTimeView {
    pub zone: u8,
    pub percentage: f64,
    /// Exact seconds
    pub time: f64,
    /// `M:SS`
    pub formatted: String,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/lib/generated/")
)]
pub struct DistributionResponse {
    pub zones: Vec<ZoneTimeView>,
    pub total_seconds: f64,
    pub outside_seconds: f64,
}

async fn zone_distribution(
    ApiJson(req): ApiJson<DistributionRequest>,
) -> Result<Json<DistributionResponse>> {
    let distribution = match (req.samples, req.totals) {
        (Some(samples), None) => compute_zone_distribution(&samples)?,
        (None, Some(totals)) => compute_zone_distribution_from_totals(totals)?,
        _ => {
            return Err(AppError::BadRequest(
                "Provide exactly one of 'samples' or 'totals'".to_string(),
            ))
        }
    };

    let zones = distribution
        .zones
        .iter()
        .map(|share| ZoneTimeView {
            zone: share.zone,
            percentage: share.percentage,
            time: share.time,
            formatted: format_clock(share.time),
        })
        .collect();

    Ok(Json(DistributionResponse {
        zones,
        total_seconds: distribution.total_seconds,
        outside_seconds: distribution.outside_seconds,
    }))
}

// ─── Aggregate ───────────────────────────────────────────────

#[derive(Deserialize, Validate)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/lib/generated/")
)]
pub struct AggregateRequest {
    #[serde(default)]
    #[validate(nested)]
    pub exercises: Vec<Exercise>,
    #[serde(default)]
    pub samples: Vec<ZoneTimeSample>,
}

/// Volume and zone distribution for one activity, without storing anything.
async fn aggregate_workout(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<AggregateRequest>,
) -> Result<Json<AggregateResult>> {
    req.validate()?;
    if req.exercises.len() > state.config.max_exercises_per_workout {
        return Err(AppError::BadRequest(format!(
            "At most {} exercises per workout",
            state.config.max_exercises_per_workout
        )));
    }
    Ok(Json(aggregate(&req.exercises, &req.samples)?))
}
