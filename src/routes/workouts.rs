// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strength workout routes: templates, saving and history.

use crate::error::{AppError, Result};
use crate::models::{
    Exercise, NewWorkout, UserStats, WorkoutRecord, WorkoutTemplate, WorkoutType,
};
use crate::routes::ApiJson;
use crate::services::{compute_total_volume, validate_exercises, ValidationError};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/templates", get(get_templates))
        .route("/api/workouts", get(get_workouts).post(save_workout))
        .route("/api/workouts/{id}", get(get_workout))
        .route("/api/stats/{user_id}", get(get_stats))
}

// ─── Templates ───────────────────────────────────────────────

#[derive(Deserialize)]
struct TemplatesQuery {
    #[serde(rename = "type")]
    workout_type: Option<WorkoutType>,
}

async fn get_templates(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TemplatesQuery>,
) -> Json<Vec<WorkoutTemplate>> {
    let templates = match params.workout_type {
        Some(t) => state.templates.templates_for(t).into_iter().cloned().collect(),
        None => state.templates.all().to_vec(),
    };
    Json(templates)
}

// ─── Save ────────────────────────────────────────────────────

/// Finished workout as submitted by the strength tracker.
#[derive(Deserialize, Validate)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/lib/generated/")
)]
pub struct SaveWorkoutRequest {
    #[validate(length(min = 1, max = 100))]
    pub user_id: String,
    #[serde(rename = "type", default)]
    pub workout_type: Option<WorkoutType>,
    #[serde(default)]
    #[validate(nested)]
    pub exercises: Vec<Exercise>,
    /// Elapsed seconds, at most one day
    #[serde(default)]
    #[validate(range(max = 86400))]
    pub duration: u64,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub notes: String,
}

/// Validate a workout, compute its volume and store it.
async fn save_workout(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<SaveWorkoutRequest>,
) -> Result<(StatusCode, Json<WorkoutRecord>)> {
    req.validate()?;

    let max = state.config.max_exercises_per_workout;
    if req.exercises.len() > max {
        return Err(AppError::BadRequest(format!(
            "At most {} exercises per workout",
            max
        )));
    }

    validate_exercises(req.workout_type, &req.exercises)?;
    let workout_type = req
        .workout_type
        .ok_or(AppError::Validation(ValidationError::MissingType))?;

    let workout = NewWorkout {
        user_id: req.user_id,
        workout_type,
        total_volume: compute_total_volume(&req.exercises),
        exercises: req.exercises,
        duration: req.duration,
        notes: req.notes,
    };

    let record = state.db.save_workout(workout, chrono::Utc::now())?;
    Ok((StatusCode::CREATED, Json(record)))
}

// ─── History ─────────────────────────────────────────────────

#[derive(Deserialize)]
struct WorkoutsQuery {
    user_id: String,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/lib/generated/")
)]
pub struct WorkoutsResponse {
    pub workouts: Vec<WorkoutRecord>,
    pub total: usize,
}

/// A user's workouts, newest first.
async fn get_workouts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<WorkoutsQuery>,
) -> Result<Json<WorkoutsResponse>> {
    if params.user_id.is_empty() {
        return Err(AppError::BadRequest("'user_id' is required".to_string()));
    }
    let workouts = state.db.get_workouts_for_user(&params.user_id);
    tracing::debug!(user_id = %params.user_id, count = workouts.len(), "Fetched workouts");

    Ok(Json(WorkoutsResponse {
        total: workouts.len(),
        workouts,
    }))
}

async fn get_workout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<WorkoutRecord>> {
    state
        .db
        .get_workout(id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Workout {} not found", id)))
}

/// Dashboard aggregates for a user; zeroed if nothing is stored yet.
async fn get_stats(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Json<UserStats> {
    Json(state.db.get_user_stats(&user_id).unwrap_or_default())
}
