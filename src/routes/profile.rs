// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Onboarding and profile routes.

use crate::error::{AppError, Result};
use crate::models::{FitnessGoal, UserProfile};
use crate::routes::ApiJson;
use crate::services::onboarding::{build_profile, DEFAULT_AGE, DEFAULT_WEIGHT_KG};
use crate::AppState;
use axum::{
    extract::{Path, State},
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
        .route("/api/onboarding", post(complete_onboarding))
        .route(
            "/api/profile/{user_id}",
            get(get_profile).delete(delete_profile),
        )
}

// ─── Onboarding ──────────────────────────────────────────────

/// Answers collected by the onboarding flow.
#[derive(Deserialize, Validate)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingRequest {
    #[validate(length(min = 1, max = 100))]
    pub user_id: String,
    pub age: Option<u32>,
    /// Body weight in kilograms
    #[validate(range(min = 0.0, max = 500.0))]
    pub weight: Option<f64>,
    pub fitness_goal: Option<FitnessGoal>,
}

/// Compute HRmax and zones for a new user and store the profile.
async fn complete_onboarding(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<OnboardingRequest>,
) -> Result<Json<UserProfile>> {
    req.validate()?;

    let profile = build_profile(
        req.age.unwrap_or(DEFAULT_AGE),
        req.weight.unwrap_or(DEFAULT_WEIGHT_KG),
        req.fitness_goal.unwrap_or_default(),
    )?;

    let replaced = state.db.onboarding_complete(&req.user_id);
    state.db.upsert_profile(&req.user_id, profile.clone());
    tracing::info!(user_id = %req.user_id, replaced, "Onboarding complete");

    Ok(Json(profile))
}

// ─── Profile ─────────────────────────────────────────────────

async fn get_profile(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<UserProfile>> {
    state
        .db
        .get_profile(&user_id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Profile for user {} not found", user_id)))
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/lib/generated/")
)]
pub struct DeleteProfileResponse {
    pub success: bool,
    pub deleted_workouts: usize,
}

/// Delete a user's profile, workouts and stats.
async fn delete_profile(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<DeleteProfileResponse>> {
    if !state.db.onboarding_complete(&user_id) {
        return Err(AppError::NotFound(format!(
            "Profile for user {} not found",
            user_id
        )));
    }
    let deleted_workouts = state.db.delete_user_data(&user_id);
    Ok(Json(DeleteProfileResponse {
        success: true,
        deleted_workouts,
    }))
}
