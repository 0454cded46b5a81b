// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strength workout API tests: templates, validation, storage and stats.

use axum::http::StatusCode;
use ironstride::config::Config;
use serde_json::{json, Value};

mod common;

fn kettlebell_workout(user_id: &str) -> Value {
    json!({
        "user_id": user_id,
        "type": "kettlebell",
        "exercises": [
            {"id": "1", "name": "Kettlebell Swings", "sets": 4, "reps": 15, "weight": 16, "rpe": 7, "notes": ""}
        ],
        "duration": 1500,
        "notes": "morning session"
    })
}

#[tokio::test]
async fn test_templates_filtered_by_type() {
    let (app, _state) = common::create_test_app();

    let (status, body) = common::send(&app, "GET", "/api/templates?type=bodyweight", None).await;
    assert_eq!(status, StatusCode::OK);
    let templates = body.as_array().unwrap();
    assert_eq!(templates.len(), 1);
    assert_eq!(templates[0]["name"], "Basic Push Workout");
    assert_eq!(templates[0]["type"], "bodyweight");
    assert_eq!(templates[0]["exercises"].as_array().unwrap().len(), 3);

    let (_, body) = common::send(&app, "GET", "/api/templates?type=machine", None).await;
    assert!(body.as_array().unwrap().is_empty());

    let (_, body) = common::send(&app, "GET", "/api/templates", None).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_templates_unknown_type() {
    let (app, _state) = common::create_test_app();

    let (status, _) = common::send(&app, "GET", "/api/templates?type=yoga", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_save_workout_computes_volume() {
    let (app, _state) = common::create_test_app();

    let (status, body) = common::send(
        &app,
        "POST",
        "/api/workouts",
        Some(kettlebell_workout("user-30")),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["total_volume"], 960.0);
    assert_eq!(body["type"], "kettlebell");
    assert_eq!(body["duration"], 1500);
    assert_eq!(body["notes"], "morning session");
    assert!(body["id"].as_u64().is_some());
    assert!(body["saved_at"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_save_mixed_bodyweight_workout() {
    let (app, _state) = common::create_test_app();

    let (status, body) = common::send(
        &app,
        "POST",
        "/api/workouts",
        Some(json!({
            "user_id": "user-30",
            "type": "kettlebell",
            "exercises": [
                {"name": "Push-ups", "sets": 3, "reps": 10, "weight": 0, "rpe": 7},
                {"name": "Goblet Squats", "sets": 3, "reps": 10, "weight": 16, "rpe": 6}
            ]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["total_volume"], 480.0);
}

#[tokio::test]
async fn test_save_missing_type() {
    let (app, _state) = common::create_test_app();
    let mut workout = kettlebell_workout("user-30");
    workout.as_object_mut().unwrap().remove("type");

    let (status, body) = common::send(&app, "POST", "/api/workouts", Some(workout)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["details"], "missing type");
    assert_eq!(body["message"], "Please select a workout type");
}

#[tokio::test]
async fn test_save_empty_workout() {
    let (app, _state) = common::create_test_app();

    let (status, body) = common::send(
        &app,
        "POST",
        "/api/workouts",
        Some(json!({"user_id": "user-30", "type": "barbell", "exercises": []})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"], "empty");
}

#[tokio::test]
async fn test_save_unnamed_exercise() {
    let (app, state) = common::create_test_app();

    let (status, body) = common::send(
        &app,
        "POST",
        "/api/workouts",
        Some(json!({
            "user_id": "user-30",
            "type": "barbell",
            "exercises": [{"name": "  ", "sets": 5, "reps": 5, "weight": 100, "rpe": 8}]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"], "unnamed exercise");
    assert!(state.db.get_workouts_for_user("user-30").is_empty());
}

#[tokio::test]
async fn test_save_rejects_out_of_range_rpe() {
    let (app, _state) = common::create_test_app();

    let (status, body) = common::send(
        &app,
        "POST",
        "/api/workouts",
        Some(json!({
            "user_id": "user-30",
            "type": "barbell",
            "exercises": [{"name": "Deadlift", "sets": 1, "reps": 5, "weight": 140, "rpe": 12}]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_save_rejects_negative_weight() {
    let (app, _state) = common::create_test_app();

    let (status, _) = common::send(
        &app,
        "POST",
        "/api/workouts",
        Some(json!({
            "user_id": "user-30",
            "type": "machine",
            "exercises": [{"name": "Leg Press", "sets": 3, "reps": 12, "weight": -10, "rpe": 6}]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_save_rejects_too_many_exercises() {
    let config = Config {
        max_exercises_per_workout: 2,
        ..Config::test_default()
    };
    let (app, _state) = common::create_test_app_with(config);

    let exercise = json!({"name": "Row", "sets": 3, "reps": 10, "weight": 40, "rpe": 7});
    let (status, _) = common::send(
        &app,
        "POST",
        "/api/workouts",
        Some(json!({
            "user_id": "user-30",
            "type": "machine",
            "exercises": [exercise.clone(), exercise.clone(), exercise]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_history_and_stats() {
    let (app, _state) = common::create_test_app();

    common::send(&app, "POST", "/api/workouts", Some(kettlebell_workout("a"))).await;
    common::send(&app, "POST", "/api/workouts", Some(kettlebell_workout("a"))).await;
    common::send(&app, "POST", "/api/workouts", Some(kettlebell_workout("b"))).await;

    let (status, body) = common::send(&app, "GET", "/api/workouts?user_id=a", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    let workouts = body["workouts"].as_array().unwrap();
    assert!(workouts[0]["id"].as_u64() > workouts[1]["id"].as_u64());

    let (status, stats) = common::send(&app, "GET", "/api/stats/a", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["total_workouts"], 2);
    assert_eq!(stats["total_volume"], 1920.0);
    assert_eq!(stats["total_duration_seconds"], 3000);
    assert_eq!(stats["workouts_by_type"]["kettlebell"], 2);
}

#[tokio::test]
async fn test_stats_default_for_new_user() {
    let (app, _state) = common::create_test_app();

    let (status, stats) = common::send(&app, "GET", "/api/stats/nobody", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["total_workouts"], 0);
    assert_eq!(stats["total_volume"], 0.0);
}

#[tokio::test]
async fn test_get_workout_by_id() {
    let (app, _state) = common::create_test_app();

    let (_, saved) = common::send(&app, "POST", "/api/workouts", Some(kettlebell_workout("a"))).await;
    let uri = format!("/api/workouts/{}", saved["id"]);

    let (status, body) = common::send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, saved);

    let (status, body) = common::send(&app, "GET", "/api/workouts/999999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_workout_limit_per_user() {
    let config = Config {
        max_workouts_per_user: Some(1),
        ..Config::test_default()
    };
    let (app, _state) = common::create_test_app_with(config);

    let (status, _) = common::send(&app, "POST", "/api/workouts", Some(kettlebell_workout("a"))).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = common::send(&app, "POST", "/api/workouts", Some(kettlebell_workout("a"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_huge_duration_rejected_and_stats_stay_consistent() {
    let (app, state) = common::create_test_app();

    let mut workout = kettlebell_workout("a");
    workout["duration"] = json!(u64::MAX);

    for _ in 0..2 {
        let (status, body) =
            common::send(&app, "POST", "/api/workouts", Some(workout.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "bad_request");
    }

    let mut workout = kettlebell_workout("a");
    workout["duration"] = json!(86400);
    for _ in 0..2 {
        let (status, _) = common::send(&app, "POST", "/api/workouts", Some(workout.clone())).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let stats = state.db.get_user_stats("a").unwrap();
    assert_eq!(stats.total_workouts, 2);
    assert_eq!(stats.total_duration_seconds, 172800);
    assert_eq!(state.db.get_workouts_for_user("a").len(), 2);
}

#[tokio::test]
async fn test_save_rejects_volume_that_cannot_be_represented() {
    let (app, state) = common::create_test_app();

    let (status, body) = common::send(
        &app,
        "POST",
        "/api/workouts",
        Some(json!({
            "user_id": "a",
            "type": "barbell",
            "exercises": [{"name": "Squat", "sets": 1000, "reps": 1000, "weight": 1e300, "rpe": 9}]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");
    assert!(state.db.get_user_stats("a").is_none());
}

#[tokio::test]
async fn test_save_unknown_type_is_bad_request() {
    let (app, _state) = common::create_test_app();
    let mut workout = kettlebell_workout("a");
    workout["type"] = json!("yoga");

    let (status, body) = common::send(&app, "POST", "/api/workouts", Some(workout)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");
}
