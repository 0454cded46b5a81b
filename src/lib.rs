// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! IronStride: heart-rate zone and workout metrics engine
//!
//! This crate derives personalized heart-rate training zones from a user's
//! age, aggregates logged strength workouts into dashboard metrics, and
//! serves both to the mobile app over a small JSON API.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::MemoryDb;
use services::TemplateCatalog;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: MemoryDb,
    pub templates: TemplateCatalog,
}

impl AppState {
    /// State with an empty store and the built-in templates.
    pub fn new(config: Config) -> Self {
        let db = match config.max_workouts_per_user {
            Some(limit) => MemoryDb::with_workout_limit(limit),
            None => MemoryDb::new(),
        };
        Self {
            config,
            db,
            templates: TemplateCatalog::builtin(),
        }
    }
}
