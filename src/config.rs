// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Mobile/web frontend origin allowed by CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// Upper bound on exercises accepted in one workout
    pub max_exercises_per_workout: usize,
    /// Upper bound on stored workouts per user (unbounded if `None`)
    pub max_workouts_per_user: Option<usize>,
}

impl Config {
    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            frontend_url: "http://localhost:8081".to_string(),
            port: 8080,
            max_exercises_per_workout: 50,
            max_workouts_per_user: None,
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:8081".to_string()),
            port: parse_var("PORT")?.unwrap_or(8080),
            max_exercises_per_workout: parse_var("MAX_EXERCISES_PER_WORKOUT")?.unwrap_or(50),
            max_workouts_per_user: parse_var("MAX_WORKOUTS_PER_USER")?,
        })
    }
}

/// Parse an optional numeric variable; a set but malformed value is an error.
fn parse_var<T: std::str::FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(name, raw)),
        Err(_) => Ok(None),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1:?}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::set_var("PORT", "9090");
        env::set_var("MAX_EXERCISES_PER_WORKOUT", "20");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.port, 9090);
        assert_eq!(config.max_exercises_per_workout, 20);

        env::set_var("MAX_EXERCISES_PER_WORKOUT", "lots");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::Invalid("MAX_EXERCISES_PER_WORKOUT", _))
        ));

        env::remove_var("PORT");
        env::remove_var("MAX_EXERCISES_PER_WORKOUT");
    }
}
