// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strength workout session lifecycle.
//!
//! ```text
//! Empty -> TypeSelected -> TemplateOrCustomChosen -> Editing -> Validated -> Saved
//! ```
//!
//! Editing loops on every exercise edit and timer toggle. A failed validation
//! leaves the session in Editing; any edit after validation returns it there.
//! Saved is terminal: start a new session for the next workout.

use serde::Serialize;

use crate::models::{Exercise, ExercisePatch, NewWorkout, WorkoutTemplate, WorkoutType};
use crate::services::workout::{compute_total_volume, validate_exercises, ValidationError};

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Empty,
    TypeSelected,
    TemplateOrCustomChosen,
    Editing,
    Validated,
    Saved,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// Errors from session operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("Cannot {action} while session is {state}")]
    InvalidTransition {
        state: SessionState,
        action: &'static str,
    },

    #[error("Unknown exercise: {0}")]
    UnknownExercise(String),

    #[error("Template is for {template} workouts, session is {selected}")]
    TemplateTypeMismatch {
        selected: WorkoutType,
        template: WorkoutType,
    },

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// A workout being logged.
#[derive(Debug, Clone)]
pub struct WorkoutSession {
    state: SessionState,
    workout_type: Option<WorkoutType>,
    template_id: Option<String>,
    exercises: Vec<Exercise>,
    duration: u64,
    timer_running: bool,
    next_custom_id: u64,
}

impl Default for WorkoutSession {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkoutSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::Empty,
            workout_type: None,
            template_id: None,
            exercises: Vec::new(),
            duration: 0,
            timer_running: false,
            next_custom_id: 1,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn workout_type(&self) -> Option<WorkoutType> {
        self.workout_type
    }

    /// Template the exercises were copied from, if any.
    pub fn template_id(&self) -> Option<&str> {
        self.template_id.as_deref()
    }

    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    /// Elapsed timer seconds.
    pub fn duration(&self) -> u64 {
        self.duration
    }

    pub fn timer_running(&self) -> bool {
        self.timer_running
    }

    fn require(&self, allowed: &[SessionState], action: &'static str) -> Result<(), SessionError> {
        if allowed.contains(&self.state) {
            Ok(())
        } else {
            Err(SessionError::InvalidTransition {
                state: self.state,
                action,
            })
        }
    }

    /// Gate for edits: allowed once exercises exist, and moves to Editing.
    fn begin_edit(&mut self, action: &'static str) -> Result<(), SessionError> {
        self.require(
            &[
                SessionState::TemplateOrCustomChosen,
                SessionState::Editing,
                SessionState::Validated,
            ],
            action,
        )?;
        self.state = SessionState::Editing;
        Ok(())
    }

    fn fresh_id(&mut self) -> String {
        let id = format!("custom-{}", self.next_custom_id);
        self.next_custom_id += 1;
        id
    }

    // ─── Setup ───────────────────────────────────────────────────

    /// Pick the workout type. Can be changed until exercises are chosen.
    pub fn select_type(&mut self, workout_type: WorkoutType) -> Result<(), SessionError> {
        self.require(
            &[
                SessionState::Empty,
                SessionState::TypeSelected,
                SessionState::TemplateOrCustomChosen,
            ],
            "select a workout type",
        )?;
        self.workout_type = Some(workout_type);
        self.template_id = None;
        self.exercises.clear();
        self.state = SessionState::TypeSelected;
        Ok(())
    }

    /// Start from a template, copying its exercises.
    pub fn choose_template(&mut self, template: &WorkoutTemplate) -> Result<(), SessionError> {
        self.require(&[SessionState::TypeSelected], "choose a template")?;
        let selected = self.workout_type.ok_or(SessionError::InvalidTransition {
            state: self.state,
            action: "choose a template",
        })?;
        if template.workout_type != selected {
            return Err(SessionError::TemplateTypeMismatch {
                selected,
                template: template.workout_type,
            });
        }
        self.exercises = template.exercises.clone();
        self.template_id = Some(template.id.clone());
        self.state = SessionState::TemplateOrCustomChosen;
        Ok(())
    }

    /// Start a custom workout with one blank exercise.
    pub fn start_custom(&mut self) -> Result<(), SessionError> {
        self.require(&[SessionState::TypeSelected], "start a custom workout")?;
        let id = self.fresh_id();
        self.exercises = vec![Exercise::blank(id)];
        self.template_id = None;
        self.state = SessionState::TemplateOrCustomChosen;
        Ok(())
    }

    // ─── Editing ─────────────────────────────────────────────────

    /// Append a blank exercise and return its id.
    pub fn add_exercise(&mut self) -> Result<String, SessionError> {
        self.begin_edit("add an exercise")?;
        let id = self.fresh_id();
        self.exercises.push(Exercise::blank(id.clone()));
        Ok(id)
    }

    pub fn remove_exercise(&mut self, id: &str) -> Result<(), SessionError> {
        self.begin_edit("remove an exercise")?;
        let before = self.exercises.len();
        self.exercises.retain(|ex| ex.id != id);
        if self.exercises.len() == before {
            return Err(SessionError::UnknownExercise(id.to_string()));
        }
        Ok(())
    }

    pub fn update_exercise(&mut self, id: &str, patch: ExercisePatch) -> Result<(), SessionError> {
        self.begin_edit("update an exercise")?;
        let exercise = self
            .exercises
            .iter_mut()
            .find(|ex| ex.id == id)
            .ok_or_else(|| SessionError::UnknownExercise(id.to_string()))?;
        patch.apply(exercise);
        Ok(())
    }

    pub fn start_timer(&mut self) -> Result<(), SessionError> {
        self.begin_edit("start the timer")?;
        self.timer_running = true;
        Ok(())
    }

    pub fn pause_timer(&mut self) -> Result<(), SessionError> {
        self.begin_edit("pause the timer")?;
        self.timer_running = false;
        Ok(())
    }

    /// Advance the timer. Ignored while the timer is paused.
    pub fn tick(&mut self, seconds: u64) -> Result<(), SessionError> {
        self.require(
            &[
                SessionState::TemplateOrCustomChosen,
                SessionState::Editing,
                SessionState::Validated,
            ],
            "advance the timer",
        )?;
        if self.timer_running {
            self.duration = self.duration.saturating_add(seconds);
        }
        Ok(())
    }

    // ─── Finalize ────────────────────────────────────────────────

    /// Validate the session. On failure the session stays in Editing.
    pub fn validate(&mut self) -> Result<(), SessionError> {
        self.require(
            &[
                SessionState::TemplateOrCustomChosen,
                SessionState::Editing,
                SessionState::Validated,
            ],
            "validate",
        )?;
        match validate_exercises(self.workout_type, &self.exercises) {
            Ok(_) => {
                self.state = SessionState::Validated;
                Ok(())
            }
            Err(e) => {
                self.state = SessionState::Editing;
                tracing::debug!(error = %e, "Workout session failed validation");
                Err(e.into())
            }
        }
    }

    /// Finalize a validated session into a workout for storage.
    pub fn save(
        &mut self,
        user_id: impl Into<String>,
        notes: impl Into<String>,
    ) -> Result<NewWorkout, SessionError> {
        self.require(&[SessionState::Validated], "save")?;
        let workout_type = self.workout_type.ok_or(SessionError::Validation(
            ValidationError::MissingType,
        ))?;

        self.timer_running = false;
        self.state = SessionState::Saved;

        Ok(NewWorkout {
            user_id: user_id.into(),
            workout_type,
            total_volume: compute_total_volume(&self.exercises),
            exercises: std::mem::take(&mut self.exercises),
            duration: self.duration,
            notes: notes.into(),
        })
    }
}
