// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Built-in workout templates.

use crate::models::{Exercise, WorkoutTemplate, WorkoutType};

/// Catalog of workout templates offered after a workout type is picked.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: Vec<WorkoutTemplate>,
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TemplateCatalog {
    /// Catalog with the stock templates.
    pub fn builtin() -> Self {
        Self {
            templates: vec![
                WorkoutTemplate {
                    id: "1".to_string(),
                    name: "Basic Push Workout".to_string(),
                    workout_type: WorkoutType::Bodyweight,
                    exercises: vec![
                        stock("1", "Push-ups", 3, 10, 0.0, 7),
                        stock("2", "Dips", 3, 8, 0.0, 8),
                        stock("3", "Pike Push-ups", 3, 12, 0.0, 6),
                    ],
                },
                WorkoutTemplate {
                    id: "2".to_string(),
                    name: "Kettlebell Basics".to_string(),
                    workout_type: WorkoutType::Kettlebell,
                    exercises: vec![
                        stock("1", "Kettlebell Swings", 4, 15, 16.0, 7),
                        stock("2", "Goblet Squats", 3, 10, 16.0, 6),
                        stock("3", "Turkish Get-ups", 2, 3, 12.0, 8),
                    ],
                },
            ],
        }
    }

    /// Build a catalog from an explicit template list.
    pub fn new(templates: Vec<WorkoutTemplate>) -> Self {
        Self { templates }
    }

    pub fn all(&self) -> &[WorkoutTemplate] {
        &self.templates
    }

    /// Templates matching a workout type.
    pub fn templates_for(&self, workout_type: WorkoutType) -> Vec<&WorkoutTemplate> {
        self.templates
            .iter()
            .filter(|t| t.workout_type == workout_type)
            .collect()
    }

    /// Look up a template by id.
    pub fn get(&self, id: &str) -> Option<&WorkoutTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }
}

fn stock(id: &str, name: &str, sets: u32, reps: u32, weight: f64, rpe: u8) -> Exercise {
    Exercise {
        id: id.to_string(),
        name: name.to_string(),
        sets,
        reps,
        weight,
        rpe,
        notes: String::new(),
    }
}
