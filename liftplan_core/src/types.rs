//! Core domain types for the Liftplan system.
//!
//! This module defines the fundamental types used throughout the system:
//! - Catalog exercise records
//! - Workout generation requests and responses
//! - Prescriptions (sets/reps/rest)
//! - Completed workout logs

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ============================================================================
// Catalog Types
// ============================================================================

/// A single exercise from the catalog
///
/// Token lists keep the order they had in the source row. Matching only
/// ever asks membership questions of them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExerciseRecord {
    pub name: String,
    pub muscle_group: String,
    pub movement_type: String,
    pub equipment: Vec<String>,
    pub archetypes: Vec<String>,
    pub other_tags: Vec<String>,
}

impl ExerciseRecord {
    /// True if any of this exercise's equipment tokens is in `access`
    pub fn uses_any_equipment(&self, access: &[String]) -> bool {
        self.equipment.iter().any(|eq| access.contains(eq))
    }

    /// True if the name contains any of `prefs` (case-insensitive)
    pub fn excluded_by(&self, prefs: &[String]) -> bool {
        let name = self.name.to_lowercase();
        prefs.iter().any(|pref| name.contains(&pref.to_lowercase()))
    }

    pub fn has_archetype(&self, archetype: &str) -> bool {
        self.archetypes.iter().any(|a| a == archetype)
    }
}

// ============================================================================
// Prescription Types
// ============================================================================

/// Set/rep/rest prescription attached to every selected exercise
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Prescription {
    pub sets: u32,
    pub reps: String,
    pub rest_seconds: u32,
}

impl Default for Prescription {
    fn default() -> Self {
        Self {
            sets: 4,
            reps: "6-10".into(),
            rest_seconds: 60,
        }
    }
}

// ============================================================================
// Request Types
// ============================================================================

/// Filters shared by selection, alternatives and reshuffling
#[derive(Clone, Debug, Default)]
pub struct ExerciseFilter<'a> {
    pub equipment_access: &'a [String],
    pub user_prefs: &'a [String],
    pub archetype: Option<&'a str>,
}

impl ExerciseFilter<'_> {
    /// Equipment, preference and archetype checks (muscle is checked by callers)
    pub fn admits(&self, record: &ExerciseRecord) -> bool {
        record.uses_any_equipment(self.equipment_access)
            && !record.excluded_by(self.user_prefs)
            && self.archetype.map_or(true, |a| record.has_archetype(a))
    }
}

/// Input for workout generation
///
/// `last_worked` and `weekly_volume` keep JSON key order; ties in the
/// muscle ranking fall back to that order.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutRequest {
    pub days_per_week: i64,
    pub available_time: i64,
    #[serde(default)]
    pub goal: Option<String>,
    #[serde(default)]
    pub last_worked: IndexMap<String, i64>,
    #[serde(default)]
    pub weekly_volume: IndexMap<String, i64>,
    pub equipment_access: Vec<String>,
    #[serde(default)]
    pub archetype: Option<String>,
    #[serde(default)]
    pub user_prefs: Vec<String>,
    /// Accepted but not used by selection
    #[serde(default)]
    pub injuries: Vec<String>,
    /// Overrides the configured/clock-derived day for this request
    #[serde(default)]
    pub current_day: Option<i64>,
}

impl WorkoutRequest {
    pub fn filter(&self) -> ExerciseFilter<'_> {
        ExerciseFilter {
            equipment_access: &self.equipment_access,
            user_prefs: &self.user_prefs,
            archetype: self.archetype.as_deref(),
        }
    }
}

/// Input for swapping one exercise of a session for another
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReshuffleRequest {
    pub current_name: String,
    #[serde(default)]
    pub muscle_group: Option<String>,
    #[serde(default)]
    pub equipment_access: Vec<String>,
    #[serde(default)]
    pub user_prefs: Vec<String>,
    #[serde(default)]
    pub archetype: Option<String>,
    #[serde(default = "default_same_muscle")]
    pub same_muscle: bool,
    #[serde(default)]
    pub goal: Option<String>,
}

fn default_same_muscle() -> bool {
    true
}

impl ReshuffleRequest {
    pub fn filter(&self) -> ExerciseFilter<'_> {
        ExerciseFilter {
            equipment_access: &self.equipment_access,
            user_prefs: &self.user_prefs,
            archetype: self.archetype.as_deref(),
        }
    }
}

// ============================================================================
// Selection Output Types
// ============================================================================

/// An exercise picked for a muscle, with its prescription and alternatives
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedExercise<'a> {
    pub record: &'a ExerciseRecord,
    pub prescription: Prescription,
    pub alternatives: Vec<String>,
}

/// Wire representation of a prescribed exercise
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseOut {
    pub name: String,
    pub muscle_group: String,
    pub movement_type: String,
    pub sets: u32,
    pub reps: String,
    pub rest: u32,
    pub alternatives: Vec<String>,
}

impl From<SelectedExercise<'_>> for ExerciseOut {
    fn from(selected: SelectedExercise<'_>) -> Self {
        ExerciseOut {
            name: selected.record.name.clone(),
            muscle_group: selected.record.muscle_group.clone(),
            movement_type: selected.record.movement_type.clone(),
            sets: selected.prescription.sets,
            reps: selected.prescription.reps,
            rest: selected.prescription.rest_seconds,
            alternatives: selected.alternatives,
        }
    }
}

// ============================================================================
// Workout Log Types
// ============================================================================

/// One performed exercise in a workout log
///
/// Only `name` is required; the rest is free-form and kept as-is.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoggedExercise {
    pub name: String,
    #[serde(default)]
    pub sets: Option<serde_json::Value>,
    #[serde(default)]
    pub reps: Option<serde_json::Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A completed workout submitted by a user
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutLog {
    pub user_id: String,
    pub date: String,
    pub exercises: Vec<LoggedExercise>,
    pub duration: i64,
    #[serde(default)]
    pub goal: Option<String>,
}
