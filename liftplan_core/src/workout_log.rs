//! Human-readable summaries of submitted workout logs.
//!
//! Logs are not stored; the summary is the only trace they leave.

use crate::WorkoutLog;
use serde_json::Value;

/// Acknowledgement returned for every accepted log
pub const LOG_ACK_MESSAGE: &str = "Workout logged successfully.";

fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "?".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Render a workout log as a multi-line summary
pub fn summarize(log: &WorkoutLog) -> String {
    let mut out = format!(
        "Workout log for {} on {} ({} min, goal: {})\n",
        log.user_id,
        log.date,
        log.duration,
        log.goal.as_deref().unwrap_or("unspecified")
    );

    if log.exercises.is_empty() {
        out.push_str("  (no exercises)\n");
    }

    for exercise in &log.exercises {
        out.push_str(&format!(
            "  - {}: {} x {}",
            exercise.name,
            display_value(exercise.sets.as_ref()),
            display_value(exercise.reps.as_ref())
        ));
        if let Some(weights) = exercise.extra.get("weights") {
            out.push_str(&format!(" @ {}", weights));
        }
        out.push('\n');
    }

    out
}
