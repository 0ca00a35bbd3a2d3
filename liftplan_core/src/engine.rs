//! Workout generation engine.
//!
//! Ties the pipeline together:
//! - Rank muscles by recovery and volume deficit
//! - Select matching exercises (with alternatives) for those muscles
//! - Trim the selection to the available time, in random order

use crate::assembler::assemble_session;
use crate::config::TrainingConfig;
use crate::prioritizer::prioritize_muscles;
use crate::selector::{alternatives_for, select_exercises};
use crate::{Catalog, ExerciseOut, ReshuffleRequest, WorkoutRequest};
use rand::seq::SliceRandom;
use rand::Rng;

/// Generate a workout session for a request
///
/// `current_day` is the day index treated as "today"; a `currentDay` on
/// the request takes precedence. An empty result is a valid session.
pub fn generate_workout<R: Rng + ?Sized>(
    catalog: &Catalog,
    request: &WorkoutRequest,
    rules: &TrainingConfig,
    current_day: i64,
    rng: &mut R,
) -> Vec<ExerciseOut> {
    let today = request.current_day.unwrap_or(current_day);
    let goal = request.goal.as_deref();

    let muscles = prioritize_muscles(
        &request.weekly_volume,
        &request.last_worked,
        goal,
        today,
        rules,
    );

    if muscles.is_empty() {
        tracing::info!("No muscles need work on day {}", today);
        return Vec::new();
    }

    let selected = select_exercises(
        catalog,
        &muscles,
        &request.filter(),
        rules.prescription(goal),
        rules.max_alternatives,
        rng,
    );

    let session = assemble_session(
        &selected,
        request.available_time,
        rules.minutes_per_exercise,
        rng,
    );

    tracing::info!(
        "Generated {} exercises ({} candidates) for muscles {:?}",
        session.len(),
        selected.len(),
        muscles
    );

    session.into_iter().map(ExerciseOut::from).collect()
}

/// Swap the current exercise for a random similar one
///
/// Returns None when no other exercise passes the filters.
pub fn reshuffle_exercise<R: Rng + ?Sized>(
    catalog: &Catalog,
    request: &ReshuffleRequest,
    rules: &TrainingConfig,
    rng: &mut R,
) -> Option<ExerciseOut> {
    let filter = request.filter();

    let pool: Vec<_> = catalog
        .exercises()
        .iter()
        .filter(|ex| {
            ex.name != request.current_name
                && (!request.same_muscle
                    || request.muscle_group.as_deref() == Some(ex.muscle_group.as_str()))
                && filter.admits(ex)
        })
        .collect();

    let Some(&record) = pool.choose(rng) else {
        tracing::info!("No reshuffle candidates for {:?}", request.current_name);
        return None;
    };

    let alternatives = alternatives_for(
        record,
        pool.iter().copied(),
        &filter,
        rules.max_alternatives,
        rng,
    );
    let prescription = rules.prescription(request.goal.as_deref()).clone();

    tracing::debug!(
        "Reshuffled {:?} -> {:?}",
        request.current_name,
        record.name
    );

    Some(ExerciseOut {
        name: record.name.clone(),
        muscle_group: record.muscle_group.clone(),
        movement_type: record.movement_type.clone(),
        sets: prescription.sets,
        reps: prescription.reps,
        rest: prescription.rest_seconds,
        alternatives,
    })
}
