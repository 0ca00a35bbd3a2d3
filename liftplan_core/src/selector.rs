//! Exercise selection for prioritized muscles.
//!
//! Every catalog record that matches a prioritized muscle and the
//! request filters is selected, so one muscle can contribute several
//! exercises. Alternatives are drawn from records sharing the muscle and
//! movement type.

use crate::{Catalog, ExerciseFilter, ExerciseRecord, Prescription, SelectedExercise};
use rand::seq::index;
use rand::Rng;

/// Pick every matching exercise for each muscle, in priority order
///
/// Within a muscle, exercises keep catalog order.
pub fn select_exercises<'c, R: Rng + ?Sized>(
    catalog: &'c Catalog,
    muscles: &[&str],
    filter: &ExerciseFilter<'_>,
    prescription: &Prescription,
    max_alternatives: usize,
    rng: &mut R,
) -> Vec<SelectedExercise<'c>> {
    let mut selected = Vec::new();

    for muscle in muscles {
        for record in catalog.exercises() {
            if record.muscle_group != *muscle || !filter.admits(record) {
                continue;
            }

            let alternatives =
                alternatives_for(record, catalog.exercises(), filter, max_alternatives, rng);

            selected.push(SelectedExercise {
                record,
                prescription: prescription.clone(),
                alternatives,
            });
        }
    }

    tracing::debug!(
        "Selected {} exercises for {} muscles",
        selected.len(),
        muscles.len()
    );
    selected
}

/// Names of up to `limit` similar exercises, sampled without replacement
///
/// Candidates share the muscle group and movement type of `record`, pass
/// `filter`, and have a different name.
pub fn alternatives_for<'c, R, I>(
    record: &ExerciseRecord,
    pool: I,
    filter: &ExerciseFilter<'_>,
    limit: usize,
    rng: &mut R,
) -> Vec<String>
where
    R: Rng + ?Sized,
    I: IntoIterator<Item = &'c ExerciseRecord>,
{
    let candidates: Vec<&str> = pool
        .into_iter()
        .filter(|alt| {
            alt.name != record.name
                && alt.muscle_group == record.muscle_group
                && alt.movement_type == record.movement_type
                && filter.admits(alt)
        })
        .map(|alt| alt.name.as_str())
        .collect();

    sample(&candidates, limit, rng)
        .into_iter()
        .map(|name| name.to_string())
        .collect()
}

/// Uniform sample of `amount` distinct items in random order
///
/// Returns every item (shuffled) when `amount >= items.len()`.
pub fn sample<T: Clone, R: Rng + ?Sized>(items: &[T], amount: usize, rng: &mut R) -> Vec<T> {
    let amount = amount.min(items.len());
    index::sample(rng, items.len(), amount)
        .into_iter()
        .map(|i| items[i].clone())
        .collect()
}
