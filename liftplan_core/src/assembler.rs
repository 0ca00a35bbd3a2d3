//! Session assembly: fit the selected exercises into the available time.

use crate::selector::sample;
use crate::SelectedExercise;
use rand::Rng;

/// Number of exercise slots for `available_time` minutes
///
/// One slot per `minutes_per_exercise`, never fewer than one.
pub fn session_slots(available_time: i64, minutes_per_exercise: i64) -> usize {
    let slots = (available_time / minutes_per_exercise.max(1)).max(1);
    usize::try_from(slots).unwrap_or(usize::MAX)
}

/// Randomly pick as many selected exercises as the session has slots for
///
/// The result is in random order. An empty selection stays empty.
pub fn assemble_session<'c, R: Rng + ?Sized>(
    selected: &[SelectedExercise<'c>],
    available_time: i64,
    minutes_per_exercise: i64,
    rng: &mut R,
) -> Vec<SelectedExercise<'c>> {
    if selected.is_empty() {
        return Vec::new();
    }

    let limit = selected
        .len()
        .min(session_slots(available_time, minutes_per_exercise));
    tracing::debug!(
        "Assembling {} of {} selected exercises for {} minutes",
        limit,
        selected.len(),
        available_time
    );

    sample(selected, limit, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ExerciseRecord, Prescription};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn records(n: usize) -> Vec<ExerciseRecord> {
        (0..n)
            .map(|i| ExerciseRecord {
                name: format!("Exercise {}", i),
                muscle_group: "chest".into(),
                movement_type: "push".into(),
                equipment: vec!["barbell".into()],
                archetypes: vec![],
                other_tags: vec![],
            })
            .collect()
    }

    fn selected(records: &[ExerciseRecord]) -> Vec<SelectedExercise<'_>> {
        records
            .iter()
            .map(|record| SelectedExercise {
                record,
                prescription: Prescription::default(),
                alternatives: vec![],
            })
            .collect()
    }

    #[test]
    fn test_session_slots() {
        assert_eq!(session_slots(25, 10), 2);
        assert_eq!(session_slots(60, 10), 6);
        assert_eq!(session_slots(5, 10), 1);
        assert_eq!(session_slots(0, 10), 1);
        assert_eq!(session_slots(-30, 10), 1);
        assert_eq!(session_slots(i64::MIN, 10), 1);
        assert!(session_slots(i64::MAX, 10) > 1_000_000);
    }

    #[test]
    fn test_limits_to_available_time() {
        let records = records(10);
        let mut rng = StdRng::seed_from_u64(4);

        let session = assemble_session(&selected(&records), 25, 10, &mut rng);
        assert_eq!(session.len(), 2);
        assert_ne!(session[0].record.name, session[1].record.name);
    }

    #[test]
    fn test_minimum_one_slot() {
        let records = records(1);
        let mut rng = StdRng::seed_from_u64(4);

        assert_eq!(assemble_session(&selected(&records), 5, 10, &mut rng).len(), 1);
        assert_eq!(assemble_session(&selected(&records), -5, 10, &mut rng).len(), 1);
    }

    #[test]
    fn test_fewer_exercises_than_slots() {
        let records = records(3);
        let mut rng = StdRng::seed_from_u64(4);

        let session = assemble_session(&selected(&records), 120, 10, &mut rng);
        let names: HashSet<_> = session.iter().map(|s| s.record.name.as_str()).collect();
        assert_eq!(names.len(), 3);
    }

    #[test]
    fn test_empty_selection() {
        let mut rng = StdRng::seed_from_u64(4);
        assert!(assemble_session(&[], 60, 10, &mut rng).is_empty());
    }
}
