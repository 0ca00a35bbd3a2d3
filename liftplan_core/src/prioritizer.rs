//! Muscle prioritization by recovery and weekly volume deficit.

use crate::config::TrainingConfig;
use indexmap::IndexMap;

/// Training need of one muscle group
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MuscleScore {
    /// Worked too recently to train again
    NotRecovered,
    /// Sets still missing from the weekly target (never negative)
    Deficit(i64),
}

impl MuscleScore {
    /// Positive deficit, if the muscle should be trained this session
    pub fn need(&self) -> Option<i64> {
        match self {
            MuscleScore::Deficit(d) if *d > 0 => Some(*d),
            _ => None,
        }
    }
}

/// Score every muscle group present in `weekly_volume`
///
/// Muscles absent from `last_worked` are assumed last worked on
/// `rules.default_last_worked`.
pub fn score_muscles<'a>(
    weekly_volume: &'a IndexMap<String, i64>,
    last_worked: &IndexMap<String, i64>,
    target_volume: i64,
    current_day: i64,
    rules: &TrainingConfig,
) -> Vec<(&'a str, MuscleScore)> {
    weekly_volume
        .iter()
        .map(|(muscle, volume)| {
            let last = last_worked
                .get(muscle)
                .copied()
                .unwrap_or(rules.default_last_worked);
            let days_rest = current_day.saturating_sub(last);

            let score = if days_rest < rules.min_rest_days {
                MuscleScore::NotRecovered
            } else {
                MuscleScore::Deficit(target_volume.saturating_sub(*volume).max(0))
            };
            (muscle.as_str(), score)
        })
        .collect()
}

/// Muscles that need work, highest deficit first
///
/// Ties keep the order of `weekly_volume`.
pub fn prioritize_muscles<'a>(
    weekly_volume: &'a IndexMap<String, i64>,
    last_worked: &IndexMap<String, i64>,
    goal: Option<&str>,
    current_day: i64,
    rules: &TrainingConfig,
) -> Vec<&'a str> {
    let target = rules.weekly_target(goal);

    let mut ranked: Vec<(&str, i64)> =
        score_muscles(weekly_volume, last_worked, target, current_day, rules)
            .into_iter()
            .filter_map(|(muscle, score)| score.need().map(|need| (muscle, need)))
            .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    tracing::debug!("Prioritized muscles (target {}): {:?}", target, ranked);
    ranked.into_iter().map(|(muscle, _)| muscle).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, i64)]) -> IndexMap<String, i64> {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_rested_muscle_with_deficit_is_prioritized() {
        let rules = TrainingConfig::default();
        let volume = map(&[("chest", 4)]);
        let last = map(&[("chest", 0)]);

        let scores = score_muscles(&volume, &last, 10, 7, &rules);
        assert_eq!(scores, vec![("chest", MuscleScore::Deficit(6))]);

        let muscles = prioritize_muscles(&volume, &last, Some("strength"), 7, &rules);
        assert_eq!(muscles, vec!["chest"]);
    }

    #[test]
    fn test_unrecovered_muscle_is_dropped() {
        let rules = TrainingConfig::default();
        let volume = map(&[("back", 5)]);
        let last = map(&[("back", 7)]);

        let scores = score_muscles(&volume, &last, 10, 7, &rules);
        assert_eq!(scores, vec![("back", MuscleScore::NotRecovered)]);
        assert!(prioritize_muscles(&volume, &last, Some("strength"), 7, &rules).is_empty());
    }

    #[test]
    fn test_missing_last_worked_uses_default_day() {
        let rules = TrainingConfig::default();
        let volume = map(&[("legs", 0)]);
        let last = IndexMap::new();

        // 7 - 10 = -3 days of rest
        assert!(prioritize_muscles(&volume, &last, None, 7, &rules).is_empty());
        // 11 - 10 = 1 day of rest
        assert_eq!(prioritize_muscles(&volume, &last, None, 11, &rules), vec!["legs"]);
    }

    #[test]
    fn test_satisfied_volume_is_dropped() {
        let rules = TrainingConfig::default();
        let volume = map(&[("chest", 10), ("back", 25)]);
        let last = map(&[("chest", 0), ("back", 0)]);

        let scores = score_muscles(&volume, &last, 10, 7, &rules);
        assert_eq!(
            scores,
            vec![("chest", MuscleScore::Deficit(0)), ("back", MuscleScore::Deficit(0))]
        );
        assert!(prioritize_muscles(&volume, &last, Some("strength"), 7, &rules).is_empty());
    }

    #[test]
    fn test_sorted_by_deficit_with_stable_ties() {
        let rules = TrainingConfig::default();
        let volume = map(&[("arms", 6), ("chest", 2), ("back", 6), ("legs", 0)]);
        let last = map(&[("arms", 1), ("chest", 1), ("back", 1), ("legs", 1)]);

        let muscles = prioritize_muscles(&volume, &last, Some("Aesthetics"), 7, &rules);
        assert_eq!(muscles, vec!["legs", "chest", "arms", "back"]);
    }

    #[test]
    fn test_unknown_goal_uses_default_target() {
        let rules = TrainingConfig::default();
        let volume = map(&[("chest", 11)]);
        let last = map(&[("chest", 0)]);

        // strength target 10 is already met, default 12 is not
        assert!(prioritize_muscles(&volume, &last, Some("strength"), 7, &rules).is_empty());
        assert_eq!(
            prioritize_muscles(&volume, &last, Some("yoga"), 7, &rules),
            vec!["chest"]
        );
    }

    #[test]
    fn test_empty_volume_yields_nothing() {
        let rules = TrainingConfig::default();
        let volume = IndexMap::new();
        let muscles = prioritize_muscles(&volume, &IndexMap::new(), None, 7, &rules);
        assert!(muscles.is_empty());
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        let rules = TrainingConfig::default();

        // Far-past last-worked day: fully rested
        let volume = map(&[("chest", 0)]);
        let last = map(&[("chest", i64::MIN)]);
        assert_eq!(
            score_muscles(&volume, &last, 10, 7, &rules),
            vec![("chest", MuscleScore::Deficit(10))]
        );

        // Large negative volume: deficit saturates instead of wrapping
        let volume = map(&[("chest", i64::MIN)]);
        let last = map(&[("chest", 0)]);
        assert_eq!(
            score_muscles(&volume, &last, 10, 7, &rules),
            vec![("chest", MuscleScore::Deficit(i64::MAX))]
        );
        assert_eq!(prioritize_muscles(&volume, &last, None, 7, &rules), vec!["chest"]);

        // Far-future last-worked day: not recovered
        let volume = map(&[("back", 0)]);
        let last = map(&[("back", i64::MAX)]);
        assert_eq!(
            score_muscles(&volume, &last, 10, i64::MIN, &rules),
            vec![("back", MuscleScore::NotRecovered)]
        );
    }
}
