//! Exercise catalog loaded from a tabular (CSV) source.
//!
//! The catalog is built once at startup and shared read-only by every
//! request. Loading fails if the source is missing or lacks one of the
//! required columns.

use crate::{Error, ExerciseRecord, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

/// Column headers every catalog source must provide
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "Exercise Name",
    "Primary Muscle Group",
    "Movement Type",
    "Equipment Used",
    "Archetype Tags",
    "Other Tags",
];

/// CSV row format of the catalog source
#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(rename = "Exercise Name")]
    name: String,
    #[serde(rename = "Primary Muscle Group")]
    muscle_group: String,
    #[serde(rename = "Movement Type")]
    movement_type: String,
    // Trailing tag cells may be cut off in hand-edited sources
    #[serde(rename = "Equipment Used", default)]
    equipment: Option<String>,
    #[serde(rename = "Archetype Tags", default)]
    archetypes: Option<String>,
    #[serde(rename = "Other Tags", default)]
    other_tags: Option<String>,
}

impl From<CatalogRow> for ExerciseRecord {
    fn from(row: CatalogRow) -> Self {
        ExerciseRecord {
            name: row.name,
            muscle_group: row.muscle_group,
            movement_type: row.movement_type,
            equipment: split_tokens(row.equipment.as_deref().unwrap_or_default()),
            archetypes: split_tokens(row.archetypes.as_deref().unwrap_or_default()),
            other_tags: split_tokens(row.other_tags.as_deref().unwrap_or_default()),
        }
    }
}

/// Split a comma-separated field into trimmed tokens
///
/// Every comma-separated piece yields a token, so an empty or
/// all-whitespace field becomes a single empty token `""`. There is no
/// "nan" placeholder for blank cells; the empty token only matches a
/// request that explicitly grants `""`.
pub fn split_tokens(field: &str) -> Vec<String> {
    field.split(',').map(|t| t.trim().to_string()).collect()
}

/// The immutable, ordered list of exercises
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    exercises: Vec<ExerciseRecord>,
}

impl Catalog {
    pub fn new(exercises: Vec<ExerciseRecord>) -> Self {
        Self { exercises }
    }

    /// Load the catalog from a CSV file
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::CatalogValidation(format!(
                "Catalog source not found at {:?}",
                path
            )));
        }

        let file = std::fs::File::open(path)?;
        let catalog = Self::from_reader(file)?;
        tracing::info!("Loaded {} exercises from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    /// Parse a catalog from any CSV reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .flexible(true)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|col| !headers.iter().any(|h| h == *col))
            .collect();

        if !missing.is_empty() {
            return Err(Error::CatalogValidation(format!(
                "Catalog is missing required columns: {}",
                missing.join(", ")
            )));
        }

        let mut exercises = Vec::new();
        for row in reader.deserialize::<CatalogRow>() {
            exercises.push(ExerciseRecord::from(row?));
        }

        Ok(Self { exercises })
    }

    /// All exercises in source order
    pub fn exercises(&self) -> &[ExerciseRecord] {
        &self.exercises
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// Number of exercises per muscle group
    pub fn muscle_group_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for exercise in &self.exercises {
            *counts.entry(exercise.muscle_group.as_str()).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
Exercise Name,Primary Muscle Group,Movement Type,Equipment Used,Archetype Tags,Other Tags
Barbell Bench Press,chest,push,\"barbell, bench\",\"strength, aesthetics\",compound
Push-up,chest,push,none,longevity,bodyweight
Cable Row,back,pull,,,
";

    #[test]
    fn test_parses_rows_in_order() {
        let catalog = Catalog::from_reader(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 3);

        let names: Vec<_> = catalog.exercises().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Barbell Bench Press", "Push-up", "Cable Row"]);
    }

    #[test]
    fn test_tokenizes_comma_fields() {
        let catalog = Catalog::from_reader(SAMPLE_CSV.as_bytes()).unwrap();
        let bench = &catalog.exercises()[0];

        assert_eq!(bench.equipment, vec!["barbell", "bench"]);
        assert_eq!(bench.archetypes, vec!["strength", "aesthetics"]);
        assert_eq!(bench.other_tags, vec!["compound"]);
    }

    #[test]
    fn test_empty_field_yields_single_empty_token() {
        let catalog = Catalog::from_reader(SAMPLE_CSV.as_bytes()).unwrap();
        let row = &catalog.exercises()[2];

        assert_eq!(row.equipment, vec![""]);
        assert_eq!(row.archetypes, vec![""]);
        assert!(!row.uses_any_equipment(&["barbell".to_string()]));
    }

    #[test]
    fn test_whitespace_field_yields_single_empty_token() {
        assert_eq!(split_tokens("   "), vec![""]);
        assert_eq!(split_tokens(" a ,b"), vec!["a", "b"]);
    }

    #[test]
    fn test_missing_columns_rejected() {
        let csv = "Exercise Name,Primary Muscle Group\nSquat,legs\n";
        let err = Catalog::from_reader(csv.as_bytes()).unwrap_err();

        match err {
            Error::CatalogValidation(msg) => {
                assert!(msg.contains("Movement Type"));
                assert!(msg.contains("Other Tags"));
            }
            other => panic!("Expected CatalogValidation, got {:?}", other),
        }
    }

    #[test]
    fn test_short_row_fills_missing_tags() {
        let csv = "\
Exercise Name,Primary Muscle Group,Movement Type,Equipment Used,Archetype Tags,Other Tags
Squat,legs,squat,barbell,strength
Lunge,legs,lunge
Push-up,chest,push,none,longevity,bodyweight
";
        let catalog = Catalog::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 3);

        let squat = &catalog.exercises()[0];
        assert_eq!(squat.equipment, vec!["barbell"]);
        assert_eq!(squat.archetypes, vec!["strength"]);
        assert_eq!(squat.other_tags, vec![""]);

        let lunge = &catalog.exercises()[1];
        assert_eq!(lunge.equipment, vec![""]);
        assert_eq!(lunge.other_tags, vec![""]);

        assert_eq!(catalog.exercises()[2].other_tags, vec!["bodyweight"]);
    }

    #[test]
    fn test_extra_columns_ignored() {
        let csv = "\
Id,Exercise Name,Primary Muscle Group,Movement Type,Equipment Used,Archetype Tags,Other Tags
1,Squat,legs,squat,barbell,strength,
";
        let catalog = Catalog::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(catalog.exercises()[0].name, "Squat");
    }

    #[test]
    fn test_load_missing_file_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = Catalog::load_from(&temp_dir.path().join("nope.csv"));
        assert!(matches!(result, Err(Error::CatalogValidation(_))));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("catalog.csv");
        std::fs::write(&path, SAMPLE_CSV).unwrap();

        let catalog = Catalog::load_from(&path).unwrap();
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_muscle_group_counts() {
        let catalog = Catalog::from_reader(SAMPLE_CSV.as_bytes()).unwrap();
        let counts = catalog.muscle_group_counts();

        assert_eq!(counts.get("chest"), Some(&2));
        assert_eq!(counts.get("back"), Some(&1));
    }
}
