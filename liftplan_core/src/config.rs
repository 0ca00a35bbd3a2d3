//! Configuration file support for Liftplan.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/liftplan/config.toml`.

use crate::{Error, Prescription, Result};
use chrono::Datelike;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Built-in weekly set targets per goal
static DEFAULT_GOALS: Lazy<BTreeMap<String, GoalConfig>> = Lazy::new(|| {
    [
        ("strength", 10),
        ("aesthetics", 15),
        ("performance", 12),
        ("longevity", 10),
    ]
    .into_iter()
    .map(|(name, target)| {
        (
            name.to_string(),
            GoalConfig {
                weekly_target: target,
                prescription: None,
            },
        )
    })
    .collect()
});

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub training: TrainingConfig,
}

/// HTTP server configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_cors_allow_any")]
    pub cors_allow_any: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_allow_any: default_cors_allow_any(),
        }
    }
}

/// Catalog source configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

/// Per-goal training parameters
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoalConfig {
    pub weekly_target: i64,

    /// Overrides the default prescription for this goal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prescription: Option<Prescription>,
}

/// Selection parameters
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Day index used as "today"; derived from the clock when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_day: Option<i64>,

    #[serde(default = "default_min_rest_days")]
    pub min_rest_days: i64,

    /// Assumed last-worked day for muscles missing from `lastWorked`
    #[serde(default = "default_last_worked")]
    pub default_last_worked: i64,

    /// Weekly target for goals not in `goals`
    #[serde(default = "default_weekly_target")]
    pub default_weekly_target: i64,

    #[serde(default = "default_minutes_per_exercise")]
    pub minutes_per_exercise: i64,

    #[serde(default = "default_max_alternatives")]
    pub max_alternatives: usize,

    /// Seed for reproducible sampling; entropy when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    #[serde(default)]
    pub default_prescription: Prescription,

    #[serde(default = "default_goals")]
    pub goals: BTreeMap<String, GoalConfig>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            current_day: None,
            min_rest_days: default_min_rest_days(),
            default_last_worked: default_last_worked(),
            default_weekly_target: default_weekly_target(),
            minutes_per_exercise: default_minutes_per_exercise(),
            max_alternatives: default_max_alternatives(),
            seed: None,
            default_prescription: Prescription::default(),
            goals: default_goals(),
        }
    }
}

impl TrainingConfig {
    fn goal(&self, goal: Option<&str>) -> Option<&GoalConfig> {
        goal.and_then(|g| self.goals.get(&g.to_lowercase()))
    }

    /// Weekly set target for a goal (case-insensitive)
    pub fn weekly_target(&self, goal: Option<&str>) -> i64 {
        self.goal(goal)
            .map(|g| g.weekly_target)
            .unwrap_or(self.default_weekly_target)
    }

    /// Prescription for a goal, falling back to the default one
    pub fn prescription(&self, goal: Option<&str>) -> &Prescription {
        self.goal(goal)
            .and_then(|g| g.prescription.as_ref())
            .unwrap_or(&self.default_prescription)
    }

    /// The day index to treat as "today"
    ///
    /// Uses the configured day if set, otherwise the ISO weekday of the
    /// local clock (Monday = 1, Sunday = 7).
    pub fn today(&self) -> i64 {
        self.current_day.unwrap_or_else(|| {
            chrono::Local::now().weekday().number_from_monday() as i64
        })
    }
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    8000
}

fn default_cors_allow_any() -> bool {
    true
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("Cleaned_Master_Exercise_List.csv")
}

fn default_min_rest_days() -> i64 {
    1
}

fn default_last_worked() -> i64 {
    10
}

fn default_weekly_target() -> i64 {
    12
}

fn default_minutes_per_exercise() -> i64 {
    10
}

fn default_max_alternatives() -> usize {
    3
}

fn default_goals() -> BTreeMap<String, GoalConfig> {
    DEFAULT_GOALS.clone()
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        let base = match dirs::config_dir() {
            Some(dir) => dir,
            None => {
                let home = std::env::var("HOME").map_err(|_| {
                    Error::Config("HOME environment variable not set".into())
                })?;
                PathBuf::from(home).join(".config")
            }
        };
        Ok(base.join("liftplan").join("config.toml"))
    }

    /// Reject values the selection rules cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.training.minutes_per_exercise <= 0 {
            return Err(Error::Config(format!(
                "minutes_per_exercise must be positive, got {}",
                self.training.minutes_per_exercise
            )));
        }
        Ok(())
    }
}
