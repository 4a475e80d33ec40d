use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use mealweek_shared::CategoryWeightings;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub household: HouseholdConfig,
    #[serde(default)]
    pub planner: PlannerConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HouseholdConfig {
    /// JSON document holding meals, week plans, weightings and shopping lists
    pub path: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct PlannerConfig {
    /// Fixed seed for reproducible plans; random when unset
    #[serde(default)]
    pub seed: Option<u64>,
    /// Weightings of a household that has none saved yet
    #[serde(default)]
    pub default_weightings: CategoryWeightings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (MEALWEEK__HOUSEHOLD__PATH, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("household.path", "mealweek.json")?
            .set_default("observability.log_level", "info")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MEALWEEK")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.household.path.trim().is_empty() {
            return Err("Household path must not be empty".to_string());
        }

        let weightings = &self.planner.default_weightings;
        if weightings.meat < 0.0 || weightings.fish < 0.0 || weightings.vegetarian < 0.0 {
            return Err("Default weightings must not be negative".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(path: &str, weightings: CategoryWeightings) -> Config {
        Config {
            household: HouseholdConfig {
                path: path.to_string(),
            },
            planner: PlannerConfig {
                seed: None,
                default_weightings: weightings,
            },
            observability: ObservabilityConfig::default(),
        }
    }

    #[test]
    fn test_validation_empty_path() {
        assert!(config("  ", CategoryWeightings::default()).validate().is_err());
    }

    #[test]
    fn test_validation_negative_weighting() {
        let weightings = CategoryWeightings::new(1.0, -1.0, 1.0);

        assert!(config("mealweek.json", weightings).validate().is_err());
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(
            config("mealweek.json", CategoryWeightings::new(2.0, 0.0, 1.0))
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn test_load_from_file() {
        let dir = temp_dir::TempDir::new().unwrap();
        let path = dir.child("mealweek.toml");
        std::fs::write(
            &path,
            r#"
[household]
path = "/tmp/household.json"

[planner]
seed = 42
default_weightings = { meat = 1.0, fish = 2.0, vegetarian = 3.0 }

[observability]
log_level = "debug"
"#,
        )
        .unwrap();

        let config = Config::load(Some(path.to_string_lossy().to_string())).unwrap();

        assert_eq!(config.household.path, "/tmp/household.json");
        assert_eq!(config.planner.seed, Some(42));
        assert_eq!(
            config.planner.default_weightings,
            CategoryWeightings::new(1.0, 2.0, 3.0)
        );
        assert_eq!(config.observability.log_level, "debug");
    }
}
