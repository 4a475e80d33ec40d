pub mod migrate;
pub mod plan;
pub mod shopping;

use mealweek::{Config, Household};

pub fn load_household(config: &Config) -> anyhow::Result<Household> {
    Household::load(
        &config.household.path,
        config.planner.default_weightings.clamped(),
    )
}

pub fn save_household(config: &Config, household: &Household) -> anyhow::Result<()> {
    household.save(&config.household.path)
}
