use clap::Subcommand;
use mealweek::{Config, Household};
use mealweek_shared::{Day, WeekKey};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::WeekArgs;

#[derive(Subcommand)]
pub enum PlanCommand {
    /// Pin a meal on a day
    Set {
        #[command(flatten)]
        week: WeekArgs,

        #[arg(value_parser = crate::parse_day)]
        day: Day,

        meal_id: String,
    },
    /// Empty one day, or the whole week when no day is given
    Clear {
        #[command(flatten)]
        week: WeekArgs,

        #[arg(value_parser = crate::parse_day)]
        day: Option<Day>,
    },
}

fn print_week(household: &Household, week: WeekKey) -> anyhow::Result<()> {
    let info = household.week_info(week)?;

    println!("{week}");
    for day in info.days {
        let meal = match day.meal_id.as_deref() {
            Some(id) => household
                .meal(id)
                .map(|meal| format!("{} [{}]", meal.name, meal.category))
                .unwrap_or_else(|| format!("{id} (unknown meal)")),
            None => "-".to_owned(),
        };

        println!("  {:<9} {}  {meal}", day.day, day.date);
    }

    Ok(())
}

pub fn show(config: &Config, week: WeekKey) -> anyhow::Result<()> {
    let household = super::load_household(config)?;

    print_week(&household, week)
}

pub fn generate(config: &Config, week: WeekKey, seed: Option<u64>) -> anyhow::Result<()> {
    let mut household = super::load_household(config)?;

    if household.meals.is_empty() {
        tracing::warn!(path = %config.household.path, "no meals in the catalog");
    }

    let plan = match seed.or(config.planner.seed) {
        Some(seed) => household.generate(week, &mut StdRng::seed_from_u64(seed))?,
        None => household.generate(week, &mut rand::rng())?,
    };

    super::save_household(config, &household)?;

    tracing::info!(%week, filled = plan.filled.len(), "plan saved");

    print_week(&household, week)
}

pub fn search(config: &Config, query: &str) -> anyhow::Result<()> {
    let household = super::load_household(config)?;

    for meal in mealweek_shared::meal::search(&household.meals, query) {
        let weekend = if meal.weekend_meal { " weekend" } else { "" };
        let favorite = if meal.favorite { " *" } else { "" };

        println!("{}  {} [{}{weekend}]{favorite}", meal.id, meal.name, meal.category);
    }

    Ok(())
}

pub fn run(config: &Config, command: PlanCommand) -> anyhow::Result<()> {
    let mut household = super::load_household(config)?;

    let week = match command {
        PlanCommand::Set { week, day, meal_id } => {
            let week = week.key()?;
            household.assign(week.day(day), &meal_id)?;
            week
        }
        PlanCommand::Clear {
            week,
            day: Some(day),
        } => {
            let week = week.key()?;
            household.unassign(week.day(day));
            week
        }
        PlanCommand::Clear { week, day: None } => {
            let week = week.key()?;
            household.clear_week(week);
            week
        }
    };

    super::save_household(config, &household)?;

    print_week(&household, week)
}
