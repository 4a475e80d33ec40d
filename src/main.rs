mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mealweek_shared::{Day, WeekKey};

/// mealweek - weekly meal planning and shopping lists
#[derive(Parser)]
#[command(name = "mealweek", version)]
#[command(about = "Plan a household's weekly meals and derive the shopping list", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    /// Household document (overrides config file)
    #[arg(long, global = true)]
    household: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Clone, Copy)]
struct WeekArgs {
    /// ISO year, defaults to the current one
    #[arg(long)]
    year: Option<i32>,

    /// ISO week number, defaults to the current one
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=53))]
    week: Option<u8>,
}

impl WeekArgs {
    /// Fails for a week its ISO year does not have, such as 2021-W53.
    fn key(self) -> mealweek_shared::Result<WeekKey> {
        let current = WeekKey::current();

        WeekKey::checked(
            self.year.unwrap_or(current.year),
            self.week.unwrap_or(current.week),
        )
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show the meals planned for a week
    Week {
        #[command(flatten)]
        week: WeekArgs,
    },
    /// Fill the empty days of a week
    Generate {
        #[command(flatten)]
        week: WeekArgs,

        /// Seed for a reproducible plan (overrides config file)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Pin or clear meals on days
    Plan {
        #[command(subcommand)]
        command: cli::plan::PlanCommand,
    },
    /// Search the meal catalog
    Meals {
        /// Fuzzy query, all meals when empty
        #[arg(default_value = "")]
        query: String,
    },
    /// Manage the shopping list of a week
    Shopping {
        #[command(subcommand)]
        command: cli::shopping::ShoppingCommand,
    },
    /// Import a legacy browser-storage export
    Migrate {
        /// Legacy JSON export
        #[arg(long)]
        from: String,

        /// Merge into a household that already has data
        #[arg(long)]
        force: bool,
    },
}

fn parse_day(value: &str) -> Result<Day, String> {
    value
        .parse::<Day>()
        .map_err(|_| format!("{value} is not a day, expected Monday..Sunday"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = mealweek::config::Config::load(cli.config.clone())?;
    if let Some(household) = cli.household {
        config.household.path = household;
    }
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mealweek::observability::init_observability(&config.observability.log_level)?;

    let result = run(&config, cli.command);

    if let Err(err) = &result {
        tracing::error!(err = %err, "command failed");
    }

    result
}

fn run(config: &mealweek::Config, command: Commands) -> Result<()> {
    match command {
        Commands::Week { week } => cli::plan::show(config, week.key()?),
        Commands::Generate { week, seed } => cli::plan::generate(config, week.key()?, seed),
        Commands::Plan { command } => cli::plan::run(config, command),
        Commands::Meals { query } => cli::plan::search(config, &query),
        Commands::Shopping { command } => cli::shopping::run(config, command),
        Commands::Migrate { from, force } => cli::migrate::run(config, &from, force),
    }
}
