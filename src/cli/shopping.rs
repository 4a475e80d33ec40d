use clap::Subcommand;
use mealweek::Config;
use mealweek_shopping::{AddCustom, ShoppingList};

use crate::WeekArgs;

#[derive(Subcommand)]
pub enum ShoppingCommand {
    /// Print the list of a week
    Show {
        #[command(flatten)]
        week: WeekArgs,
    },
    /// Rebuild ingredient entries from the week's meals
    Sync {
        #[command(flatten)]
        week: WeekArgs,
    },
    /// Add a custom item
    Add {
        #[command(flatten)]
        week: WeekArgs,

        name: String,
    },
    /// Check or uncheck an entry
    Toggle {
        #[command(flatten)]
        week: WeekArgs,

        id: String,
    },
    /// Remove a custom item
    Remove {
        #[command(flatten)]
        week: WeekArgs,

        id: String,
    },
    /// Remove every entry of a week
    Clear {
        #[command(flatten)]
        week: WeekArgs,
    },
    /// Show or edit recently added custom items
    History {
        /// Forget this name
        #[arg(long)]
        remove: Option<String>,
    },
}

fn print_list(list: Option<&ShoppingList>) {
    let Some(list) = list.filter(|list| !list.is_empty()) else {
        println!("  (empty)");
        return;
    };

    for entry in &list.entries {
        let mark = if entry.checked { "x" } else { " " };
        let quantity = entry
            .quantity
            .filter(|q| *q != 0.0)
            .map(|q| format!(" {q}"))
            .unwrap_or_default();

        println!("  [{mark}] {}{quantity}  ({})", entry.name, entry.id);
    }
}

pub fn run(config: &Config, command: ShoppingCommand) -> anyhow::Result<()> {
    let mut household = super::load_household(config)?;

    let week = match command {
        ShoppingCommand::Show { week } => {
            let week = week.key()?;
            println!("{week}");
            print_list(household.shopping.list(week));

            return Ok(());
        }
        ShoppingCommand::History { remove } => {
            if let Some(name) = remove {
                if !household.shopping.custom_item_history.remove(&name) {
                    tracing::warn!(name, "not in history");
                }
                super::save_household(config, &household)?;
            }

            for name in household.shopping.custom_item_history.iter() {
                println!("  {name}");
            }

            return Ok(());
        }
        ShoppingCommand::Sync { week } => {
            let week = week.key()?;
            household.sync_shopping(week);
            week
        }
        ShoppingCommand::Add { week, name } => {
            let week = week.key()?;
            match household.shopping.add_custom(week, &name) {
                AddCustom::Ignored => anyhow::bail!("item name is empty"),
                AddCustom::Unchanged(id) => tracing::info!(id, "already on the list"),
                AddCustom::Unchecked(id) => tracing::info!(id, "unchecked"),
                AddCustom::Created(id) => tracing::info!(id, "added"),
            }
            week
        }
        ShoppingCommand::Toggle { week, id } => {
            let week = week.key()?;
            let checked = household.shopping.toggle(week, &id)?;
            tracing::info!(id, checked, "toggled");
            week
        }
        ShoppingCommand::Remove { week, id } => {
            let week = week.key()?;
            let entry = household.shopping.remove(week, &id)?;
            tracing::info!(name = entry.name, "removed");
            week
        }
        ShoppingCommand::Clear { week } => {
            let week = week.key()?;
            household.shopping.clear(week);
            week
        }
    };

    super::save_household(config, &household)?;

    println!("{week}");
    print_list(household.shopping.list(week));

    Ok(())
}
