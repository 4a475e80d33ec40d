use mealweek::Config;

pub fn run(config: &Config, from: &str, force: bool) -> anyhow::Result<()> {
    let mut household = super::load_household(config)?;

    if !household.is_empty() && !force {
        anyhow::bail!(
            "{} already holds data, pass --force to merge the export into it",
            config.household.path
        );
    }

    let report = mealweek::migrate::migrate_file(&mut household, from)?;
    super::save_household(config, &household)?;

    println!(
        "migrated {} meals, {} assignments, {} shopping lists ({} dropped)",
        report.meals, report.assignments, report.shopping_lists, report.dropped
    );

    Ok(())
}
