//! Import of the legacy browser-storage export into a household

use std::path::Path;

use anyhow::Context;
use mealweek_shared::{CategoryWeightings, DayKey, Meal, WeekKey, WeekPlans};
use mealweek_shopping::{AggregatedIngredient, ShoppingEntry};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::Household;

/// One legacy export. Every section is optional and parsed on its own.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LegacyData {
    pub meals: Vec<Meal>,
    pub week_plans: WeekPlans,
    pub category_weightings: Option<CategoryWeightings>,
    pub shopping_lists: Vec<LegacyShoppingList>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegacyShoppingList {
    pub week: WeekKey,
    pub entries: Vec<ShoppingEntry>,
    pub custom_item_history: Vec<String>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MigrationReport {
    pub meals: usize,
    pub assignments: usize,
    pub shopping_lists: usize,
    pub dropped: usize,
}

fn section<T: DeserializeOwned + Default>(document: &Value, name: &str) -> T {
    let Some(value) = document.get(name).filter(|v| !v.is_null()) else {
        return T::default();
    };

    // Browser storage keeps sections as JSON strings.
    let parsed = match value {
        Value::String(raw) => serde_json::from_str(raw),
        value => serde_json::from_value(value.clone()),
    };

    parsed.unwrap_or_else(|err| {
        tracing::warn!(section = name, err = %err, "malformed legacy section ignored");
        T::default()
    })
}

impl LegacyData {
    pub fn parse(document: &Value) -> (Self, usize) {
        let mut dropped = 0;

        let meals = section::<Vec<Meal>>(document, "meals");

        let mut week_plans = WeekPlans::new();
        for (key, meal_id) in section::<serde_json::Map<String, Value>>(document, "weekPlans") {
            match (DayKey::parse(&key), meal_id.as_str().filter(|id| !id.is_empty())) {
                (Some(day), Some(meal_id)) => week_plans.assign(day, meal_id),
                (None, _) => {
                    tracing::warn!(key, "invalid legacy day key dropped");
                    dropped += 1;
                }
                (Some(_), None) => {}
            }
        }

        let category_weightings = section::<Value>(document, "categoryWeightings")
            .as_object()
            .and_then(|object| {
                Some(CategoryWeightings::new(
                    object.get("meat")?.as_f64()?,
                    object.get("fish")?.as_f64()?,
                    object.get("vegetarian")?.as_f64()?,
                ))
            })
            .map(CategoryWeightings::clamped);

        let mut shopping_lists = vec![];
        for (key, value) in section::<serde_json::Map<String, Value>>(document, "shoppingLists") {
            let Some(week) = WeekKey::parse(&key) else {
                tracing::warn!(key, "invalid legacy week key dropped");
                dropped += 1;
                continue;
            };

            let entries = match parse_entries(value.get("items")) {
                Ok(entries) => entries,
                Err(err) => {
                    tracing::warn!(%week, err = %err, "malformed legacy shopping items ignored");
                    dropped += 1;
                    vec![]
                }
            };

            shopping_lists.push(LegacyShoppingList {
                week,
                entries,
                custom_item_history: section(&value, "customItemHistory"),
            });
        }

        shopping_lists.sort_by_key(|list| list.week);

        (
            Self {
                meals,
                week_plans,
                category_weightings,
                shopping_lists,
            },
            dropped,
        )
    }
}

/// Items are either plain objects or JSON-encoded records.
fn parse_entries(items: Option<&Value>) -> anyhow::Result<Vec<ShoppingEntry>> {
    let Some(Value::Array(items)) = items else {
        return Ok(vec![]);
    };

    items
        .iter()
        .map(|item| match item {
            Value::String(record) => Ok(serde_json::from_str(record)?),
            item => Ok(serde_json::from_value(item.clone())?),
        })
        .collect()
}

/// Merges `legacy` into `household`.
///
/// Meals whose id already exists are skipped. Custom entries are re-added
/// through the usual add path, ingredient entries are reconciled unchecked.
pub fn migrate(household: &mut Household, legacy: LegacyData) -> MigrationReport {
    let mut report = MigrationReport::default();

    for meal in legacy.meals {
        if household.meal(&meal.id).is_some() {
            tracing::warn!(meal = %meal.id, "meal already in household, skipped");
            report.dropped += 1;
            continue;
        }

        household.meals.push(meal);
        report.meals += 1;
    }

    report.assignments = legacy.week_plans.len();
    household.week_plans.merge(legacy.week_plans);

    if let Some(weightings) = legacy.category_weightings {
        household.category_weightings = weightings;
    }

    for list in legacy.shopping_lists.iter() {
        let shopping = &mut household.shopping;
        let target = shopping.lists.entry(list.week).or_default();

        for entry in list.entries.iter().filter(|entry| entry.is_custom) {
            target.add_custom(&entry.name, &mut shopping.custom_item_history);
        }

        let ingredients = list
            .entries
            .iter()
            .filter(|entry| !entry.is_custom)
            .map(|entry| AggregatedIngredient {
                name: entry.name.to_owned(),
                quantity: entry.quantity.unwrap_or_default(),
            })
            .collect::<Vec<_>>();

        *target = target.reconcile(&ingredients);
        report.shopping_lists += 1;
    }

    for list in legacy.shopping_lists.iter().rev() {
        household
            .shopping
            .custom_item_history
            .extend_older(&list.custom_item_history);
    }

    report
}

/// Reads a legacy export from disk and merges it into `household`.
pub fn migrate_file(household: &mut Household, path: impl AsRef<Path>) -> anyhow::Result<MigrationReport> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("reading legacy export {}", path.display()))?;
    let document: Value = serde_json::from_str(&data)
        .with_context(|| format!("parsing legacy export {}", path.display()))?;

    let (legacy, dropped) = LegacyData::parse(&document);
    let mut report = migrate(household, legacy);
    report.dropped += dropped;

    tracing::info!(
        meals = report.meals,
        assignments = report.assignments,
        shopping_lists = report.shopping_lists,
        dropped = report.dropped,
        "legacy data migrated"
    );

    Ok(report)
}
