use std::collections::HashSet;

use mealweek_shared::{Meal, WeekKey, WeekPlans};

use crate::{AggregatedIngredient, ShoppingEntry, aggregate_ingredients};

use super::{Shopping, ShoppingList};

impl ShoppingList {
    /// Merges freshly aggregated ingredients into the list.
    ///
    /// Custom entries and checked ingredients survive; unchecked ingredients are
    /// replaced by `aggregated`. A checked entry whose id is aggregated again
    /// takes the fresh name and quantity and stays checked.
    pub fn reconcile(&self, aggregated: &[AggregatedIngredient]) -> ShoppingList {
        let fresh = aggregated
            .iter()
            .map(ShoppingEntry::ingredient)
            .collect::<Vec<_>>();

        let customs = self.entries.iter().filter(|entry| entry.is_custom).cloned();

        let checked = self
            .entries
            .iter()
            .filter(|entry| !entry.is_custom && entry.checked)
            .map(|entry| match fresh.iter().find(|f| f.id == entry.id) {
                Some(f) => ShoppingEntry {
                    checked: true,
                    ..f.clone()
                },
                None => entry.clone(),
            });

        let mut seen = HashSet::new();
        let entries = customs
            .chain(checked)
            .chain(fresh.iter().cloned())
            .filter(|entry| seen.insert(entry.id.to_owned()))
            .collect();

        ShoppingList { entries }
    }
}

impl Shopping {
    /// Rebuilds the ingredient entries of `week` from its assigned meals.
    pub fn sync(&mut self, catalog: &[Meal], plans: &WeekPlans, week: WeekKey) -> &ShoppingList {
        let aggregated = aggregate_ingredients(catalog, plans, week);
        let list = self.lists.entry(week).or_default();
        *list = list.reconcile(&aggregated);

        tracing::info!(%week, ingredients = aggregated.len(), entries = list.len(), "shopping list synced");

        list
    }
}
