use mealweek_shared::WeekKey;

use crate::ShoppingEntry;

use super::{Shopping, ShoppingList};

impl ShoppingList {
    /// Removes a custom entry. Ingredient entries only leave through reconciliation.
    pub fn remove(&mut self, id: &str) -> mealweek_shared::Result<ShoppingEntry> {
        let Some(pos) = self.entries.iter().position(|entry| entry.id == id) else {
            mealweek_shared::not_found!("shopping entry {id}");
        };

        if !self.entries[pos].is_custom {
            mealweek_shared::user!("{id} comes from the meal plan and cannot be removed");
        }

        Ok(self.entries.remove(pos))
    }
}

impl Shopping {
    pub fn remove(&mut self, week: WeekKey, id: &str) -> mealweek_shared::Result<ShoppingEntry> {
        let Some(list) = self.lists.get_mut(&week) else {
            mealweek_shared::not_found!("shopping list {week}");
        };

        list.remove(id)
    }
}
