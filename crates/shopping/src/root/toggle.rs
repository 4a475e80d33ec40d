use mealweek_shared::WeekKey;

use super::{Shopping, ShoppingList};

impl ShoppingList {
    /// Flips the checked flag, returning the new value.
    pub fn toggle(&mut self, id: &str) -> mealweek_shared::Result<bool> {
        let Some(entry) = self.entries.iter_mut().find(|entry| entry.id == id) else {
            mealweek_shared::not_found!("shopping entry {id}");
        };

        entry.checked = !entry.checked;

        Ok(entry.checked)
    }
}

impl Shopping {
    pub fn toggle(&mut self, week: WeekKey, id: &str) -> mealweek_shared::Result<bool> {
        let Some(list) = self.lists.get_mut(&week) else {
            mealweek_shared::not_found!("shopping list {week}");
        };

        list.toggle(id)
    }
}
