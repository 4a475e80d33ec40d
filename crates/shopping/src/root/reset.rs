use mealweek_shared::WeekKey;

use super::{Shopping, ShoppingList};

impl ShoppingList {
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Shopping {
    /// Empties the list of `week`. Returns how many entries were dropped.
    pub fn clear(&mut self, week: WeekKey) -> usize {
        let Some(list) = self.lists.get_mut(&week) else {
            return 0;
        };

        let dropped = list.len();
        list.clear();

        tracing::info!(%week, dropped, "shopping list cleared");

        dropped
    }
}
