mod add;
mod remove;
mod reset;
mod sync;
mod toggle;

pub use add::*;

use std::collections::HashMap;

use mealweek_shared::WeekKey;
use serde::{Deserialize, Serialize};

use crate::{CustomItemHistory, ShoppingEntry};

/// Entries of one week: custom items first, then ingredients.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShoppingList {
    #[serde(rename = "items", with = "crate::entry::records", default)]
    pub entries: Vec<ShoppingEntry>,
}

impl ShoppingList {
    pub fn new(entries: Vec<ShoppingEntry>) -> Self {
        Self { entries }
    }

    pub fn get(&self, id: &str) -> Option<&ShoppingEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&ShoppingEntry> {
        let name = name.trim().to_lowercase();

        self.entries
            .iter()
            .find(|entry| entry.name.to_lowercase() == name)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Every shopping list of a household, keyed by week, plus its custom item history.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shopping {
    #[serde(default)]
    pub lists: HashMap<WeekKey, ShoppingList>,
    #[serde(default)]
    pub custom_item_history: CustomItemHistory,
}

impl Shopping {
    pub fn list(&self, week: WeekKey) -> Option<&ShoppingList> {
        self.lists.get(&week)
    }

    pub fn weeks(&self) -> Vec<WeekKey> {
        let mut weeks = self.lists.keys().copied().collect::<Vec<_>>();
        weeks.sort();

        weeks
    }
}
