use mealweek_shared::WeekKey;

use crate::{CustomItemHistory, ShoppingEntry};

use super::{Shopping, ShoppingList};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddCustom {
    Created(String),
    /// A checked entry with the same name was unchecked.
    Unchecked(String),
    /// An unchecked entry with the same name already exists.
    Unchanged(String),
    /// Blank name.
    Ignored,
}

impl ShoppingList {
    pub fn add_custom(&mut self, name: &str, history: &mut CustomItemHistory) -> AddCustom {
        let name = name.trim();
        if name.is_empty() {
            return AddCustom::Ignored;
        }

        let lower = name.to_lowercase();
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|entry| entry.name.to_lowercase() == lower)
        {
            if !entry.checked {
                return AddCustom::Unchanged(entry.id.to_owned());
            }

            entry.checked = false;

            return AddCustom::Unchecked(entry.id.to_owned());
        }

        let entry = ShoppingEntry::custom(name);
        let id = entry.id.to_owned();
        self.entries.push(entry);
        history.push(name);

        AddCustom::Created(id)
    }
}

impl Shopping {
    pub fn add_custom(&mut self, week: WeekKey, name: &str) -> AddCustom {
        let list = self.lists.entry(week).or_default();
        let added = list.add_custom(name, &mut self.custom_item_history);

        tracing::debug!(%week, name, ?added, "custom item");

        added
    }
}
