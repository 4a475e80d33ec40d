use serde::{Deserialize, Serialize};

pub const CUSTOM_ITEM_HISTORY_LIMIT: usize = 20;

/// Recently added custom item names, most recent first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomItemHistory(Vec<String>);

impl CustomItemHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names already present keep their position.
    pub fn push(&mut self, name: &str) {
        let name = name.trim();

        if name.is_empty() || self.0.iter().any(|n| n == name) {
            return;
        }

        self.0.insert(0, name.to_owned());
        self.0.truncate(CUSTOM_ITEM_HISTORY_LIMIT);
    }

    pub fn remove(&mut self, name: &str) -> bool {
        let len = self.0.len();
        self.0.retain(|n| n != name);

        self.0.len() != len
    }

    /// Appends names after the current ones, skipping duplicates, up to the limit.
    pub fn extend_older<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            if self.0.len() >= CUSTOM_ITEM_HISTORY_LIMIT {
                break;
            }

            let name = name.as_ref().trim();
            if !name.is_empty() && !self.0.iter().any(|n| n == name) {
                self.0.push(name.to_owned());
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
