use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum::VariantArray;

use crate::{Day, DayKey, WeekKey};

/// Flat day-key → meal id assignments across every week of a household.
///
/// Absent keys, `null` and empty ids all mean "unfilled".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekPlans(HashMap<String, Option<String>>);

impl WeekPlans {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn meal_id(&self, key: &DayKey) -> Option<&str> {
        self.0
            .get(&key.to_string())
            .and_then(|id| id.as_deref())
            .filter(|id| !id.is_empty())
    }

    pub fn assign(&mut self, key: DayKey, meal_id: impl Into<String>) {
        self.0.insert(key.to_string(), Some(meal_id.into()));
    }

    pub fn unassign(&mut self, key: DayKey) {
        self.0.insert(key.to_string(), None);
    }

    pub fn clear_week(&mut self, week: WeekKey) {
        for key in week.days() {
            self.0.remove(&key.to_string());
        }
    }

    /// Monday through Sunday of `week` with their assignment.
    pub fn week(&self, week: WeekKey) -> impl Iterator<Item = (DayKey, Option<&str>)> {
        Day::VARIANTS.iter().map(move |day| {
            let key = week.day(*day);
            (key, self.meal_id(&key))
        })
    }

    /// Assigned meal ids of `week`, Monday first. A meal assigned twice appears twice.
    pub fn meals_in(&self, week: WeekKey) -> impl Iterator<Item = &str> {
        self.week(week).filter_map(|(_, id)| id)
    }

    /// Overwrites entries of `self` with those of `other`.
    pub fn merge(&mut self, other: WeekPlans) {
        self.0.extend(other.0);
    }

    /// Rewrites parseable day keys into their canonical form (`2024-W07-Monday`
    /// becomes `2024-W7-Monday`). A filled canonical entry wins over a
    /// rewritten one. Unparseable keys are left untouched. Returns how many
    /// keys were rewritten.
    pub fn normalize(&mut self) -> usize {
        let mut rewritten = 0;
        let mut plans: HashMap<String, Option<String>> = HashMap::with_capacity(self.0.len());
        let mut moved = Vec::new();

        for (raw, meal_id) in self.0.drain() {
            match DayKey::parse(&raw).map(|key| key.to_string()) {
                Some(canonical) if canonical != raw => {
                    rewritten += 1;
                    moved.push((canonical, meal_id));
                }
                _ => {
                    plans.insert(raw, meal_id);
                }
            }
        }

        for (key, meal_id) in moved {
            let filled = plans
                .get(&key)
                .and_then(|id| id.as_deref())
                .is_some_and(|id| !id.is_empty());

            if !filled {
                plans.insert(key, meal_id);
            }
        }

        self.0 = plans;

        rewritten
    }

    pub fn insert_raw(&mut self, key: impl Into<String>, meal_id: Option<String>) {
        self.0.insert(key.into(), meal_id);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Option<String>)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<HashMap<String, Option<String>>> for WeekPlans {
    fn from(value: HashMap<String, Option<String>>) -> Self {
        Self(value)
    }
}
