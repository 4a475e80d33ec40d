use std::path::Path;

use anyhow::Context;
use mealweek_mealplan::{Generate, GeneratedPlan, WeekInfo};
use mealweek_shared::{CategoryWeightings, DayKey, Meal, WeekKey, WeekPlans};
use mealweek_shopping::{Shopping, ShoppingList};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Everything one household keeps: its meal catalog, the plans of every
/// week, its category weightings and its shopping lists.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Household {
    #[serde(default)]
    pub meals: Vec<Meal>,
    #[serde(default)]
    pub week_plans: WeekPlans,
    #[serde(default)]
    pub category_weightings: CategoryWeightings,
    #[serde(default)]
    pub shopping: Shopping,
}

impl Household {
    pub fn new(category_weightings: CategoryWeightings) -> Self {
        Self {
            category_weightings,
            ..Default::default()
        }
    }

    /// Reads the household document, or starts an empty one when the file does not exist.
    pub fn load(
        path: impl AsRef<Path>,
        default_weightings: CategoryWeightings,
    ) -> anyhow::Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::info!(path = %path.display(), "no household yet, starting empty");

            return Ok(Self::new(default_weightings));
        }

        let data = std::fs::read_to_string(path)
            .with_context(|| format!("reading household {}", path.display()))?;

        let mut household: Self = serde_json::from_str(&data)
            .with_context(|| format!("parsing household {}", path.display()))?;

        let rewritten = household.week_plans.normalize();
        if rewritten > 0 {
            tracing::warn!(path = %path.display(), rewritten, "non-canonical day keys rewritten");
        }

        Ok(household)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let data = serde_json::to_string_pretty(self)?;
        std::fs::write(path, data).with_context(|| format!("writing household {}", path.display()))?;

        tracing::debug!(path = %path.display(), "household saved");

        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty() && self.week_plans.is_empty() && self.shopping.lists.is_empty()
    }

    pub fn meal(&self, id: &str) -> Option<&Meal> {
        self.meals.iter().find(|meal| meal.id == id)
    }

    pub fn week_info(&self, week: WeekKey) -> mealweek_shared::Result<WeekInfo> {
        mealweek_mealplan::compute_week_info(week, &self.week_plans)
    }

    /// Fills the empty days of `week`, then rebuilds its shopping list.
    ///
    /// Nothing is written when the week does not exist in its ISO year.
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        week: WeekKey,
        rng: &mut R,
    ) -> mealweek_shared::Result<GeneratedPlan> {
        let week = WeekKey::checked(week.year, week.week)?;

        let plan = mealweek_mealplan::generate(
            Generate {
                catalog: &self.meals,
                week,
                plans: &self.week_plans,
                weightings: self.category_weightings.clamped(),
            },
            rng,
        );

        self.week_plans.merge(plan.plans.clone());
        self.sync_shopping(week);

        Ok(plan)
    }

    pub fn sync_shopping(&mut self, week: WeekKey) -> &ShoppingList {
        self.shopping.sync(&self.meals, &self.week_plans, week)
    }

    /// Pins a meal on a day. The meal must exist in the catalog.
    pub fn assign(&mut self, key: DayKey, meal_id: &str) -> mealweek_shared::Result<()> {
        key.date()?;

        if self.meal(meal_id).is_none() {
            mealweek_shared::not_found!("meal {meal_id}");
        }

        self.week_plans.assign(key, meal_id);
        self.sync_shopping(key.week_key());

        Ok(())
    }

    pub fn unassign(&mut self, key: DayKey) {
        self.week_plans.unassign(key);
        self.sync_shopping(key.week_key());
    }

    pub fn clear_week(&mut self, week: WeekKey) {
        self.week_plans.clear_week(week);
        self.sync_shopping(week);
    }
}
