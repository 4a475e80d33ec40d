use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

use mealweek_shared::{CategoryWeightings, Day, Meal, MealCategory, WeekKey, WeekPlans};
use rand::Rng;
use rand::seq::SliceRandom;
use strum::VariantArray;

pub struct Generate<'a> {
    pub catalog: &'a [Meal],
    pub week: WeekKey,
    /// Household assignments. Fixed days of `week` and the whole previous week are read from it.
    pub plans: &'a WeekPlans,
    pub weightings: CategoryWeightings,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPlan {
    /// The seven days of the target week, fixed and filled.
    pub plans: WeekPlans,
    pub filled: Vec<Day>,
}

/// Per-category counters, used both for targets and running counts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTargets {
    pub meat: i64,
    pub fish: i64,
    pub vegetarian: i64,
}

impl CategoryTargets {
    pub fn get(&self, category: MealCategory) -> i64 {
        match category {
            MealCategory::Meat => self.meat,
            MealCategory::Fish => self.fish,
            MealCategory::Vegetarian => self.vegetarian,
        }
    }

    pub fn get_mut(&mut self, category: MealCategory) -> &mut i64 {
        match category {
            MealCategory::Meat => &mut self.meat,
            MealCategory::Fish => &mut self.fish,
            MealCategory::Vegetarian => &mut self.vegetarian,
        }
    }

    pub fn total(&self) -> i64 {
        self.meat + self.fish + self.vegetarian
    }

    /// `self - counts`, category by category.
    pub fn deficit(&self, counts: &CategoryTargets) -> CategoryTargets {
        CategoryTargets {
            meat: self.meat - counts.meat,
            fish: self.fish - counts.fish,
            vegetarian: self.vegetarian - counts.vegetarian,
        }
    }

    /// Category with the largest value; earlier categories win ties.
    pub fn largest(&self) -> MealCategory {
        let mut largest = MealCategory::Meat;

        for category in MealCategory::VARIANTS {
            if self.get(*category) > self.get(largest) {
                largest = *category;
            }
        }

        largest
    }
}

/// Splits `days_to_fill` across categories proportionally to `weightings`.
///
/// The targets always sum to `days_to_fill`.
pub fn target_counts(weightings: CategoryWeightings, days_to_fill: usize) -> CategoryTargets {
    let weightings = weightings.normalized();
    let total = weightings.total();
    let days = days_to_fill as f64;
    let share = |category| (days * weightings.get(category) / total).round() as i64;

    let mut targets = CategoryTargets {
        meat: share(MealCategory::Meat),
        fish: share(MealCategory::Fish),
        vegetarian: share(MealCategory::Vegetarian),
    };

    let days = days_to_fill as i64;

    if targets.total() < days {
        let highest = if weightings.meat >= weightings.fish && weightings.meat >= weightings.vegetarian
        {
            MealCategory::Meat
        } else if weightings.fish >= weightings.vegetarian {
            MealCategory::Fish
        } else {
            MealCategory::Vegetarian
        };

        *targets.get_mut(highest) += days - targets.total();
    }

    let mut by_weight = MealCategory::VARIANTS.to_vec();
    by_weight.reverse();
    by_weight.sort_by(|a, b| weightings.get(*a).total_cmp(&weightings.get(*b)));

    while targets.total() > days {
        let Some(lowest) = by_weight
            .iter()
            .find(|category| targets.get(**category) > 0)
        else {
            break;
        };

        *targets.get_mut(*lowest) -= 1;
    }

    targets
}

struct DayContext<'c> {
    previous_meal: Option<&'c str>,
    deficits: CategoryTargets,
    used_this_week: &'c HashSet<&'c str>,
    previous_week: &'c HashSet<&'c str>,
}

impl DayContext<'_> {
    fn is_previous(&self, meal: &Meal) -> bool {
        self.previous_meal == Some(meal.id.as_str())
    }

    fn score(&self, meal: &Meal) -> i64 {
        let mut score = 10 * self.deficits.get(meal.category);

        if !self.used_this_week.contains(meal.id.as_str()) {
            score += 1000;
        }

        if !self.previous_week.contains(meal.id.as_str()) {
            score += 500;
        }

        if !self.is_previous(meal) {
            score += 100;
        }

        score
    }
}

type Step = for<'c, 'm> fn(&DayContext<'c>, &[&'m Meal]) -> Vec<&'m Meal>;

const CASCADE: [(&str, Step); 4] = [
    ("in_deficit", in_deficit),
    ("largest_deficit", largest_deficit),
    ("not_previous", not_previous),
    ("any", any),
];

fn in_deficit<'m>(ctx: &DayContext<'_>, candidates: &[&'m Meal]) -> Vec<&'m Meal> {
    candidates
        .iter()
        .filter(|meal| ctx.deficits.get(meal.category) > 0 && !ctx.is_previous(meal))
        .copied()
        .collect()
}

fn largest_deficit<'m>(ctx: &DayContext<'_>, candidates: &[&'m Meal]) -> Vec<&'m Meal> {
    let category = ctx.deficits.largest();

    candidates
        .iter()
        .filter(|meal| meal.category == category && !ctx.is_previous(meal))
        .copied()
        .collect()
}

fn not_previous<'m>(ctx: &DayContext<'_>, candidates: &[&'m Meal]) -> Vec<&'m Meal> {
    candidates
        .iter()
        .filter(|meal| !ctx.is_previous(meal))
        .copied()
        .collect()
}

fn any<'m>(_ctx: &DayContext<'_>, candidates: &[&'m Meal]) -> Vec<&'m Meal> {
    candidates.to_vec()
}

/// Highest score of the first non-empty cascade step. Ties keep candidate order.
fn select<'m>(ctx: &DayContext<'_>, candidates: &[&'m Meal]) -> Option<(&'static str, &'m Meal)> {
    CASCADE.iter().find_map(|(name, step)| {
        step(ctx, candidates)
            .into_iter()
            .min_by_key(|meal| Reverse(ctx.score(meal)))
            .map(|meal| (*name, meal))
    })
}

pub fn generate<R: Rng + ?Sized>(input: Generate<'_>, rng: &mut R) -> GeneratedPlan {
    let Generate {
        catalog,
        week,
        plans,
        weightings,
    } = input;

    let mut output = WeekPlans::new();
    for (key, meal_id) in plans.week(week) {
        if let Some(meal_id) = meal_id {
            output.assign(key, meal_id);
        }
    }

    if catalog.is_empty() {
        tracing::info!(%week, "empty catalog, nothing to fill");

        return GeneratedPlan {
            plans: output,
            filled: vec![],
        };
    }

    let by_id = catalog
        .iter()
        .map(|meal| (meal.id.as_str(), meal))
        .collect::<HashMap<_, _>>();

    let previous_week = plans.meals_in(week.previous()).collect::<HashSet<_>>();
    let mut used_this_week = HashSet::new();
    let mut counts = CategoryTargets::default();
    let mut days_to_fill = 0;

    for (_, meal_id) in plans.week(week) {
        let Some(meal_id) = meal_id else {
            days_to_fill += 1;
            continue;
        };

        used_this_week.insert(meal_id);

        if let Some(meal) = by_id.get(meal_id) {
            *counts.get_mut(meal.category) += 1;
        }
    }

    let targets = target_counts(weightings, days_to_fill);

    let mut shuffled = catalog.iter().collect::<Vec<_>>();
    shuffled.shuffle(rng);

    let mut previous_meal = plans.meal_id(&week.previous().day(Day::Sunday));
    let mut filled = vec![];

    for day in Day::VARIANTS {
        let key = week.day(*day);

        if let Some(meal_id) = plans.meal_id(&key) {
            previous_meal = Some(meal_id);
            continue;
        }

        let mut candidates = shuffled
            .iter()
            .filter(|meal| meal.weekend_meal == day.is_weekend())
            .copied()
            .collect::<Vec<_>>();

        if candidates.is_empty() {
            candidates = shuffled.clone();
        }

        let ctx = DayContext {
            previous_meal,
            deficits: targets.deficit(&counts),
            used_this_week: &used_this_week,
            previous_week: &previous_week,
        };

        let Some((step, meal)) = select(&ctx, &candidates) else {
            continue;
        };

        tracing::debug!(%key, meal = %meal.id, step, "day filled");

        output.assign(key, meal.id.as_str());
        *counts.get_mut(meal.category) += 1;
        used_this_week.insert(meal.id.as_str());
        previous_meal = Some(meal.id.as_str());
        filled.push(*day);
    }

    tracing::info!(
        %week,
        filled = filled.len(),
        meat = counts.meat,
        fish = counts.fish,
        vegetarian = counts.vegetarian,
        "week generated"
    );

    GeneratedPlan {
        plans: output,
        filled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_counts_default() {
        let targets = target_counts(CategoryWeightings::default(), 7);

        assert_eq!(
            targets,
            CategoryTargets {
                meat: 3,
                fish: 2,
                vegetarian: 2
            }
        );
    }

    #[test]
    fn test_target_counts_zero_weightings() {
        assert_eq!(
            target_counts(CategoryWeightings::new(0.0, 0.0, 0.0), 7),
            target_counts(CategoryWeightings::default(), 7)
        );
    }

    #[test]
    fn test_target_counts_single_category() {
        let targets = target_counts(CategoryWeightings::new(3.0, 0.0, 0.0), 7);

        assert_eq!(targets.meat, 7);
        assert_eq!(targets.fish, 0);
        assert_eq!(targets.vegetarian, 0);
    }

    #[test]
    fn test_target_counts_surplus_trimmed_from_lowest() {
        // 1.5 + 1.5 + 1.0 rounds to 2 + 2 + 1.
        let targets = target_counts(CategoryWeightings::new(3.0, 3.0, 2.0), 4);

        assert_eq!(targets.total(), 4);
        assert_eq!(targets.vegetarian, 0);
    }

    #[test]
    fn test_target_counts_shortfall_goes_to_highest() {
        // 0.2 + 0.4 + 0.4 all round down; fish wins the tie with vegetarian.
        let targets = target_counts(CategoryWeightings::new(1.0, 2.0, 2.0), 1);

        assert_eq!(
            targets,
            CategoryTargets {
                meat: 0,
                fish: 1,
                vegetarian: 0
            }
        );
    }

    #[test]
    fn test_target_counts_always_sum_to_days() {
        for meat in 0..5 {
            for fish in 0..5 {
                for vegetarian in 0..5 {
                    let weightings =
                        CategoryWeightings::new(meat as f64, fish as f64, vegetarian as f64);

                    for days in 0..=7 {
                        let targets = target_counts(weightings, days);
                        assert_eq!(targets.total(), days as i64, "{weightings:?} {days}");
                        assert!(targets.meat >= 0 && targets.fish >= 0 && targets.vegetarian >= 0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_largest_tie_break() {
        let deficits = CategoryTargets {
            meat: 1,
            fish: 2,
            vegetarian: 2,
        };
        assert_eq!(deficits.largest(), MealCategory::Fish);

        assert_eq!(CategoryTargets::default().largest(), MealCategory::Meat);
    }
}
