use std::collections::HashMap;

use mealweek_shared::{Meal, WeekKey, WeekPlans};

#[derive(Clone, Debug, PartialEq)]
pub struct AggregatedIngredient {
    pub name: String,
    pub quantity: f64,
}

/// Sums ingredient quantities by exact name over every meal assigned in `week`.
///
/// Names keep first-seen order, Monday first. A meal planned twice counts twice.
pub fn aggregate_ingredients(
    catalog: &[Meal],
    plans: &WeekPlans,
    week: WeekKey,
) -> Vec<AggregatedIngredient> {
    let by_id = catalog
        .iter()
        .map(|meal| (meal.id.as_str(), meal))
        .collect::<HashMap<_, _>>();

    let mut positions = HashMap::<&str, usize>::new();
    let mut aggregated: Vec<AggregatedIngredient> = vec![];

    for meal_id in plans.meals_in(week) {
        let Some(meal) = by_id.get(meal_id) else {
            tracing::debug!(%week, meal_id, "unknown meal skipped");
            continue;
        };

        for ingredient in &meal.ingredients {
            match positions.get(ingredient.name.as_str()) {
                Some(pos) => aggregated[*pos].quantity += ingredient.quantity,
                None => {
                    positions.insert(ingredient.name.as_str(), aggregated.len());
                    aggregated.push(AggregatedIngredient {
                        name: ingredient.name.to_owned(),
                        quantity: ingredient.quantity,
                    });
                }
            }
        }
    }

    aggregated
}
