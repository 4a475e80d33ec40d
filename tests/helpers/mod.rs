use mealweek_shared::{Ingredient, Meal, MealCategory};

pub fn meal(id: &str, category: MealCategory, ingredients: &[(&str, f64)]) -> Meal {
    Meal {
        id: id.to_owned(),
        name: format!("meal {id}"),
        category,
        link: None,
        about: None,
        ingredients: ingredients
            .iter()
            .map(|(name, quantity)| Ingredient {
                name: (*name).to_owned(),
                quantity: *quantity,
            })
            .collect(),
        favorite: false,
        weekend_meal: false,
    }
}

pub fn catalog() -> Vec<Meal> {
    vec![
        meal("meat-a", MealCategory::Meat, &[("beef", 500.0), ("onion", 1.0)]),
        meal("fish-b", MealCategory::Fish, &[("cod", 400.0), ("lemon", 1.0)]),
        meal("veg-c", MealCategory::Vegetarian, &[("lentils", 250.0), ("onion", 2.0)]),
    ]
}
