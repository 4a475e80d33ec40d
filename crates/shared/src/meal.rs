use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    Display,
    AsRefStr,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MealCategory {
    Meat,
    Fish,
    Vegetarian,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub quantity: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub id: String,
    pub name: String,
    pub category: MealCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub weekend_meal: bool,
}

impl Meal {
    pub fn matches(&self, query: &str) -> bool {
        fuzzy_match(query, &self.name)
    }
}

/// Case-insensitive subsequence match: every character of the trimmed query
/// appears in `text` in order. An empty query matches everything.
pub fn fuzzy_match(query: &str, text: &str) -> bool {
    let query = query.trim().to_lowercase();
    let mut text = text.chars().flat_map(char::to_lowercase);

    query.chars().all(|c| text.any(|t| t == c))
}

pub fn search<'a>(catalog: &'a [Meal], query: &str) -> Vec<&'a Meal> {
    catalog.iter().filter(|meal| meal.matches(query)).collect()
}

/// Relative preference for each category when filling a week.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryWeightings {
    pub meat: f64,
    pub fish: f64,
    pub vegetarian: f64,
}

impl Default for CategoryWeightings {
    fn default() -> Self {
        Self {
            meat: 1.0,
            fish: 1.0,
            vegetarian: 1.0,
        }
    }
}

impl CategoryWeightings {
    pub fn new(meat: f64, fish: f64, vegetarian: f64) -> Self {
        Self {
            meat,
            fish,
            vegetarian,
        }
    }

    pub fn get(&self, category: MealCategory) -> f64 {
        match category {
            MealCategory::Meat => self.meat,
            MealCategory::Fish => self.fish,
            MealCategory::Vegetarian => self.vegetarian,
        }
    }

    pub fn with(mut self, category: MealCategory, value: f64) -> Self {
        match category {
            MealCategory::Meat => self.meat = value,
            MealCategory::Fish => self.fish = value,
            MealCategory::Vegetarian => self.vegetarian = value,
        }

        self
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn total(&self) -> f64 {
        self.meat + self.fish + self.vegetarian
    }

    /// Negative and NaN weights become zero.
    pub fn clamped(self) -> Self {
        let clamp = |value: f64| if value > 0.0 { value } else { 0.0 };

        Self {
            meat: clamp(self.meat),
            fish: clamp(self.fish),
            vegetarian: clamp(self.vegetarian),
        }
    }

    /// Clamped weightings, or 1:1:1 when nothing positive remains.
    pub fn normalized(self) -> Self {
        let clamped = self.clamped();

        if clamped.total() > 0.0 {
            clamped
        } else {
            Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meal(name: &str) -> Meal {
        Meal {
            id: name.to_lowercase(),
            name: name.to_owned(),
            category: MealCategory::Meat,
            link: None,
            about: None,
            ingredients: vec![],
            favorite: false,
            weekend_meal: false,
        }
    }

    #[test]
    fn test_fuzzy_match() {
        assert!(fuzzy_match("", "Lasagne"));
        assert!(fuzzy_match("   ", "Lasagne"));
        assert!(fuzzy_match("lsg", "Lasagne"));
        assert!(fuzzy_match(" LAS ", "Lasagne"));
        assert!(!fuzzy_match("gsl", "Lasagne"));
        assert!(!fuzzy_match("lasagnes", "Lasagne"));
    }

    #[test]
    fn test_search() {
        let catalog = vec![meal("Chili con carne"), meal("Fish and chips"), meal("Curry")];
        let names = search(&catalog, "chi")
            .into_iter()
            .map(|meal| meal.name.as_str())
            .collect::<Vec<_>>();

        assert_eq!(names, ["Chili con carne", "Fish and chips"]);
        assert_eq!(search(&catalog, "").len(), 3);
    }

    #[test]
    fn test_weightings() {
        let weightings = CategoryWeightings::new(-2.0, f64::NAN, 3.0).clamped();
        assert_eq!(weightings, CategoryWeightings::new(0.0, 0.0, 3.0));

        assert_eq!(
            CategoryWeightings::new(0.0, 0.0, 0.0).normalized(),
            CategoryWeightings::default()
        );
        assert_eq!(
            CategoryWeightings::new(-1.0, -1.0, -1.0).normalized(),
            CategoryWeightings::default()
        );

        let mut weightings = CategoryWeightings::default().with(MealCategory::Fish, 4.0);
        assert_eq!(weightings.get(MealCategory::Fish), 4.0);
        assert_eq!(weightings.total(), 6.0);

        weightings.reset();
        assert_eq!(weightings, CategoryWeightings::default());
    }

    #[test]
    fn test_meal_json_shape() {
        let json = r#"{
            "id": "m1",
            "name": "Salmon",
            "category": "fish",
            "ingredients": [{ "name": "salmon", "quantity": 2 }],
            "weekendMeal": true
        }"#;
        let meal: Meal = serde_json::from_str(json).unwrap();

        assert_eq!(meal.category, MealCategory::Fish);
        assert!(meal.weekend_meal);
        assert!(!meal.favorite);
        assert_eq!(meal.ingredients[0].quantity, 2.0);
        assert_eq!("vegetarian".parse::<MealCategory>().unwrap(), MealCategory::Vegetarian);
        assert_eq!(MealCategory::Meat.to_string(), "meat");
    }
}
