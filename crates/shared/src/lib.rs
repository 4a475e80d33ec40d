mod error;
pub mod meal;
pub mod plan;
pub mod week;

pub use error::*;
pub use meal::{CategoryWeightings, Ingredient, Meal, MealCategory};
pub use plan::WeekPlans;
pub use week::{Day, DayKey, WeekKey, date_of, week_of};
