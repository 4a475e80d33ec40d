use mealweek_shared::{Day, WeekKey, WeekPlans};
use time::Date;

#[derive(Debug, Clone, PartialEq)]
pub struct DayInfo {
    pub day: Day,
    pub date: Date,
    pub meal_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeekInfo {
    pub year: i32,
    pub week: u8,
    pub days: Vec<DayInfo>,
}

impl WeekInfo {
    pub fn key(&self) -> WeekKey {
        WeekKey::new(self.year, self.week)
    }

    pub fn is_complete(&self) -> bool {
        self.days.iter().all(|day| day.meal_id.is_some())
    }
}

pub fn compute_week_info(week: WeekKey, plans: &WeekPlans) -> mealweek_shared::Result<WeekInfo> {
    let days = plans
        .week(week)
        .map(|(key, meal_id)| {
            Ok(DayInfo {
                day: key.day,
                date: key.date()?,
                meal_id: meal_id.map(ToOwned::to_owned),
            })
        })
        .collect::<mealweek_shared::Result<Vec<_>>>()?;

    Ok(WeekInfo {
        year: week.year,
        week: week.week,
        days,
    })
}
