use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use time::{Date, OffsetDateTime, Weekday};

use crate::Error;

static RE_DAY_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)-W([0-9]+)-(Monday|Tuesday|Wednesday|Thursday|Friday|Saturday|Sunday)$")
        .unwrap()
});
static RE_WEEK_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)-W([0-9]+)$").unwrap());

/// Last week number reachable through [`WeekKey::previous`] and [`WeekKey::next`].
///
/// ISO years with 53 weeks exist; navigation wraps at 52 regardless and only
/// [`week_of`] ever yields week 53.
pub const NAVIGATION_LAST_WEEK: u8 = 52;

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
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// Friday, Saturday and Sunday get weekend meals.
    pub fn is_weekend(self) -> bool {
        matches!(self, Day::Friday | Day::Saturday | Day::Sunday)
    }
}

impl From<Day> for Weekday {
    fn from(value: Day) -> Self {
        match value {
            Day::Monday => Weekday::Monday,
            Day::Tuesday => Weekday::Tuesday,
            Day::Wednesday => Weekday::Wednesday,
            Day::Thursday => Weekday::Thursday,
            Day::Friday => Weekday::Friday,
            Day::Saturday => Weekday::Saturday,
            Day::Sunday => Weekday::Sunday,
        }
    }
}

impl From<Weekday> for Day {
    fn from(value: Weekday) -> Self {
        match value {
            Weekday::Monday => Day::Monday,
            Weekday::Tuesday => Day::Tuesday,
            Weekday::Wednesday => Day::Wednesday,
            Weekday::Thursday => Day::Thursday,
            Weekday::Friday => Day::Friday,
            Weekday::Saturday => Day::Saturday,
            Weekday::Sunday => Day::Sunday,
        }
    }
}

/// One ISO-like week, formatted as `{year}-W{week}`. Scopes a shopping list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WeekKey {
    pub year: i32,
    pub week: u8,
}

impl WeekKey {
    pub fn new(year: i32, week: u8) -> Self {
        Self { year, week }
    }

    /// Like [`WeekKey::new`], but fails for a week the ISO year does not have.
    pub fn checked(year: i32, week: u8) -> crate::Result<Self> {
        let key = Self::new(year, week);
        date_of(key, Day::Monday)?;

        Ok(key)
    }

    /// Week containing today's date (UTC).
    pub fn current() -> Self {
        week_of(OffsetDateTime::now_utc().date())
    }

    pub fn previous(self) -> Self {
        if self.week > 1 {
            Self::new(self.year, self.week - 1)
        } else {
            Self::new(self.year - 1, NAVIGATION_LAST_WEEK)
        }
    }

    pub fn next(self) -> Self {
        if self.week < NAVIGATION_LAST_WEEK {
            Self::new(self.year, self.week + 1)
        } else {
            Self::new(self.year + 1, 1)
        }
    }

    pub fn day(self, day: Day) -> DayKey {
        DayKey {
            year: self.year,
            week: self.week,
            day,
        }
    }

    /// Day keys Monday through Sunday.
    pub fn days(self) -> impl Iterator<Item = DayKey> {
        Day::VARIANTS.iter().map(move |day| self.day(*day))
    }

    pub fn date_of(self, day: Day) -> crate::Result<Date> {
        date_of(self, day)
    }

    pub fn parse(value: &str) -> Option<Self> {
        let captures = RE_WEEK_KEY.captures(value)?;

        Some(Self {
            year: captures[1].parse().ok()?,
            week: captures[2].parse().ok()?,
        })
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{}", self.year, self.week)
    }
}

impl FromStr for WeekKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| Error::InvalidWeekKey(s.to_owned()))
    }
}

impl Serialize for WeekKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for WeekKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(de::Error::custom)
    }
}

/// One day of one week, formatted as `{year}-W{week}-{Day}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayKey {
    pub year: i32,
    pub week: u8,
    pub day: Day,
}

impl DayKey {
    pub fn new(year: i32, week: u8, day: Day) -> Self {
        Self { year, week, day }
    }

    pub fn week_key(&self) -> WeekKey {
        WeekKey::new(self.year, self.week)
    }

    pub fn date(&self) -> crate::Result<Date> {
        date_of(self.week_key(), self.day)
    }

    /// Returns `None` for anything that is not exactly `{digits}-W{digits}-{Day}`.
    pub fn parse(value: &str) -> Option<Self> {
        let captures = RE_DAY_KEY.captures(value)?;

        Some(Self {
            year: captures[1].parse().ok()?,
            week: captures[2].parse().ok()?,
            day: captures[3].parse().ok()?,
        })
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{}-{}", self.year, self.week, self.day)
    }
}

impl FromStr for DayKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| Error::InvalidDayKey(s.to_owned()))
    }
}

/// ISO-8601 week of a date: week 1 holds the year's first Thursday.
pub fn week_of(date: Date) -> WeekKey {
    let (year, week, _) = date.to_iso_week_date();

    WeekKey { year, week }
}

pub fn date_of(week: WeekKey, day: Day) -> crate::Result<Date> {
    Date::from_iso_week_date(week.year, week.week, day.into()).map_err(|_| Error::InvalidWeek {
        year: week.year,
        week: week.week,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_week_dates_are_consecutive_from_monday() {
        for year in 1990..=2040 {
            for week in 1..=NAVIGATION_LAST_WEEK {
                let key = WeekKey::new(year, week);
                let dates = Day::VARIANTS
                    .iter()
                    .map(|day| key.date_of(*day).unwrap())
                    .collect::<Vec<_>>();

                assert_eq!(dates[0].weekday(), Weekday::Monday);
                for pair in dates.windows(2) {
                    assert_eq!(pair[0].next_day(), Some(pair[1]));
                }
                for date in dates {
                    assert_eq!(week_of(date), key);
                }
            }
        }
    }

    #[test]
    fn test_known_dates() {
        assert_eq!(
            WeekKey::new(2024, 47).date_of(Day::Monday).unwrap(),
            date!(2024 - 11 - 18)
        );
        assert_eq!(
            WeekKey::new(2026, 1).date_of(Day::Monday).unwrap(),
            date!(2025 - 12 - 29)
        );
        assert_eq!(week_of(date!(2021 - 01 - 03)), WeekKey::new(2020, 53));
        assert_eq!(week_of(date!(2021 - 01 - 04)), WeekKey::new(2021, 1));
    }

    #[test]
    fn test_week_53_only_when_the_year_has_it() {
        assert!(WeekKey::new(2020, 53).date_of(Day::Sunday).is_ok());
        assert!(matches!(
            WeekKey::new(2021, 53).date_of(Day::Monday),
            Err(Error::InvalidWeek {
                year: 2021,
                week: 53
            })
        ));
        assert!(WeekKey::new(2021, 0).date_of(Day::Monday).is_err());
    }

    #[test]
    fn test_checked_rejects_missing_weeks() {
        assert_eq!(WeekKey::checked(2020, 53).ok(), Some(WeekKey::new(2020, 53)));
        assert_eq!(WeekKey::checked(2024, 1).ok(), Some(WeekKey::new(2024, 1)));
        assert!(matches!(
            WeekKey::checked(2021, 53),
            Err(Error::InvalidWeek {
                year: 2021,
                week: 53
            })
        ));
        assert!(WeekKey::checked(2024, 0).is_err());
        assert!(WeekKey::checked(2024, 54).is_err());
    }

    #[test]
    fn test_day_key_round_trip() {
        for year in [1, 99, 2024, 9999] {
            for week in 1..=NAVIGATION_LAST_WEEK {
                for day in Day::VARIANTS {
                    let key = DayKey::new(year, week, *day);
                    assert_eq!(DayKey::parse(&key.to_string()), Some(key));
                }
            }
        }

        assert_eq!(
            DayKey::new(2024, 47, Day::Monday).to_string(),
            "2024-W47-Monday"
        );
    }

    #[test]
    fn test_day_key_rejects_malformed() {
        for value in [
            "not-a-key",
            "",
            "2024-W47",
            "2024-W47-monday",
            "2024-W47-Mon",
            "2024W47-Monday",
            " 2024-W47-Monday",
            "2024-W47-Monday ",
            "-2024-W47-Monday",
            "2024-W-Monday",
            "99999999999-W1-Monday",
            "2024-W999-Monday",
            "２０２４-W47-Monday",
        ] {
            assert_eq!(DayKey::parse(value), None, "{value}");
        }

        assert!(matches!(
            "not-a-key".parse::<DayKey>(),
            Err(Error::InvalidDayKey(_))
        ));
    }

    #[test]
    fn test_week_key_round_trip() {
        let key = WeekKey::new(2024, 7);
        assert_eq!(key.to_string(), "2024-W7");
        assert_eq!("2024-W7".parse::<WeekKey>().unwrap(), key);
        assert!("2024-W7-Monday".parse::<WeekKey>().is_err());
    }

    #[test]
    fn test_navigation_wraps_at_52() {
        assert_eq!(WeekKey::new(2024, 1).previous(), WeekKey::new(2023, 52));
        assert_eq!(WeekKey::new(2024, 52).next(), WeekKey::new(2025, 1));
        assert_eq!(WeekKey::new(2020, 53).next(), WeekKey::new(2021, 1));
        assert_eq!(WeekKey::new(2024, 10).next().previous(), WeekKey::new(2024, 10));
    }

    #[test]
    fn test_weekend_days() {
        let weekend = Day::VARIANTS
            .iter()
            .filter(|day| day.is_weekend())
            .collect::<Vec<_>>();

        assert_eq!(weekend, [&Day::Friday, &Day::Saturday, &Day::Sunday]);
    }

    #[test]
    fn test_week_key_as_json_map_key() {
        let mut map = std::collections::HashMap::new();
        map.insert(WeekKey::new(2024, 47), 1);

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"2024-W47":1}"#);

        let back: std::collections::HashMap<WeekKey, i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }
}
