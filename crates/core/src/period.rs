use chrono::{Datelike, NaiveDate};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A calendar month, keyed and displayed as `YYYY-MM`. Used as the bucket key
/// for monthly summaries, so it serializes as its display string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    pub fn from_date(date: NaiveDate) -> Self {
        Month {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMonthError(String);

impl fmt::Display for ParseMonthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid month key: {}", self.0)
    }
}

impl std::error::Error for ParseMonthError {}

impl FromStr for Month {
    type Err = ParseMonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseMonthError(s.to_string());
        let (year, month) = s.split_once('-').ok_or_else(err)?;
        let year: i32 = year.parse().map_err(|_| err())?;
        let month: u32 = month.parse().map_err(|_| err())?;
        if !(1..=12).contains(&month) {
            return Err(err());
        }
        Ok(Month { year, month })
    }
}

impl Serialize for Month {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MonthVisitor;

        impl Visitor<'_> for MonthVisitor {
            type Value = Month;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a month key in YYYY-MM form")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Month, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(MonthVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn from_date_keeps_year_and_month() {
        let m = Month::from_date(date(2024, 3, 15));
        assert_eq!(m.year(), 2024);
        assert_eq!(m.month(), 3);
    }

    #[test]
    fn display_zero_pads() {
        assert_eq!(Month::from_date(date(2024, 3, 1)).to_string(), "2024-03");
        assert_eq!(Month::from_date(date(2024, 12, 31)).to_string(), "2024-12");
    }

    #[test]
    fn ordering_is_chronological() {
        let jan = Month::from_date(date(2024, 1, 1));
        let dec_prev = Month::from_date(date(2023, 12, 1));
        let feb = Month::from_date(date(2024, 2, 1));
        assert!(dec_prev < jan);
        assert!(jan < feb);
    }

    #[test]
    fn from_str_round_trips() {
        let m: Month = "2024-03".parse().unwrap();
        assert_eq!(m, Month::from_date(date(2024, 3, 10)));
        assert!("2024-13".parse::<Month>().is_err());
        assert!("not-a-month".parse::<Month>().is_err());
    }

    #[test]
    fn serializes_as_map_key() {
        use std::collections::BTreeMap;
        let mut map = BTreeMap::new();
        map.insert(Month::from_date(date(2024, 3, 1)), 1);
        assert_eq!(serde_json::to_string(&map).unwrap(), "{\"2024-03\":1}");
    }
}
