//! Date and year-month wire formats.
//!
//! Full dates (`issuedOn`, `effectiveDate`, `recordedOn`, ...) are plain
//! `chrono::NaiveDate` values, which already (de)serialize as `yyyy-MM-dd`
//! under chrono's `serde` feature. [`YearMonth`] additionally accepts a
//! `yyyy-MM-dd` value on deserialization and silently truncates it to the
//! year and month, per the wire format's lenient fallback.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A calendar year and month, with no day-of-month component.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Builds a year-month from known-good literals, panicking if `month` is
    /// not in `1..=12` or `year`/`month` do not form a representable
    /// calendar date. Input coming from outside the process (e.g. a
    /// deserialized document) should go through [`parse_year_month`]
    /// instead, which reports the same condition as an error.
    pub fn new(year: i32, month: u32) -> Self {
        Self::try_new(year, month).expect("valid year/month")
    }

    /// Builds a year-month, failing instead of panicking if `month` is not
    /// in `1..=12` or the pair falls outside the range a calendar date can
    /// represent.
    pub fn try_new(year: i32, month: u32) -> Result<Self, String> {
        if !(1..=12).contains(&month) {
            return Err(format!("month out of range: {month}"));
        }
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(format!("year out of range: {year}"));
        }
        Ok(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The first calendar day of this year-month, for ordering comparisons
    /// against full dates (e.g. `dateOfDeath` vs. `birthDate`). Every
    /// `YearMonth` is constructed through [`Self::try_new`] (directly or via
    /// [`Self::new`]), so this conversion always succeeds.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("YearMonth year/month validated at construction")
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl fmt::Debug for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "YearMonth({self})")
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_year_month(&raw).map_err(serde::de::Error::custom)
    }
}

/// Parses `yyyy-MM`, falling back to `yyyy-MM-dd` reduced to its year-month.
pub fn parse_year_month(raw: &str) -> Result<YearMonth, String> {
    let parts: Vec<&str> = raw.split('-').collect();
    match parts.as_slice() {
        [y, m] => {
            let year: i32 = y.parse().map_err(|_| format!("invalid year: {raw}"))?;
            let month: u32 = m.parse().map_err(|_| format!("invalid month: {raw}"))?;
            YearMonth::try_new(year, month).map_err(|_| format!("invalid year-month: {raw}"))
        }
        [y, m, d] => {
            let full = format!("{y}-{m}-{d}");
            let date = NaiveDate::parse_from_str(&full, "%Y-%m-%d")
                .map_err(|_| format!("invalid date: {raw}"))?;
            YearMonth::try_new(date.year(), date.month()).map_err(|_| format!("invalid date: {raw}"))
        }
        _ => Err(format!("unrecognized year-month format: {raw}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_as_yyyy_mm() {
        assert_eq!(YearMonth::new(1970, 1).to_string(), "1970-01");
    }

    #[test]
    fn parses_strict_year_month() {
        let ym = parse_year_month("1970-01").unwrap();
        assert_eq!(ym, YearMonth::new(1970, 1));
    }

    #[test]
    fn lenient_fallback_truncates_full_date() {
        let ym = parse_year_month("1970-01-15").unwrap();
        assert_eq!(ym, YearMonth::new(1970, 1));
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_year_month("not-a-date").is_err());
    }

    #[test]
    fn rejects_year_outside_representable_range() {
        assert!(parse_year_month("300000-01").is_err());
        assert!(YearMonth::try_new(300000, 1).is_err());
    }
}
