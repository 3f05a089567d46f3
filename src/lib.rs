//! Gregorian to Jalali (Persian, solar Hijri) calendar conversion.
//!
//! [`PersianDate`] is a validated Jalali date that can only be built through
//! [`PersianDate::new`], the parser, or conversion from a [`chrono::NaiveDate`].
//!
//! ```
//! use chrono::NaiveDate;
//! use persian_date::{Layout, PersianDate};
//!
//! let gregorian = NaiveDate::from_ymd_opt(2009, 4, 23).unwrap();
//! let date = PersianDate::from_gregorian(gregorian).unwrap();
//! assert_eq!(date.format(Layout::Generic), "۱۳۸۸/۰۲/۰۳");
//! assert_eq!(date.format(Layout::Serialized), "1388-02-03");
//! assert_eq!(date.to_gregorian(), gregorian);
//! ```

mod consts;
mod convert;
mod day_count;
mod error;
mod format;
mod leap;
mod locale;
mod parse;
mod prelude;
mod types;

pub use consts::*;
pub use convert::{to_gregorian, to_jalali};
pub use day_count::{
    decompose_gregorian_days, decompose_jalali_days, gregorian_day_count, jalali_day_count,
};
pub use error::DateError;
pub use format::{Layout, format};
pub use leap::{is_gregorian_leap, is_jalali_leap};
pub use locale::{
    MONTH_NAMES, PERSIAN_DIGITS, WEEKDAYS, WEEKDAYS_ABBR, localize_digits, localize_number,
};
pub use parse::{parse, parse_with_separator};
pub use types::{Day, Month, Year, days_in_month};

use crate::prelude::*;
use chrono::{Datelike, Local, NaiveDate};
use std::str::FromStr;

/// A date in the Jalali calendar.
///
/// Every instance holds a year in `1..=9999`, a month in `1..=12` and a day
/// within the length of that month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct PersianDate {
    year: Year,
    month: Month,
    day: Day,
}

impl PersianDate {
    /// Creates a new date, checking the year, then the month, then the day.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear`, `DateError::InvalidMonth` or
    /// `DateError::InvalidDay` for the first component out of range.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self::from_typed(year, month, day))
    }

    /// Creates a date from components that are already validated together
    const fn from_typed(year: Year, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    /// The Persian date of the current local calendar day
    #[allow(clippy::expect_used)]
    pub fn today() -> Self {
        let now = Local::now().date_naive();
        // the local clock stays far inside Jalali years 1..=9999
        Self::from_gregorian(now).expect("current date is within the supported range")
    }

    /// # Errors
    /// Returns `DateError::InvalidYear` if the date falls outside Jalali years 1..=9999.
    pub fn from_gregorian(date: NaiveDate) -> Result<Self, DateError> {
        to_jalali(date)
    }

    /// The Gregorian date of the same day
    pub fn to_gregorian(self) -> NaiveDate {
        to_gregorian(self)
    }

    #[inline]
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Whether this date's year has a 30-day Esfand
    pub const fn is_leap_year(&self) -> bool {
        self.year.is_leap()
    }

    /// Number of days in this date's month
    pub const fn days_in_month(&self) -> u8 {
        days_in_month(self.year, self.month)
    }

    /// Day of the week, taken from the Gregorian equivalent
    pub fn weekday(&self) -> chrono::Weekday {
        self.to_gregorian().weekday()
    }

    /// Localized weekday name, e.g. `"یکشنبه"` for a Sunday
    pub fn day_of_week(&self) -> &'static str {
        locale::weekday_name(self.weekday())
    }

    /// Single-letter localized weekday, e.g. `"ی"` for a Sunday
    pub fn day_of_week_abbr(&self) -> &'static str {
        locale::weekday_abbr(self.weekday())
    }

    /// Localized month name, e.g. `"اردیبهشت"` for month 2
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[usize::from(self.month.get() - 1)]
    }

    /// Renders this date under `layout`
    pub fn format(&self, layout: Layout) -> String {
        format(self, layout)
    }
}

impl TryFrom<(i32, u8, u8)> for PersianDate {
    type Error = DateError;

    fn try_from(value: (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl TryFrom<NaiveDate> for PersianDate {
    type Error = DateError;

    fn try_from(value: NaiveDate) -> Result<Self, Self::Error> {
        to_jalali(value)
    }
}

impl From<PersianDate> for NaiveDate {
    fn from(date: PersianDate) -> Self {
        to_gregorian(date)
    }
}

impl FromStr for PersianDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl serde::Serialize for PersianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.format(Layout::Serialized))
    }
}

impl<'de> serde::Deserialize<'de> for PersianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        parse_with_separator(&s, SERIALIZED_SEPARATOR).map_err(serde::de::Error::custom)
    }
}
