//! Day counts since each calendar's epoch and their inverse.
//!
//! Day 1 is the first day of year 1 in the respective calendar. The Gregorian
//! count matches `chrono`'s `num_days_from_ce`.

use crate::consts::{
    COMMON_YEAR_DAYS, GREGORIAN_DAYS_IN_MONTH, GREGORIAN_MEAN_YEAR, JALALI_DAYS_IN_MONTH,
    JALALI_MEAN_YEAR,
};
use crate::leap::{gregorian_leap_years, is_gregorian_leap, is_jalali_leap, jalali_leap_years};

/// Month-length table and leap rule of one calendar.
struct CalendarRules {
    days_in_month: &'static [[u8; 12]; 2],
    mean_year: f64,
    is_leap: fn(i32) -> bool,
    leap_years: fn(i32) -> i32,
}

const GREGORIAN: CalendarRules = CalendarRules {
    days_in_month: &GREGORIAN_DAYS_IN_MONTH,
    mean_year: GREGORIAN_MEAN_YEAR,
    is_leap: is_gregorian_leap,
    leap_years: gregorian_leap_years,
};

const JALALI: CalendarRules = CalendarRules {
    days_in_month: &JALALI_DAYS_IN_MONTH,
    mean_year: JALALI_MEAN_YEAR,
    is_leap: is_jalali_leap,
    leap_years: jalali_leap_years,
};

impl CalendarRules {
    fn months(&self, year: i32) -> &'static [u8; 12] {
        let table: &'static [[u8; 12]; 2] = self.days_in_month;
        &table[usize::from((self.is_leap)(year))]
    }

    fn year_length(&self, year: i32) -> i32 {
        COMMON_YEAR_DAYS + i32::from((self.is_leap)(year))
    }

    /// Days in all years before `year`.
    fn days_before_year(&self, year: i32) -> i32 {
        (year - 1) * COMMON_YEAR_DAYS + (self.leap_years)(year - 1)
    }

    fn day_count(&self, year: i32, month: u8, day: u8) -> i32 {
        debug_assert!((1..=12).contains(&month));
        let elapsed: i32 = self
            .months(year)
            .iter()
            .take(usize::from(month.saturating_sub(1)))
            .map(|&len| i32::from(len))
            .sum();
        self.days_before_year(year) + elapsed + i32::from(day)
    }

    fn decompose(&self, total_days: i32) -> (i32, u8, u8) {
        // The mean year length only estimates the year that is already
        // complete; the remainder is then pulled into 1..=year_length.
        #[allow(clippy::cast_possible_truncation)]
        let completed = (f64::from(total_days) / self.mean_year).floor() as i32;
        let mut year = completed + 1;
        let mut remainder = total_days - self.days_before_year(year);

        while remainder < 1 {
            year -= 1;
            remainder += self.year_length(year);
        }
        while remainder > self.year_length(year) {
            remainder -= self.year_length(year);
            year += 1;
        }

        let mut month = 1u8;
        for &len in self.months(year) {
            let len = i32::from(len);
            if remainder <= len {
                break;
            }
            remainder -= len;
            month += 1;
        }

        // remainder now fits within a month
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let day = remainder as u8;
        (year, month, day)
    }
}

/// Days from the Gregorian epoch through the given date (0001-01-01 is day 1).
pub fn gregorian_day_count(year: i32, month: u8, day: u8) -> i32 {
    GREGORIAN.day_count(year, month, day)
}

/// Days from the Jalali epoch through the given date (0001-01-01 is day 1).
pub fn jalali_day_count(year: i32, month: u8, day: u8) -> i32 {
    JALALI.day_count(year, month, day)
}

/// Inverse of [`gregorian_day_count`].
pub fn decompose_gregorian_days(total_days: i32) -> (i32, u8, u8) {
    GREGORIAN.decompose(total_days)
}

/// Inverse of [`jalali_day_count`].
pub fn decompose_jalali_days(total_days: i32) -> (i32, u8, u8) {
    JALALI.decompose(total_days)
}
