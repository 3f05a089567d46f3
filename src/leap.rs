//! Leap year rules for the Jalali and Gregorian calendars.

use crate::consts::{
    CENTURY_CYCLE, GREGORIAN_CYCLE, JALALI_CYCLE, JALALI_LEAP_POSITIONS, JALALI_LEAPS_PER_CYCLE,
    LEAP_YEAR_CYCLE,
};

/// Returns true if `year mod 33` is one of the eight leap positions of the Jalali cycle.
pub const fn is_jalali_leap(year: i32) -> bool {
    let position = year.rem_euclid(JALALI_CYCLE);
    let mut i = 0;
    while i < JALALI_LEAP_POSITIONS.len() {
        if JALALI_LEAP_POSITIONS[i] == position {
            return true;
        }
        i += 1;
    }
    false
}

/// Returns true for years divisible by 4, except centuries not divisible by 400.
pub const fn is_gregorian_leap(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of Jalali leap years in `1..=years`.
///
/// Full cycles contribute eight each; the partial cycle counts the leap
/// positions it has already passed.
pub(crate) fn jalali_leap_years(years: i32) -> i32 {
    let cycles = years.div_euclid(JALALI_CYCLE);
    let position = years.rem_euclid(JALALI_CYCLE);
    let partial = JALALI_LEAP_POSITIONS
        .iter()
        .take_while(|&&p| p <= position)
        .count();
    // at most eight positions
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let partial = partial as i32;
    cycles * JALALI_LEAPS_PER_CYCLE + partial
}

/// Number of Gregorian leap years in `1..=years`.
pub(crate) const fn gregorian_leap_years(years: i32) -> i32 {
    years.div_euclid(LEAP_YEAR_CYCLE) - years.div_euclid(CENTURY_CYCLE)
        + years.div_euclid(GREGORIAN_CYCLE)
}
