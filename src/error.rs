use crate::consts::{MAX_MONTH, MAX_YEAR, MIN_YEAR};

/// Error type for constructing and parsing Persian dates.
///
/// The `Invalid*Field` and `InvalidDateString` variants come from the
/// structural checks of the parser and are reported before any range check.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Year outside `MIN_YEAR..=MAX_YEAR`.
    #[error("Invalid year: {0} (must be {min}-{max})", min = MIN_YEAR, max = MAX_YEAR)]
    InvalidYear(i32),

    /// Month outside `1..=MAX_MONTH`.
    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),

    /// Day outside the length of its month.
    #[error("Invalid day {day} for month {year}/{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },

    /// Empty, overlong, or not made of three fields.
    #[error("Invalid date string: {0:?}")]
    InvalidDateString(String),

    /// Year field is not four digits.
    #[error("Invalid year in the date string: {0:?}")]
    InvalidYearField(String),

    /// Month field is empty, too wide or not numeric.
    #[error("Invalid month in the date string: {0:?}")]
    InvalidMonthField(String),

    /// Day field is empty, too wide or not numeric.
    #[error("Invalid day in the date string: {0:?}")]
    InvalidDayField(String),
}
