//! Parsing of delimited `YYYY/MM/DD` strings.

use crate::consts::{
    DEFAULT_SEPARATOR, MAX_DATE_STRING_LEN, MAX_MONTH_DAY_FIELD_LEN, YEAR_FIELD_LEN,
};
use crate::{DateError, PersianDate};
use tracing::debug;

/// Parses `text` with the default `/` separator.
///
/// # Errors
/// See [`parse_with_separator`].
pub fn parse(text: &str) -> Result<PersianDate, DateError> {
    parse_with_separator(text, DEFAULT_SEPARATOR)
}

/// Parses `text` as year, month and day fields split by `separator`.
///
/// The year field must be four digits; month and day fields one or two.
///
/// # Errors
/// Returns a structural error (`InvalidDateString`, `InvalidYearField`,
/// `InvalidMonthField`, `InvalidDayField`) when the string is malformed, and
/// the range errors of [`PersianDate::new`] otherwise.
pub fn parse_with_separator(text: &str, separator: char) -> Result<PersianDate, DateError> {
    let (year, month, day) = split_fields(text, separator).inspect_err(|err| {
        debug!(input = text, %separator, %err, "rejecting date string");
    })?;
    PersianDate::new(year, month, day)
}

/// Runs the structural checks in order and converts the fields to integers.
fn split_fields(text: &str, separator: char) -> Result<(i32, u8, u8), DateError> {
    let len = text.chars().count();
    if len == 0 || len > MAX_DATE_STRING_LEN {
        return Err(DateError::InvalidDateString(text.to_owned()));
    }

    let parts: Vec<&str> = text.split(separator).collect();
    let &[year, month, day] = parts.as_slice() else {
        return Err(DateError::InvalidDateString(text.to_owned()));
    };

    if year.chars().count() != YEAR_FIELD_LEN {
        return Err(DateError::InvalidYearField(year.to_owned()));
    }
    if !is_month_day_field_width(month) {
        return Err(DateError::InvalidMonthField(month.to_owned()));
    }
    if !is_month_day_field_width(day) {
        return Err(DateError::InvalidDayField(day.to_owned()));
    }

    let year = parse_digits(year).ok_or_else(|| DateError::InvalidYearField(year.to_owned()))?;
    let month =
        parse_digits(month).ok_or_else(|| DateError::InvalidMonthField(month.to_owned()))?;
    let day = parse_digits(day).ok_or_else(|| DateError::InvalidDayField(day.to_owned()))?;

    // at most four decimal digits each
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let fields = (year as i32, month as u8, day as u8);
    Ok(fields)
}

fn is_month_day_field_width(field: &str) -> bool {
    (1..=MAX_MONTH_DAY_FIELD_LEN).contains(&field.chars().count())
}

/// ASCII digits only; signs and whitespace are rejected.
fn parse_digits(field: &str) -> Option<u32> {
    if !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_separator() {
        let pd = parse("1388/02/30").unwrap();
        assert_eq!((pd.year(), pd.month(), pd.day()), (1388, 2, 30));
    }

    #[test]
    fn test_parse_unpadded_fields() {
        let pd = parse("1388/2/3").unwrap();
        assert_eq!(pd, PersianDate::new(1388, 2, 3).unwrap());
    }

    #[test]
    fn test_parse_with_separator() {
        let pd = parse_with_separator("1400-01-01", '-').unwrap();
        assert_eq!(pd, PersianDate::new(1400, 1, 1).unwrap());
        let pd = parse_with_separator("1400.12.29", '.').unwrap();
        assert_eq!(pd, PersianDate::new(1400, 12, 29).unwrap());
    }

    #[test]
    fn test_structural_errors() {
        struct TestCase {
            input: &'static str,
            expected: DateError,
        }

        let cases = [
            TestCase {
                input: "",
                expected: DateError::InvalidDateString(String::new()),
            },
            TestCase {
                input: "1388/002/003",
                expected: DateError::InvalidDateString("1388/002/003".to_owned()),
            },
            TestCase {
                input: "1388/02",
                expected: DateError::InvalidDateString("1388/02".to_owned()),
            },
            TestCase {
                input: "1388/2/3/4",
                expected: DateError::InvalidDateString("1388/2/3/4".to_owned()),
            },
            TestCase {
                input: "1388-02-03",
                expected: DateError::InvalidDateString("1388-02-03".to_owned()),
            },
            TestCase {
                input: "88/02/03",
                expected: DateError::InvalidYearField("88".to_owned()),
            },
            TestCase {
                input: "13888/2/3",
                expected: DateError::InvalidYearField("13888".to_owned()),
            },
            TestCase {
                input: "1388//03",
                expected: DateError::InvalidMonthField(String::new()),
            },
            TestCase {
                input: "1388/123/3",
                expected: DateError::InvalidMonthField("123".to_owned()),
            },
            TestCase {
                input: "1388/02/",
                expected: DateError::InvalidDayField(String::new()),
            },
        ];

        for case in &cases {
            assert_eq!(
                parse(case.input),
                Err(case.expected.clone()),
                "input {:?}",
                case.input
            );
        }
    }

    #[test]
    fn test_non_numeric_fields() {
        assert_eq!(
            parse("13a8/02/03"),
            Err(DateError::InvalidYearField("13a8".to_owned()))
        );
        assert_eq!(
            parse("1388/xx/03"),
            Err(DateError::InvalidMonthField("xx".to_owned()))
        );
        assert_eq!(
            parse("1388/02/-3"),
            Err(DateError::InvalidDayField("-3".to_owned()))
        );
        assert_eq!(
            parse("1388/+2/03"),
            Err(DateError::InvalidMonthField("+2".to_owned()))
        );
    }

    #[test]
    fn test_range_errors_come_from_construction() {
        assert_eq!(parse("0000/01/01"), Err(DateError::InvalidYear(0)));
        assert_eq!(parse("1388/13/01"), Err(DateError::InvalidMonth(13)));
        assert_eq!(
            parse("1388/12/30"),
            Err(DateError::InvalidDay {
                year: 1388,
                month: 12,
                day: 30
            })
        );
        assert!(parse("1387/12/30").is_ok());
    }
}
