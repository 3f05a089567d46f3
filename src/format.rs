//! Rendering of [`PersianDate`] under named layouts.

use crate::PersianDate;
use crate::locale::{localize_digits, localize_number};
use crate::prelude::*;

/// Named output layouts.
///
/// `Display` yields the layout's pattern string, which
/// [`Layout::from_pattern`] maps back to the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum Layout {
    /// `۱۳۸۸/۰۲/۰۳`: zero-padded, Persian digits
    #[default]
    #[display(fmt = "yyyy/mm/dd")]
    Generic,
    /// `۱۳۸۸/۲/۳`: unpadded, Persian digits
    #[display(fmt = "yyyy/m/d")]
    GenericShort,
    /// `۳ اردیبهشت`
    #[display(fmt = "MMMM dd")]
    MonthDay,
    /// `اردیبهشت ۱۳۸۸`
    #[display(fmt = "MMMM, yyyy")]
    MonthYear,
    /// `پنجشنبه ۳ اردیبهشت ۱۳۸۸`
    #[display(fmt = "W")]
    Written,
    /// `1388-02-03`: zero-padded, ASCII digits, for machine interchange
    #[display(fmt = "yyyy-mm-dd")]
    Serialized,
}

impl Layout {
    pub const ALL: [Self; 6] = [
        Self::Generic,
        Self::GenericShort,
        Self::MonthDay,
        Self::MonthYear,
        Self::Written,
        Self::Serialized,
    ];

    /// Looks up the layout with the given pattern; unknown or empty patterns
    /// select [`Layout::Generic`].
    pub fn from_pattern(pattern: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|layout| layout.to_string() == pattern)
            .unwrap_or_default()
    }
}

impl From<&str> for Layout {
    fn from(pattern: &str) -> Self {
        Self::from_pattern(pattern)
    }
}

/// Renders `date` under `layout`.
pub fn format(date: &PersianDate, layout: Layout) -> String {
    let year = u32::from(date.year());
    let month = u32::from(date.month());
    let day = u32::from(date.day());
    match layout {
        Layout::Generic => localize_digits(&format!("{year:04}/{month:02}/{day:02}")),
        Layout::GenericShort => format!(
            "{}/{}/{}",
            localize_number(year),
            localize_number(month),
            localize_number(day)
        ),
        Layout::MonthDay => format!("{} {}", localize_number(day), date.month_name()),
        Layout::MonthYear => format!("{} {}", date.month_name(), localize_number(year)),
        Layout::Written => format!(
            "{} {} {} {}",
            date.day_of_week(),
            localize_number(day),
            date.month_name(),
            localize_number(year)
        ),
        Layout::Serialized => format!("{year:04}-{month:02}-{day:02}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PersianDate {
        PersianDate::new(1388, 2, 3).unwrap()
    }

    #[test]
    fn test_format_layouts() {
        let pd = sample();
        assert_eq!(format(&pd, Layout::Generic), "۱۳۸۸/۰۲/۰۳");
        assert_eq!(format(&pd, Layout::GenericShort), "۱۳۸۸/۲/۳");
        assert_eq!(format(&pd, Layout::MonthDay), "۳ اردیبهشت");
        assert_eq!(format(&pd, Layout::MonthYear), "اردیبهشت ۱۳۸۸");
        assert_eq!(format(&pd, Layout::Written), "پنجشنبه ۳ اردیبهشت ۱۳۸۸");
        assert_eq!(format(&pd, Layout::Serialized), "1388-02-03");
    }

    #[test]
    fn test_default_layout_is_generic() {
        let pd = sample();
        assert_eq!(format(&pd, Layout::default()), "۱۳۸۸/۰۲/۰۳");
        assert_eq!(format(&pd, Layout::from_pattern("")), "۱۳۸۸/۰۲/۰۳");
        assert_eq!(format(&pd, Layout::from_pattern("dd.mm.yyyy")), "۱۳۸۸/۰۲/۰۳");
    }

    #[test]
    fn test_layout_patterns() {
        for layout in Layout::ALL {
            assert_eq!(Layout::from_pattern(&layout.to_string()), layout);
        }
        assert_eq!(Layout::from("W"), Layout::Written);
        assert_eq!(Layout::from("MMMM, yyyy"), Layout::MonthYear);
    }

    #[test]
    fn test_serialized_pads_small_years() {
        let pd = PersianDate::new(7, 1, 9).unwrap();
        assert_eq!(format(&pd, Layout::Serialized), "0007-01-09");
        assert_eq!(format(&pd, Layout::Generic), "۰۰۰۷/۰۱/۰۹");
    }

    #[test]
    fn test_serialized_parses_back() {
        for (y, m, d) in [(1, 1, 1), (1387, 12, 30), (1403, 6, 31), (9999, 12, 29)] {
            let pd = PersianDate::new(y, m, d).unwrap();
            let text = format(&pd, Layout::Serialized);
            assert_eq!(crate::parse_with_separator(&text, '-'), Ok(pd));
        }
    }

    #[test]
    fn test_serialized_needs_its_own_separator() {
        let text = format(&sample(), Layout::Serialized);
        assert_eq!(
            crate::parse(&text),
            Err(crate::DateError::InvalidDateString("1388-02-03".to_owned()))
        );
        assert_eq!(
            crate::parse_with_separator(&text, crate::SERIALIZED_SEPARATOR),
            Ok(sample())
        );
    }
}
