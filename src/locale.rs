//! Persian localization tables: digits, weekday names and month names.

use chrono::Weekday;

/// Persian digit glyphs, indexed by the ASCII digit value
pub const PERSIAN_DIGITS: [char; 10] = [
    '۰', // 0
    '۱', // 1
    '۲', // 2
    '۳', // 3
    '۴', // 4
    '۵', // 5
    '۶', // 6
    '۷', // 7
    '۸', // 8
    '۹', // 9
];

/// Weekday names, Saturday first
pub const WEEKDAYS: [&str; 7] = [
    "شنبه", // Saturday
    "یکشنبه", // Sunday
    "دوشنبه", // Monday
    "سه\u{200c}شنبه", // Tuesday
    "چهارشنبه", // Wednesday
    "پنجشنبه", // Thursday
    "جمعه", // Friday
];

/// Single-letter weekday abbreviations, Saturday first
pub const WEEKDAYS_ABBR: [&str; 7] = [
    "ش", // Saturday
    "ی", // Sunday
    "د", // Monday
    "س", // Tuesday
    "چ", // Wednesday
    "پ", // Thursday
    "ج", // Friday
];

/// Month names, Farvardin first
pub const MONTH_NAMES: [&str; 12] = [
    "فروردین", // Farvardin
    "اردیبهشت", // Ordibehesht
    "خرداد", // Khordad
    "تیر", // Tir
    "مرداد", // Mordad
    "شهریور", // Shahrivar
    "مهر", // Mehr
    "آبان", // Aban
    "آذر", // Azar
    "دی", // Dey
    "بهمن", // Bahman
    "اسفند", // Esfand
];

/// Replaces every ASCII digit in `text` with its Persian glyph; other characters pass through.
pub fn localize_digits(text: &str) -> String {
    text.chars()
        .map(|c| {
            c.to_digit(10)
                .map_or(c, |d| PERSIAN_DIGITS[d as usize])
        })
        .collect()
}

/// Renders `value` in base 10 with Persian digits.
pub fn localize_number(value: u32) -> String {
    localize_digits(&value.to_string())
}

/// Index of `weekday` in the Saturday-first tables.
pub fn weekday_index(weekday: Weekday) -> usize {
    ((weekday.num_days_from_sunday() + 1) % 7) as usize
}

/// Localized name of `weekday`
pub fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAYS[weekday_index(weekday)]
}

/// Single-letter localized abbreviation of `weekday`
pub fn weekday_abbr(weekday: Weekday) -> &'static str {
    WEEKDAYS_ABBR[weekday_index(weekday)]
}
