/// Minimum valid Jalali year (inclusive)
pub const MIN_YEAR: i32 = 1;
/// Maximum valid Jalali year (inclusive)
pub const MAX_YEAR: i32 = 9999;

/// Maximum valid month (Esfand)
pub const MAX_MONTH: u8 = 12;

/// Day-count difference between the Gregorian and Jalali epochs
pub const EPOCH_OFFSET: i32 = 226_894;

/// Length of the Jalali leap cycle in years
pub(crate) const JALALI_CYCLE: i32 = 33;
/// Leap years per Jalali cycle
pub(crate) const JALALI_LEAPS_PER_CYCLE: i32 = 8;
/// Positions (`year mod 33`) of the leap years within a Jalali cycle
pub(crate) const JALALI_LEAP_POSITIONS: [i32; 8] = [1, 5, 9, 13, 17, 22, 26, 30];

/// Gregorian leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Days in a common year, both calendars
pub(crate) const COMMON_YEAR_DAYS: i32 = 365;
/// Mean Gregorian year length used to estimate the year of a day count
pub(crate) const GREGORIAN_MEAN_YEAR: f64 = 365.25;
/// Mean Jalali year length (eight leap days every 33 years)
pub(crate) const JALALI_MEAN_YEAR: f64 = 365.25 - 0.25 / 33.0;

/// Gregorian month lengths, indexed by `[leap as usize][month - 1]`
pub const GREGORIAN_DAYS_IN_MONTH: [[u8; 12]; 2] = [
    [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31],
    [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31],
];

/// Jalali month lengths, indexed by `[leap as usize][month - 1]`
pub const JALALI_DAYS_IN_MONTH: [[u8; 12]; 2] = [
    [31, 31, 31, 31, 31, 31, 30, 30, 30, 30, 30, 29],
    [31, 31, 31, 31, 31, 31, 30, 30, 30, 30, 30, 30],
];

/// Separator of the generic `YYYY/MM/DD` form, the parser default
pub const DEFAULT_SEPARATOR: char = '/';
/// Separator of the serialized `YYYY-MM-DD` form
pub const SERIALIZED_SEPARATOR: char = '-';

/// Longest accepted date string (`YYYY/MM/DD`)
pub const MAX_DATE_STRING_LEN: usize = 10;
/// Exact width of the year field
pub(crate) const YEAR_FIELD_LEN: usize = 4;
/// Widest month or day field
pub(crate) const MAX_MONTH_DAY_FIELD_LEN: usize = 2;
