//! Gregorian to Jalali conversion through the epoch-aligned day counts.

use crate::consts::EPOCH_OFFSET;
use crate::day_count::{
    decompose_gregorian_days, decompose_jalali_days, gregorian_day_count, jalali_day_count,
};
use crate::{DateError, PersianDate};
use chrono::{Datelike, NaiveDate};
use tracing::trace;

/// Converts a Gregorian date to the Persian date of the same day.
///
/// # Errors
/// Returns `DateError::InvalidYear` if the date falls outside Jalali years 1..=9999.
pub fn to_jalali(date: NaiveDate) -> Result<PersianDate, DateError> {
    // chrono keeps month and day within 1..=31
    #[allow(clippy::cast_possible_truncation)]
    let (month, day) = (date.month() as u8, date.day() as u8);
    let gregorian_days = gregorian_day_count(date.year(), month, day);
    let jalali_days = gregorian_days - EPOCH_OFFSET;
    let (year, month, day) = decompose_jalali_days(jalali_days);
    trace!(%date, gregorian_days, jalali_days, year, month, day, "converted to jalali");
    PersianDate::new(year, month, day)
}

/// Converts a Persian date to the Gregorian date of the same day.
#[allow(clippy::expect_used)]
pub fn to_gregorian(date: PersianDate) -> NaiveDate {
    let jalali_days = jalali_day_count(i32::from(date.year()), date.month(), date.day());
    let gregorian_days = jalali_days + EPOCH_OFFSET;
    let (year, month, day) = decompose_gregorian_days(gregorian_days);
    trace!(%date, jalali_days, gregorian_days, year, month, day, "converted to gregorian");
    // Jalali 9999 ends in Gregorian 10621, well inside chrono's range
    NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))
        .expect("decomposed day count is a valid gregorian date")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gregorian(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_to_jalali_leap_year_last_day() {
        let pd = to_jalali(gregorian(2009, 3, 20)).unwrap();
        assert_eq!((pd.year(), pd.month(), pd.day()), (1387, 12, 30));
    }

    #[test]
    fn test_to_jalali_non_leap() {
        let pd = to_jalali(gregorian(2008, 10, 20)).unwrap();
        assert_eq!((pd.year(), pd.month(), pd.day()), (1387, 7, 29));
    }

    #[test]
    fn test_to_jalali_nowruz() {
        let pd = to_jalali(gregorian(2009, 3, 21)).unwrap();
        assert_eq!((pd.year(), pd.month(), pd.day()), (1388, 1, 1));
        let pd = to_jalali(gregorian(2024, 3, 20)).unwrap();
        assert_eq!((pd.year(), pd.month(), pd.day()), (1403, 1, 1));
    }

    #[test]
    fn test_to_gregorian() {
        let pd = PersianDate::new(1387, 12, 30).unwrap();
        assert_eq!(to_gregorian(pd), gregorian(2009, 3, 20));
        let pd = PersianDate::new(1388, 2, 3).unwrap();
        assert_eq!(to_gregorian(pd), gregorian(2009, 4, 23));
    }

    #[test]
    fn test_jalali_epoch() {
        let first = PersianDate::new(1, 1, 1).unwrap();
        let epoch = to_gregorian(first);
        assert_eq!(to_jalali(epoch).unwrap(), first);
        let before = epoch.pred_opt().unwrap();
        assert!(matches!(to_jalali(before), Err(DateError::InvalidYear(0))));
    }

    #[test]
    fn test_last_jalali_day() {
        let last = PersianDate::new(9999, 12, 29).unwrap();
        let gd = to_gregorian(last);
        assert_eq!(to_jalali(gd).unwrap(), last);
        let after = gd.succ_opt().unwrap();
        assert!(matches!(
            to_jalali(after),
            Err(DateError::InvalidYear(10000))
        ));
    }

    #[test]
    fn test_round_trip_every_day_20th_21st_century() {
        let mut date = gregorian(1900, 1, 1);
        let end = gregorian(2100, 12, 31);
        while date <= end {
            let pd = to_jalali(date).unwrap();
            assert_eq!(to_gregorian(pd), date, "round trip of {date} via {pd}");
            date = date.succ_opt().unwrap();
        }
    }
}
