//! age.rs
//!
//! Elapsed-time calculation between a date of birth and "today" in whole
//! years, months and days.
//!
//! Chrono does not provide a built-in year/month/day diff (unlike Python’s
//! relativedelta), so we implement the calendar-aware borrowing rules manually.
//!
//! This logic correctly handles:
//!   • month underflow (borrowing from years)
//!   • day underflow (borrowing from previous month)
//!   • leap years
//!   • varying month lengths

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::calendar::days_in_month;
use crate::validate::BirthDate;

/// Elapsed time from a birth date to an evaluation date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeResult {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

/// Computes the age at `today` for an already-validated birth date.
///
/// Assumes the input passed [`crate::validate::validate`]; given an invalid
/// or future date the result is meaningless rather than an error.
pub fn compute_age(birth: BirthDate, today: NaiveDate) -> AgeResult {
    let mut years = today.year() - birth.year;
    let mut months = today.month() as i32 - birth.month as i32;
    let mut days = today.day() as i32 - birth.day as i32;

    // Fix day underflow: borrow from the month immediately preceding `today`
    // (not the birth month), so `days` reads as days elapsed in the current
    // partial month.
    if days < 0 {
        months -= 1;

        let (prev_year, prev_month) = if today.month() == 1 {
            (today.year() - 1, 12)
        } else {
            (today.year(), today.month() - 1)
        };

        // Add days from the previous month (28–31 depending on month & leap year)
        days += days_in_month(prev_year, prev_month) as i32;

        // A 28/29-day preceding month cannot cover a deficit from a birth day
        // of 29–31; the month-iversary never happened, so no days have
        // elapsed past it yet.
        if days < 0 {
            days = 0;
        }
    }

    // Fix month underflow
    if months < 0 {
        years -= 1;
        months += 12;
    }

    AgeResult { years, months, days }
}

/// Returns a human age as a string
pub fn age_string(age: &AgeResult) -> String {
    format!(
        "{} year{}, {} month{}, {} day{}",
        age.years,
        plural(age.years),
        age.months,
        plural(age.months),
        age.days,
        plural(age.days)
    )
}

fn plural(n: i32) -> &'static str {
    if n == 1 { "" } else { "s" }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn birth(y: i32, m: u32, d: u32) -> BirthDate {
        BirthDate { year: y, month: m, day: d }
    }

    #[test]
    fn exact_birthday() {
        let age = compute_age(birth(2000, 6, 15), date(2025, 6, 15));
        assert_eq!(age, AgeResult { years: 25, months: 0, days: 0 });
    }

    #[test]
    fn day_underflow_borrows_from_month_before_today() {
        // days = 15 - 20 = -5, borrow 31 from May 2025 → 26 days,
        // months = -1 + 12 = 11 after the year borrow.
        let age = compute_age(birth(2000, 6, 20), date(2025, 6, 15));
        assert_eq!(age, AgeResult { years: 24, months: 11, days: 26 });
    }

    #[test]
    fn day_underflow_in_january_borrows_from_december() {
        let age = compute_age(birth(2000, 1, 20), date(2025, 1, 10));
        assert_eq!(age, AgeResult { years: 24, months: 11, days: 21 });
    }

    #[test]
    fn day_underflow_in_march_borrows_leap_february() {
        // February 2024 has 29 days.
        let age = compute_age(birth(2000, 2, 20), date(2024, 3, 10));
        assert_eq!(age, AgeResult { years: 24, months: 0, days: 19 });
    }

    #[test]
    fn month_underflow_borrows_a_year() {
        let age = compute_age(birth(2000, 10, 1), date(2025, 6, 1));
        assert_eq!(age, AgeResult { years: 24, months: 8, days: 0 });
    }

    #[test]
    fn late_month_birth_day_clamps_over_short_february() {
        // days = 1 - 31 = -30; February 2025 only lends 28.
        let age = compute_age(birth(2000, 1, 31), date(2025, 3, 1));
        assert_eq!(age, AgeResult { years: 25, months: 1, days: 0 });

        let age = compute_age(birth(2000, 1, 30), date(2024, 3, 1));
        assert_eq!(age, AgeResult { years: 24, months: 1, days: 0 });
    }

    #[test]
    fn components_stay_in_range_for_valid_input() {
        use crate::calendar::days_in_month;

        for today in [date(2025, 6, 15), date(2025, 3, 1), date(2025, 1, 31)] {
            for year in [1990, 2000, 2024] {
                for month in 1..=12 {
                    for day in 1..=days_in_month(year, month) {
                        let b = birth(year, month, day);
                        let age = compute_age(b, today);
                        assert!(age.years >= 0, "{b:?} at {today}");
                        assert!((0..=11).contains(&age.months), "{b:?} at {today}");
                        assert!((0..=30).contains(&age.days), "{b:?} at {today}");
                    }
                }
            }
        }
    }

    #[test]
    fn idempotent_for_fixed_today() {
        let b = birth(1992, 6, 14);
        let today = date(2025, 8, 25);
        assert_eq!(compute_age(b, today), compute_age(b, today));
    }

    #[test]
    fn formats_with_plurals() {
        assert_eq!(
            age_string(&AgeResult { years: 1, months: 0, days: 21 }),
            "1 year, 0 months, 21 days"
        );
        assert_eq!(
            age_string(&AgeResult { years: 24, months: 1, days: 1 }),
            "24 years, 1 month, 1 day"
        );
    }
}
