//! validate.rs
//!
//! Validation of a candidate day/month/year triple entered as text.
//!
//! Fields arrive as numeric-or-empty strings (the caller strips anything
//! else while the user types). Checks run in two phases:
//!   1. per-field: presence, coarse ranges, year not past the evaluation year
//!   2. whole-form, only once every field is individually valid: day within
//!      the month's actual (leap-aware) length, then date not in the future
//!
//! Field errors can coexist across fields; a whole-form error never appears
//! alongside a field error.

use chrono::{Datelike, NaiveDate};

use crate::calendar::days_in_month;

/// A validated date of birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// A failure attributable to a single input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Empty or non-numeric input.
    Missing,
    /// Day outside [1, 31].
    InvalidDay,
    /// Month outside [1, 12].
    InvalidMonth,
    /// Year later than the evaluation year.
    InvalidYear,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldError::Missing => write!(f, "required"),
            FieldError::InvalidDay => write!(f, "invalid day"),
            FieldError::InvalidMonth => write!(f, "invalid month"),
            FieldError::InvalidYear => write!(f, "invalid year"),
        }
    }
}

impl std::error::Error for FieldError {}

/// A failure of the day/month/year combination rather than a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    /// Day exceeds the actual length of the given month (e.g. 30 February).
    InvalidDate,
    /// Composed date is strictly after the evaluation date.
    FutureDate,
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormError::InvalidDate => write!(f, "invalid date"),
            FormError::FutureDate => write!(f, "date cannot be in the future"),
        }
    }
}

impl std::error::Error for FormError {}

/// Everything wrong with one submission, keyed by field plus an optional
/// whole-form slot. Never constructed empty by [`validate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub day: Option<FieldError>,
    pub month: Option<FieldError>,
    pub year: Option<FieldError>,
    pub form: Option<FormError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.day.is_none() && self.month.is_none() && self.year.is_none() && self.form.is_none()
    }

    fn has_field_errors(&self) -> bool {
        self.day.is_some() || self.month.is_some() || self.year.is_some()
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut sep = "";
        for (name, err) in [("day", &self.day), ("month", &self.month), ("year", &self.year)] {
            if let Some(e) = err {
                write!(f, "{sep}{name}: {e}")?;
                sep = "; ";
            }
        }
        if let Some(e) = &self.form {
            write!(f, "{sep}{e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// Non-numeric text is treated the same as an empty field.
fn parse_field(text: &str) -> Option<u32> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<u32>().ok()
}

/// Validates a day/month/year triple against `today`.
///
/// Returns the parsed [`BirthDate`] when every rule passes, otherwise the
/// full set of field errors (and possibly one whole-form error).
pub fn validate(
    day: &str,
    month: &str,
    year: &str,
    today: NaiveDate,
) -> Result<BirthDate, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let d = parse_field(day);
    let m = parse_field(month);
    let y = parse_field(year);

    match d {
        None => errors.day = Some(FieldError::Missing),
        Some(d) if !(1..=31).contains(&d) => errors.day = Some(FieldError::InvalidDay),
        Some(_) => {}
    }
    match m {
        None => errors.month = Some(FieldError::Missing),
        Some(m) if !(1..=12).contains(&m) => errors.month = Some(FieldError::InvalidMonth),
        Some(_) => {}
    }
    match y {
        None => errors.year = Some(FieldError::Missing),
        Some(y) if i64::from(y) > i64::from(today.year()) => {
            errors.year = Some(FieldError::InvalidYear)
        }
        Some(_) => {}
    }

    if errors.has_field_errors() {
        return Err(errors);
    }

    // All fields individually valid from here on.
    let (d, m, y) = (d.unwrap(), m.unwrap(), y.unwrap() as i32);

    if d > days_in_month(y, m) {
        errors.form = Some(FormError::InvalidDate);
        return Err(errors);
    }

    // Compare year, then month, then day against today.
    let future = y > today.year()
        || (y == today.year()
            && (m > today.month() || (m == today.month() && d > today.day())));
    if future {
        errors.form = Some(FormError::FutureDate);
        return Err(errors);
    }

    Ok(BirthDate { year: y, month: m, day: d })
}
