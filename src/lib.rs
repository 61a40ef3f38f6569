//! Calendar-correct date-of-birth validation and age calculation.
//!
//! Two entry points: [`validate::validate`] checks a day/month/year triple
//! against calendar and recency rules, and [`age::compute_age`] turns a
//! validated [`validate::BirthDate`] into elapsed years/months/days.

pub mod age;
pub mod calendar;
pub mod validate;

pub use age::{AgeResult, compute_age};
pub use validate::{BirthDate, ValidationErrors, validate};
