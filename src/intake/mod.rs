//! Task intake: turning raw user input into validated [`Task`]s.
//!
//! Two front-ends share the validation rules defined here:
//! [`interactive`] re-prompts until each field is valid, and [`file`] loads
//! a batch of entries and fails on the first bad one.

pub mod file;
pub mod interactive;

use chrono::NaiveDate;
use thiserror::Error;

use crate::task::Task;

pub use file::load_tasks;
pub use interactive::collect_tasks;

/// Name given to tasks entered without one.
pub const UNTITLED: &str = "Untitled";

/// Why a single input value was rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The text is not a `DD/MM/YYYY` (or ISO) calendar date.
    #[error("Error: Please type date as DD/MM/YYYY")]
    InvalidDate(String),

    /// The text is not an integer.
    #[error("That's not a number.")]
    NotANumber(String),

    /// The integer falls outside a closed range.
    #[error("Number must be between {min} and {max}")]
    OutOfRange {
        /// Rejected value.
        value: i64,
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
    },

    /// The integer is below an open-ended lower bound.
    #[error("Number must be at least {min}")]
    BelowMinimum {
        /// Rejected value.
        value: i64,
        /// Inclusive lower bound.
        min: i64,
    },
}

/// Inclusive integer bounds for a numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// Smallest accepted value.
    pub min: i64,
    /// Largest accepted value, if any.
    pub max: Option<i64>,
}

impl Bounds {
    /// `min..=max`.
    #[must_use]
    pub const fn closed(min: i64, max: i64) -> Self {
        Self { min, max: Some(max) }
    }

    /// `min..`.
    #[must_use]
    pub const fn at_least(min: i64) -> Self {
        Self { min, max: None }
    }

    /// Checks `value` against these bounds.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` or `BelowMinimum` when `value` falls outside.
    pub fn check(self, value: i64) -> Result<i64, ValidationError> {
        match self.max {
            Some(max) if value < self.min || value > max => {
                Err(ValidationError::OutOfRange { value, min: self.min, max })
            }
            None if value < self.min => {
                Err(ValidationError::BelowMinimum { value, min: self.min })
            }
            _ => Ok(value),
        }
    }
}

/// Importance levels, 1 (low) to 5 (critical).
pub const IMPORTANCE: Bounds = Bounds::closed(1, 5);
/// Effort in minutes, capped at one working day.
pub const EFFORT: Bounds = Bounds::closed(0, 480);
/// Dependency counts; any non-negative number is accepted.
pub const DEPENDENCIES: Bounds = Bounds::at_least(0);
/// Number of tasks to enter interactively.
pub const TASK_COUNT: Bounds = Bounds::at_least(1);

/// Parses a deadline written as `DD/MM/YYYY` or `YYYY-MM-DD`.
///
/// # Errors
///
/// Returns `InvalidDate` for any other shape or for dates that do not exist.
pub fn parse_deadline(text: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = text.trim();
    let invalid = || ValidationError::InvalidDate(trimmed.to_string());

    let parts: Vec<&str> = trimmed.split('/').collect();
    if let [day, month, year] = parts.as_slice() {
        let day: u32 = day.trim().parse().map_err(|_| invalid())?;
        let month: u32 = month.trim().parse().map_err(|_| invalid())?;
        let year: i32 = year.trim().parse().map_err(|_| invalid())?;
        return NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid);
    }

    trimmed.parse::<NaiveDate>().map_err(|_| invalid())
}

/// Parses an integer and checks it against `bounds`.
///
/// # Errors
///
/// Returns `NotANumber` if `text` is not an integer, or a bounds error.
pub fn parse_number(text: &str, bounds: Bounds) -> Result<i64, ValidationError> {
    let trimmed = text.trim();
    let value: i64 =
        trimmed.parse().map_err(|_| ValidationError::NotANumber(trimmed.to_string()))?;
    bounds.check(value)
}

/// Validates an importance level.
///
/// # Errors
///
/// Returns `OutOfRange` unless `value` is in `1..=5`.
pub fn importance(value: i64) -> Result<u8, ValidationError> {
    let checked = IMPORTANCE.check(value)?;
    Ok(u8::try_from(checked).unwrap_or(u8::MAX))
}

/// Validates an effort estimate in minutes.
///
/// # Errors
///
/// Returns `OutOfRange` unless `value` is in `0..=480`.
pub fn effort(value: i64) -> Result<u32, ValidationError> {
    let checked = EFFORT.check(value)?;
    Ok(u32::try_from(checked).unwrap_or(u32::MAX))
}

/// Validates a dependency count. Counts beyond `u32::MAX` saturate.
///
/// # Errors
///
/// Returns `BelowMinimum` for negative counts.
pub fn dependencies(value: i64) -> Result<u32, ValidationError> {
    let checked = DEPENDENCIES.check(value)?;
    Ok(u32::try_from(checked).unwrap_or(u32::MAX))
}

/// Trims a task name, substituting [`UNTITLED`] when nothing is left.
#[must_use]
pub fn normalize_name(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        UNTITLED.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Raw field values for one task, before validation.
#[derive(Debug, Clone, Copy)]
pub struct RawTask<'a> {
    /// Name as typed; may be empty.
    pub name: &'a str,
    /// Deadline text.
    pub deadline: &'a str,
    /// Importance level.
    pub importance: i64,
    /// Effort in minutes.
    pub effort: i64,
    /// Dependency count.
    pub dependencies: i64,
}

impl RawTask<'_> {
    /// Validates every field and builds a [`Task`].
    ///
    /// # Errors
    ///
    /// Returns the first field's validation error.
    pub fn validate(self) -> Result<Task, ValidationError> {
        Ok(Task::new(
            normalize_name(self.name),
            parse_deadline(self.deadline)?,
            importance(self.importance)?,
            effort(self.effort)?,
            dependencies(self.dependencies)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_day_month_year() {
        assert_eq!(parse_deadline("05/03/2025"), Ok(date(2025, 3, 5)));
        assert_eq!(parse_deadline(" 5/3/2025 "), Ok(date(2025, 3, 5)));
        assert_eq!(parse_deadline("31/12/1999"), Ok(date(1999, 12, 31)));
    }

    #[test]
    fn parses_iso_dates() {
        assert_eq!(parse_deadline("2025-03-05"), Ok(date(2025, 3, 5)));
    }

    #[test]
    fn rejects_malformed_dates() {
        for bad in ["", "tomorrow", "05/03", "05-03-2025x", "aa/bb/cccc", "1/2/3/4"] {
            assert!(
                matches!(parse_deadline(bad), Err(ValidationError::InvalidDate(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(parse_deadline("31/02/2025").is_err());
        assert!(parse_deadline("29/02/2023").is_err());
        assert_eq!(parse_deadline("29/02/2024"), Ok(date(2024, 2, 29)));
    }

    #[test]
    fn parse_number_checks_bounds() {
        assert_eq!(parse_number(" 3 ", IMPORTANCE), Ok(3));
        assert_eq!(
            parse_number("6", IMPORTANCE),
            Err(ValidationError::OutOfRange { value: 6, min: 1, max: 5 })
        );
        assert_eq!(
            parse_number("-1", DEPENDENCIES),
            Err(ValidationError::BelowMinimum { value: -1, min: 0 })
        );
        assert_eq!(parse_number("12", DEPENDENCIES), Ok(12));
        assert_eq!(parse_number("x", EFFORT), Err(ValidationError::NotANumber("x".to_string())));
        assert_eq!(parse_number("2.5", EFFORT), Err(ValidationError::NotANumber("2.5".to_string())));
    }

    #[test]
    fn effort_limits_are_inclusive() {
        assert_eq!(effort(0), Ok(0));
        assert_eq!(effort(480), Ok(480));
        assert!(effort(481).is_err());
    }

    #[test]
    fn huge_dependency_counts_saturate() {
        assert_eq!(dependencies(i64::MAX), Ok(u32::MAX));
    }

    #[test]
    fn blank_names_become_untitled() {
        assert_eq!(normalize_name("   "), UNTITLED);
        assert_eq!(normalize_name(" Taxes "), "Taxes");
    }

    #[test]
    fn raw_task_validates_all_fields() {
        let raw = RawTask {
            name: "",
            deadline: "01/07/2025",
            importance: 4,
            effort: 30,
            dependencies: 2,
        };
        assert_eq!(raw.validate(), Ok(Task::new(UNTITLED, date(2025, 7, 1), 4, 30, 2)));

        let bad = RawTask { importance: 0, ..raw };
        assert_eq!(bad.validate(), Err(ValidationError::OutOfRange { value: 0, min: 1, max: 5 }));
    }

    #[test]
    fn messages_match_prompts() {
        assert_eq!(
            ValidationError::InvalidDate(String::new()).to_string(),
            "Error: Please type date as DD/MM/YYYY"
        );
        assert_eq!(
            ValidationError::BelowMinimum { value: -2, min: 0 }.to_string(),
            "Number must be at least 0"
        );
    }
}
