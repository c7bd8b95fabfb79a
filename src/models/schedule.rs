//! Recurrence descriptors
//!
//! A [`Schedule`] says when an income or expense fires. Each variant carries
//! only the fields its recurrence needs; the [`Period`] enumeration names the
//! recurrence kind on its own.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::DATE_FORMAT;

/// Kind of recurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// Once a month on a fixed day
    Monthly,
    /// Twice a month, on the 1st and the 15th
    BiMonthly,
    /// Every week on a fixed weekday
    Weekly,
    /// Every other week on a fixed weekday
    BiWeekly,
    /// A single date
    OneTime,
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "Monthly"),
            Self::BiMonthly => write!(f, "Bi-monthly"),
            Self::Weekly => write!(f, "Weekly"),
            Self::BiWeekly => write!(f, "Bi-weekly"),
            Self::OneTime => write!(f, "One-time"),
        }
    }
}

/// When a cash flow occurs
///
/// Callers are responsible for sensible values: a `day_of_month` outside
/// 1..=31 is not rejected here (see [`Schedule::validate`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "period", rename_all = "lowercase")]
pub enum Schedule {
    /// Once a month on `day_of_month`; short months clamp to their last day
    Monthly { day_of_month: u32 },

    /// On the 1st and the 15th of every month
    BiMonthly,

    /// Every `weekday`
    Weekly { weekday: Weekday },

    /// Every other `weekday`, phased from the first match in a window
    BiWeekly { weekday: Weekday },

    /// Once, on `date`
    OneTime { date: NaiveDate },
}

impl Schedule {
    /// Monthly on the given day
    pub fn monthly(day_of_month: u32) -> Self {
        Self::Monthly { day_of_month }
    }

    /// On the 1st and 15th
    pub fn bi_monthly() -> Self {
        Self::BiMonthly
    }

    /// Weekly on the given weekday
    pub fn weekly(weekday: Weekday) -> Self {
        Self::Weekly { weekday }
    }

    /// Every other week on the given weekday
    pub fn bi_weekly(weekday: Weekday) -> Self {
        Self::BiWeekly { weekday }
    }

    /// A single date
    pub fn one_time(date: NaiveDate) -> Self {
        Self::OneTime { date }
    }

    /// The recurrence kind
    pub fn period(&self) -> Period {
        match self {
            Self::Monthly { .. } => Period::Monthly,
            Self::BiMonthly => Period::BiMonthly,
            Self::Weekly { .. } => Period::Weekly,
            Self::BiWeekly { .. } => Period::BiWeekly,
            Self::OneTime { .. } => Period::OneTime,
        }
    }

    /// Check that the schedule's fields are in range
    pub fn validate(&self) -> Result<(), ScheduleValidationError> {
        match self {
            Self::Monthly { day_of_month } if !(1..=31).contains(day_of_month) => {
                Err(ScheduleValidationError::DayOfMonthOutOfRange(*day_of_month))
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly { day_of_month } => write!(f, "Monthly on day {}", day_of_month),
            Self::BiMonthly => write!(f, "Bi-monthly (1st and 15th)"),
            Self::Weekly { weekday } => write!(f, "Weekly on {}", weekday),
            Self::BiWeekly { weekday } => write!(f, "Bi-weekly on {}", weekday),
            Self::OneTime { date } => write!(f, "Once on {}", date.format(DATE_FORMAT)),
        }
    }
}

/// Validation errors for schedules
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleValidationError {
    DayOfMonthOutOfRange(u32),
}

impl fmt::Display for ScheduleValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DayOfMonthOutOfRange(day) => {
                write!(f, "Day of month must be between 1 and 31, got {}", day)
            }
        }
    }
}

impl std::error::Error for ScheduleValidationError {}
