//! Schedule expansion
//!
//! Turns a [`Schedule`] into the concrete dates it fires on inside an
//! inclusive window, and expands expenses into the "virtual" occurrences the
//! planner smooths against.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::BTreeMap;

use crate::models::{Expense, Money, Schedule};

/// Dates on which `schedule` fires within `[from, to]`, ascending and unique
pub fn find_occurrences(schedule: &Schedule, from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
    if from > to {
        return Vec::new();
    }

    match *schedule {
        Schedule::Monthly { day_of_month } => monthly(day_of_month, from, to),
        Schedule::BiMonthly => {
            let mut dates = monthly(1, from, to);
            dates.extend(monthly(15, from, to));
            dates.sort_unstable();
            dates.dedup();
            dates
        }
        Schedule::Weekly { weekday } => every(first_weekday_on_or_after(weekday, from), 7, to),
        Schedule::BiWeekly { weekday } => every(first_weekday_on_or_after(weekday, from), 14, to),
        Schedule::OneTime { date } => {
            if date >= from && date <= to {
                vec![date]
            } else {
                Vec::new()
            }
        }
    }
}

/// Dates and amounts the planner should set money aside for
///
/// A one-time expense is spread backward over weekly pseudo-periods starting
/// at `from` and ending at its due date, so savings build up gradually. Every
/// other schedule yields its real occurrences at the full amount.
pub fn find_virtual_occurrences(
    expense: &Expense,
    from: NaiveDate,
    to: NaiveDate,
) -> BTreeMap<NaiveDate, Money> {
    match expense.schedule {
        Schedule::OneTime { date } => {
            if date < from || date > to {
                return BTreeMap::new();
            }
            let dates = every(from, 7, date);
            let parts = expense.amount.divide(dates.len() as i64);
            dates.into_iter().zip(parts.into_parts()).collect()
        }
        _ => find_occurrences(&expense.schedule, from, to)
            .into_iter()
            .map(|date| (date, expense.amount))
            .collect(),
    }
}

/// Number of days in the given month
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = next_month(year, month);
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}

fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// `day` in the given month, clamped to the month's last day
fn clamped_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let day = day.clamp(1, days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day)
}

fn monthly(day_of_month: u32, from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let (mut year, mut month) = (from.year(), from.month());

    while let Some(candidate) = clamped_date(year, month, day_of_month) {
        if candidate > to {
            break;
        }
        if candidate >= from {
            dates.push(candidate);
        }
        (year, month) = next_month(year, month);
    }

    dates
}

fn first_weekday_on_or_after(weekday: Weekday, from: NaiveDate) -> NaiveDate {
    let ahead = (7 + weekday.num_days_from_monday() - from.weekday().num_days_from_monday()) % 7;
    from + Duration::days(ahead as i64)
}

fn every(start: NaiveDate, step_days: i64, to: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut current = start;
    while current <= to {
        dates.push(current);
        current += Duration::days(step_days);
    }
    dates
}
