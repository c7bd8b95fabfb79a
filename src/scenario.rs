//! Planning scenarios
//!
//! A scenario bundles a window with the incomes and expenses to plan across
//! it. A few built-in scenarios ship with the binary; others can be loaded
//! from JSON files.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{SmootherError, SmootherResult};
use crate::models::{Expense, Income, Money, Schedule};

/// Names of the built-in scenarios, in listing order
pub const BUILTIN_SCENARIOS: [&str; 3] = ["basic", "one-time", "insolvent"];

/// Incomes and expenses planned over a window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub from: NaiveDate,
    pub to: NaiveDate,
    #[serde(default)]
    pub incomes: Vec<Income>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl Scenario {
    /// Look up a built-in scenario by name
    pub fn builtin(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "basic" => Some(basic()),
            "one-time" | "onetime" => Some(one_time()),
            "insolvent" => Some(insolvent()),
            _ => None,
        }
    }

    /// All built-in scenarios
    pub fn builtins() -> Vec<Self> {
        BUILTIN_SCENARIOS
            .iter()
            .filter_map(|name| Self::builtin(name))
            .collect()
    }

    /// Load a scenario from a JSON file
    pub fn load(path: &Path) -> SmootherResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            SmootherError::Io(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let scenario: Scenario = serde_json::from_str(&contents)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Resolve a scenario argument: a built-in name, or a path to a JSON file
    pub fn resolve(name_or_path: &str) -> SmootherResult<Self> {
        if let Some(scenario) = Self::builtin(name_or_path) {
            return Ok(scenario);
        }

        let path = Path::new(name_or_path);
        if path.exists() {
            return Self::load(path);
        }

        Err(SmootherError::Validation(format!(
            "Unknown scenario '{}'. Built-in scenarios: {}",
            name_or_path,
            BUILTIN_SCENARIOS.join(", ")
        )))
    }

    /// Replace the window, keeping the cash flows
    pub fn with_window(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        if let Some(from) = from {
            self.from = from;
        }
        if let Some(to) = to {
            self.to = to;
        }
        self
    }

    /// Validate the window and every cash flow
    pub fn validate(&self) -> SmootherResult<()> {
        if self.from > self.to {
            return Err(SmootherError::Validation(format!(
                "Window starts after it ends: {} > {}",
                self.from, self.to
            )));
        }

        for income in &self.incomes {
            income.validate().map_err(|e| {
                SmootherError::Validation(format!("Income '{}': {}", income.name, e))
            })?;
        }
        for expense in &self.expenses {
            expense.validate().map_err(|e| {
                SmootherError::Validation(format!("Expense '{}': {}", expense.name, e))
            })?;
        }

        Ok(())
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn paychecks() -> Vec<Income> {
    vec![
        Income::new("Philz", Money::from_decimal(500.0), Schedule::bi_monthly()),
        Income::new(
            "Mission Cliffs",
            Money::from_decimal(175.0),
            Schedule::bi_weekly(Weekday::Thu),
        ),
    ]
}

fn basic() -> Scenario {
    Scenario {
        name: "basic".into(),
        description: "Two jobs, rent, utilities and a weekly gym class over August 2015".into(),
        from: date(2015, 8, 1),
        to: date(2015, 8, 31),
        incomes: paychecks(),
        expenses: vec![
            Expense::new("Utilities", Money::from_decimal(42.34), Schedule::monthly(25)),
            Expense::new("Rent", Money::from_decimal(400.0), Schedule::monthly(28)),
            Expense::new("Crossfit", Money::from_decimal(40.0), Schedule::weekly(Weekday::Tue)),
        ],
    }
}

fn one_time() -> Scenario {
    Scenario {
        name: "one-time".into(),
        description: "Saving toward a Christmas vacation from August through December 2015"
            .into(),
        from: date(2015, 8, 1),
        to: date(2015, 12, 31),
        incomes: paychecks(),
        expenses: vec![
            Expense::new("Utilities", Money::from_decimal(42.34), Schedule::monthly(25)),
            Expense::new("Rent", Money::from_decimal(400.0), Schedule::monthly(28)),
            Expense::new(
                "Vacation",
                Money::from_decimal(600.0),
                Schedule::one_time(date(2015, 12, 25)),
            ),
        ],
    }
}

fn insolvent() -> Scenario {
    Scenario {
        name: "insolvent".into(),
        description: "Rent larger than a single job can cover".into(),
        from: date(2015, 8, 1),
        to: date(2015, 8, 31),
        incomes: vec![Income::new(
            "Philz",
            Money::from_decimal(500.0),
            Schedule::bi_monthly(),
        )],
        expenses: vec![
            Expense::new("Utilities", Money::from_decimal(42.34), Schedule::monthly(25)),
            Expense::new("Rent", Money::from_decimal(1200.0), Schedule::monthly(28)),
            Expense::new("Crossfit", Money::from_decimal(40.0), Schedule::weekly(Weekday::Tue)),
        ],
    }
}
