//! Scheduled income and expense models
//!
//! Both are caller-supplied, read-only inputs to a planning run.

use serde::{Deserialize, Serialize};

use super::money::Money;
use super::schedule::{Schedule, ScheduleValidationError};

/// Validation errors for incomes and expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CashFlowValidationError {
    EmptyName,
    NegativeAmount,
    Schedule(ScheduleValidationError),
}

impl std::fmt::Display for CashFlowValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::NegativeAmount => write!(f, "Amount cannot be negative"),
            Self::Schedule(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CashFlowValidationError {}

fn validate(name: &str, amount: Money, schedule: &Schedule) -> Result<(), CashFlowValidationError> {
    if name.trim().is_empty() {
        return Err(CashFlowValidationError::EmptyName);
    }
    if amount.is_negative() {
        return Err(CashFlowValidationError::NegativeAmount);
    }
    schedule.validate().map_err(CashFlowValidationError::Schedule)
}

/// A recurring or one-time source of money
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Income {
    pub name: String,
    pub amount: Money,
    pub schedule: Schedule,
}

impl Income {
    /// Create a new income
    pub fn new(name: impl Into<String>, amount: Money, schedule: Schedule) -> Self {
        Self {
            name: name.into(),
            amount,
            schedule,
        }
    }

    /// Validate the income
    pub fn validate(&self) -> Result<(), CashFlowValidationError> {
        validate(&self.name, self.amount, &self.schedule)
    }
}

/// A recurring or one-time obligation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub name: String,
    pub amount: Money,
    pub schedule: Schedule,
}

impl Expense {
    /// Create a new expense
    pub fn new(name: impl Into<String>, amount: Money, schedule: Schedule) -> Self {
        Self {
            name: name.into(),
            amount,
            schedule,
        }
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), CashFlowValidationError> {
        validate(&self.name, self.amount, &self.schedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn test_new_income() {
        let income = Income::new("Philz", Money::from_decimal(500.0), Schedule::bi_monthly());
        assert_eq!(income.name, "Philz");
        assert_eq!(income.amount.cents(), 50000);
        assert!(income.validate().is_ok());
    }

    #[test]
    fn test_validation_negative_amount() {
        let expense = Expense::new("Rent", Money::from_cents(-100), Schedule::monthly(28));
        assert_eq!(expense.validate(), Err(CashFlowValidationError::NegativeAmount));
    }

    #[test]
    fn test_validation_empty_name() {
        let income = Income::new("  ", Money::from_cents(100), Schedule::weekly(Weekday::Fri));
        assert_eq!(income.validate(), Err(CashFlowValidationError::EmptyName));
    }

    #[test]
    fn test_validation_schedule() {
        let expense = Expense::new("Rent", Money::from_cents(100), Schedule::monthly(40));
        assert!(matches!(
            expense.validate(),
            Err(CashFlowValidationError::Schedule(_))
        ));
    }
}
