//! Custom error types for the smoother
//!
//! This module defines the error hierarchy for the library using thiserror.
//! Insolvency is deliberately absent: an insolvent plan is an empty plan, not
//! an error.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{Account, Money, DATE_FORMAT};
use crate::services::Balances;

/// The main error type for smoother operations
#[derive(Error, Debug)]
pub enum SmootherError {
    /// A checking or savings balance dipped below zero during replay
    #[error(
        "Balance dipped below zero! {account} is {} on {}",
        overdrawn(.balances, .account),
        display_date(.date)
    )]
    NegativeBalance {
        date: NaiveDate,
        account: Account,
        balances: Balances,
    },

    /// Validation errors for caller input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl SmootherError {
    /// Check if this is a negative balance failure
    pub fn is_negative_balance(&self) -> bool {
        matches!(self, Self::NegativeBalance { .. })
    }

    /// Balances at the point of failure, if this is a replay failure
    pub fn balances(&self) -> Option<&Balances> {
        match self {
            Self::NegativeBalance { balances, .. } => Some(balances),
            _ => None,
        }
    }

    /// Create a validation error for a bad date
    pub fn invalid_date(input: &str) -> Self {
        Self::Validation(format!("Invalid date: '{}'. Use YYYY.MM.DD", input))
    }

    /// The overdrawn amount, if this is a replay failure
    pub fn shortfall(&self) -> Option<Money> {
        match self {
            Self::NegativeBalance { account, balances, .. } => Some(balances.get(*account)),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SmootherError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SmootherError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for SmootherError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

fn overdrawn(balances: &Balances, account: &Account) -> Money {
    balances.get(*account)
}

fn display_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Result type alias for smoother operations
pub type SmootherResult<T> = Result<T, SmootherError>;
