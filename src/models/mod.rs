//! Core data models
//!
//! This module contains the data structures that describe a smoothing run:
//! money, schedules, the incomes and expenses they drive, and the ledger of
//! planned transactions between accounts.

pub mod account;
pub mod cashflow;
pub mod ledger;
pub mod money;
pub mod schedule;
pub mod transaction;

pub use account::Account;
pub use cashflow::{CashFlowValidationError, Expense, Income};
pub use ledger::Ledger;
pub use money::{Division, Money};
pub use schedule::{Period, Schedule, ScheduleValidationError};
pub use transaction::{Transaction, TransactionKind, SIMULATED_SPENDING_MEMO};

use chrono::NaiveDate;

/// Date literal format used for input and display
pub const DATE_FORMAT: &str = "%Y.%m.%d";

/// Parse a `YYYY.MM.DD` date literal
pub fn parse_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
}
