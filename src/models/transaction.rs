//! Transaction model
//!
//! A transaction moves a magnitude of money from one [`Account`] to another on
//! a given day. Direction is carried by `from`/`to`, never by the sign of the
//! delta, and the [`TransactionKind`] records why the transaction exists.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::account::Account;
use super::money::Money;
use super::DATE_FORMAT;

/// Display memo used for modeled discretionary spending
pub const SIMULATED_SPENDING_MEMO: &str = "  -Simulated Spending-";

/// Why a transaction was planned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Income arriving in checking
    Income,
    /// A scheduled expense paid out of checking
    Expense,
    /// Modeled discretionary consumption between income dates
    SimulatedSpend,
    /// Smoothing sweep from checking into savings
    SavingsTransfer,
    /// Savings drawn back into checking (smoothing or expense funding)
    SavingsDraw,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
            Self::SimulatedSpend => write!(f, "Simulated Spending"),
            Self::SavingsTransfer => write!(f, "Savings Transfer"),
            Self::SavingsDraw => write!(f, "Savings Draw"),
        }
    }
}

/// A planned movement of money between two accounts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Day the transaction applies to
    pub date: NaiveDate,

    /// Amount moved; only the magnitude is applied
    pub delta: Money,

    /// Display text
    #[serde(default)]
    pub memo: String,

    /// Account debited
    pub from: Account,

    /// Account credited
    pub to: Account,

    /// Category set when the transaction is planned
    pub kind: TransactionKind,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        kind: TransactionKind,
        date: NaiveDate,
        delta: Money,
        from: Account,
        to: Account,
        memo: impl Into<String>,
    ) -> Self {
        Self {
            date,
            delta,
            memo: memo.into(),
            from,
            to,
            kind,
        }
    }

    /// Income deposited into checking
    pub fn income(date: NaiveDate, amount: Money, name: &str) -> Self {
        Self::new(
            TransactionKind::Income,
            date,
            amount,
            Account::External,
            Account::Checking,
            format!("Income: {}", name),
        )
    }

    /// Expense paid out of checking
    pub fn expense(date: NaiveDate, amount: Money, name: &str) -> Self {
        Self::new(
            TransactionKind::Expense,
            date,
            amount,
            Account::Checking,
            Account::External,
            format!("Expense: {}", name),
        )
    }

    /// One day of modeled discretionary spending
    pub fn simulated_spend(date: NaiveDate, amount: Money) -> Self {
        Self::new(
            TransactionKind::SimulatedSpend,
            date,
            amount,
            Account::Checking,
            Account::External,
            SIMULATED_SPENDING_MEMO,
        )
    }

    /// Sweep from checking into savings
    pub fn to_savings(date: NaiveDate, amount: Money) -> Self {
        Self::new(
            TransactionKind::SavingsTransfer,
            date,
            amount,
            Account::Checking,
            Account::Savings,
            "Transfer to Savings",
        )
    }

    /// Draw from savings back into checking
    pub fn from_savings(date: NaiveDate, amount: Money, memo: impl Into<String>) -> Self {
        Self::new(
            TransactionKind::SavingsDraw,
            date,
            amount,
            Account::Savings,
            Account::Checking,
            memo,
        )
    }

    /// The magnitude applied to both accounts
    pub fn magnitude(&self) -> Money {
        self.delta.abs()
    }

    /// Amount as seen from checking: inflows positive, outflows negative
    pub fn signed_delta(&self) -> Money {
        if self.from == Account::Checking {
            -self.magnitude()
        } else {
            self.magnitude()
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {:<40} | {:>15}",
            self.date.format(DATE_FORMAT),
            self.memo,
            self.signed_delta()
        )
    }
}
