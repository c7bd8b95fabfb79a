//! Day-indexed ledger of planned transactions

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::transaction::Transaction;

/// Planned transactions keyed by day, in insertion order within a day
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    days: BTreeMap<NaiveDate, Vec<Transaction>>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transaction to its day
    pub fn push(&mut self, transaction: Transaction) {
        self.days
            .entry(transaction.date)
            .or_default()
            .push(transaction);
    }

    /// Transactions recorded on a day
    pub fn on(&self, date: NaiveDate) -> &[Transaction] {
        self.days.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Days with at least one transaction, ascending
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.keys().copied()
    }

    /// All transactions, by day then insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.days.values().flatten()
    }

    /// Number of transactions
    pub fn len(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    /// Check if nothing has been planned
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl Extend<Transaction> for Ledger {
    fn extend<I: IntoIterator<Item = Transaction>>(&mut self, iter: I) {
        for transaction in iter {
            self.push(transaction);
        }
    }
}
