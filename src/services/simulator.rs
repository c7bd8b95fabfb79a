//! Ledger replay
//!
//! Replays a planned ledger day by day against the three accounts, failing on
//! the first transaction that leaves checking or savings negative, and
//! measures how much discretionary spending the plan actually delivered.

use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::error::{SmootherError, SmootherResult};
use crate::models::{Account, Ledger, Money, TransactionKind, DATE_FORMAT};

/// Receives progress lines from a replay
pub trait LineSink {
    /// Emit one line of output
    fn emit(&mut self, line: &str);
}

impl LineSink for Vec<String> {
    fn emit(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

/// Writes progress lines to standard output
#[derive(Debug, Default)]
pub struct StdoutSink;

impl LineSink for StdoutSink {
    fn emit(&mut self, line: &str) {
        println!("{}", line);
    }
}

/// Running balance per account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Balances {
    accounts: BTreeMap<Account, Money>,
}

impl Default for Balances {
    fn default() -> Self {
        Self::new()
    }
}

impl Balances {
    /// All accounts at zero
    pub fn new() -> Self {
        Self {
            accounts: Account::ALL.iter().map(|a| (*a, Money::zero())).collect(),
        }
    }

    /// Balance of an account
    pub fn get(&self, account: Account) -> Money {
        self.accounts.get(&account).copied().unwrap_or_default()
    }

    /// Move the magnitude of `delta` from one account to another
    pub fn apply(&mut self, from: Account, to: Account, delta: Money) {
        *self.accounts.entry(from).or_default() -= delta.abs();
        *self.accounts.entry(to).or_default() += delta.abs();
    }

    /// First account that must stay solvent but is negative
    pub fn first_overdrawn(&self) -> Option<Account> {
        Account::ALL
            .into_iter()
            .find(|a| a.must_stay_solvent() && self.get(*a).is_negative())
    }

    /// Check if every account is back at zero
    pub fn all_zero(&self) -> bool {
        self.accounts.values().all(Money::is_zero)
    }

    /// Accounts and balances, in display order
    pub fn iter(&self) -> impl Iterator<Item = (Account, Money)> + '_ {
        self.accounts.iter().map(|(a, m)| (*a, *m))
    }
}

/// Result of a successful replay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simulation {
    /// Final balances
    pub balances: Balances,
    /// Average simulated spending per day
    pub average_spending: Money,
    /// Number of days replayed
    pub days: i64,
    /// Total simulated spending across the window
    pub total_spending: Money,
}

impl Simulation {
    /// Realized average spending as a fraction of the ideal rate
    pub fn ratio_to(&self, ideal_daily: Money) -> Option<f64> {
        if ideal_daily.is_zero() {
            return None;
        }
        Some((self.average_spending.to_decimal() / ideal_daily.to_decimal()).abs())
    }
}

/// Replays ledgers against checking and savings
#[derive(Debug, Clone, Copy, Default)]
pub struct Simulator;

impl Simulator {
    /// Create a new simulator
    pub fn new() -> Self {
        Self
    }

    /// Replay `ledger` over the inclusive window `[from, to]`
    ///
    /// When a sink is supplied, a register-style trace of every transaction
    /// and the running checking/savings balances is emitted through it.
    pub fn simulate(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        ledger: &Ledger,
        mut sink: Option<&mut dyn LineSink>,
    ) -> SmootherResult<Simulation> {
        let mut balances = Balances::new();
        let mut total_spending = Money::zero();
        let mut days = 0_i64;

        if let Some(out) = sink.as_deref_mut() {
            out.emit(&format!(
                "{:<10} | {:<40} | {:<15} | {:>9} | {:>9}",
                "Date", "Transaction", "Amount(from Ck)", "Checking", "Savings"
            ));
            out.emit(&"-".repeat(95));
            out.emit(&format!(
                "{:>10} | {:<40} | {:<15} | {:>9} | {:>9}",
                from.format(DATE_FORMAT).to_string(),
                "<Initial balances>",
                "",
                balances.get(Account::Checking),
                balances.get(Account::Savings)
            ));
        }

        let mut current = from;
        while current <= to {
            let transactions = ledger.on(current);

            if transactions.is_empty() {
                if let Some(out) = sink.as_deref_mut() {
                    out.emit(&format!(
                        "{} | {:<40} | {:15} | {:>9} | {:>9}",
                        current.format(DATE_FORMAT),
                        "  (Nothing to spend)",
                        "",
                        balances.get(Account::Checking),
                        balances.get(Account::Savings)
                    ));
                }
            }

            for transaction in transactions {
                if transaction.kind == TransactionKind::SimulatedSpend {
                    total_spending += transaction.magnitude();
                }
                balances.apply(transaction.from, transaction.to, transaction.delta);

                if let Some(out) = sink.as_deref_mut() {
                    out.emit(&format!(
                        "{} | {:>9} | {:>9}",
                        transaction,
                        balances.get(Account::Checking),
                        balances.get(Account::Savings)
                    ));
                }

                if let Some(account) = balances.first_overdrawn() {
                    warn!(
                        date = %current,
                        account = %account,
                        balance = %balances.get(account),
                        memo = %transaction.memo,
                        "Balance dipped below zero"
                    );
                    return Err(SmootherError::NegativeBalance {
                        date: current,
                        account,
                        balances,
                    });
                }
            }

            days += 1;
            current += Duration::days(1);
        }

        let average_spending = total_spending
            .divide(days)
            .first()
            .unwrap_or_default()
            .abs();

        debug!(
            days,
            total_spending = %total_spending,
            average_spending = %average_spending,
            "Replay complete"
        );

        Ok(Simulation {
            balances,
            average_spending,
            days,
            total_spending,
        })
    }
}
