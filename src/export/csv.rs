//! CSV export
//!
//! Writes a planned ledger as one row per transaction, in date order.

use serde::Serialize;
use std::io::Write;

use crate::error::SmootherResult;
use crate::models::{Ledger, Transaction, DATE_FORMAT};

/// Column header of the ledger CSV
pub const LEDGER_HEADER: [&str; 6] = ["Date", "Kind", "Memo", "From", "To", "Amount"];

#[derive(Debug, Serialize)]
struct LedgerRow<'a> {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Kind")]
    kind: String,
    #[serde(rename = "Memo")]
    memo: &'a str,
    #[serde(rename = "From")]
    from: String,
    #[serde(rename = "To")]
    to: String,
    #[serde(rename = "Amount")]
    amount: String,
}

impl<'a> From<&'a Transaction> for LedgerRow<'a> {
    fn from(txn: &'a Transaction) -> Self {
        Self {
            date: txn.date.format(DATE_FORMAT).to_string(),
            kind: txn.kind.to_string(),
            memo: txn.memo.trim(),
            from: txn.from.to_string(),
            to: txn.to.to_string(),
            amount: txn.magnitude().to_string(),
        }
    }
}

/// Export every transaction in `ledger` as CSV
pub fn export_ledger_csv<W: Write>(ledger: &Ledger, writer: W) -> SmootherResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    if ledger.is_empty() {
        csv_writer.write_record(LEDGER_HEADER)?;
    }
    for txn in ledger.iter() {
        csv_writer.serialize(LedgerRow::from(txn))?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2015, 8, d).unwrap()
    }

    #[test]
    fn test_export_ledger_csv() {
        let mut ledger = Ledger::new();
        ledger.push(Transaction::income(date(1), Money::from_cents(50000), "Philz"));
        ledger.push(Transaction::to_savings(date(1), Money::from_cents(37540)));
        ledger.push(Transaction::expense(date(25), Money::from_cents(4234), "Utilities, Inc"));

        let mut buf = Vec::new();
        export_ledger_csv(&ledger, &mut buf).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "Date,Kind,Memo,From,To,Amount");
        assert_eq!(lines[1], "2015.08.01,Income,Income: Philz,External,Checking,500.00");
        assert_eq!(
            lines[2],
            "2015.08.01,Savings Transfer,Transfer to Savings,Checking,Savings,375.40"
        );
        assert_eq!(
            lines[3],
            "2015.08.25,Expense,\"Expense: Utilities, Inc\",Checking,External,42.34"
        );
    }

    #[test]
    fn test_amounts_are_exact_cents() {
        let mut ledger = Ledger::new();
        ledger.push(Transaction::simulated_spend(date(3), Money::from_cents(2411)));
        ledger.push(Transaction::from_savings(date(6), Money::from_cents(-4928), "Transfer from Savings"));
        ledger.push(Transaction::income(date(7), Money::from_cents(123_456_789_012), "Windfall"));

        let mut buf = Vec::new();
        export_ledger_csv(&ledger, &mut buf).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let amounts: Vec<&str> = output
            .lines()
            .skip(1)
            .filter_map(|l| l.rsplit(',').next())
            .collect();

        assert_eq!(amounts, vec!["24.11", "49.28", "1234567890.12"]);
    }

    #[test]
    fn test_export_empty_ledger_has_header() {
        let mut buf = Vec::new();
        export_ledger_csv(&Ledger::new(), &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Date,Kind,Memo,From,To,Amount\n");
    }
}
