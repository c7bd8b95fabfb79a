//! Cash-flow smoother
//!
//! Plans savings sweeps so that daily discretionary spending stays roughly
//! flat between irregular income dates, then replays the plan against a
//! checking and a savings account to prove neither ever goes negative.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Money, schedules, accounts, transactions and the ledger
//! - `services`: Schedule expansion, the smoothing planner and the replay simulator
//! - `scenario`: Built-in and file-based planning scenarios
//! - `display`: Terminal formatting of plans and results
//! - `export`: Ledger export to CSV and JSON
//! - `config`: Configuration and path management
//! - `cli`: Command handlers for the binary
//! - `logging`: Tracing subscriber setup
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust
//! use chrono::{NaiveDate, Weekday};
//! use smoother::models::{Expense, Income, Money, Schedule};
//! use smoother::services::{Planner, Simulator};
//!
//! let from = NaiveDate::from_ymd_opt(2015, 8, 1).unwrap();
//! let to = NaiveDate::from_ymd_opt(2015, 8, 31).unwrap();
//! let incomes = vec![Income::new("Job", Money::from_decimal(500.0), Schedule::bi_monthly())];
//! let expenses = vec![Expense::new("Gym", Money::from_decimal(40.0), Schedule::weekly(Weekday::Tue))];
//!
//! let plan = Planner::new(&incomes, &expenses).plan(from, to);
//! let simulation = Simulator::new().simulate(from, to, &plan.ledger, None).unwrap();
//! assert!(simulation.balances.all_zero());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod scenario;
pub mod services;

pub use error::{SmootherError, SmootherResult};
