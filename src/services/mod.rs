//! Service layer
//!
//! The service layer holds the planning logic: expanding schedules into
//! dates, building a smoothed ledger, and replaying it against the accounts.

pub mod occurrence;
pub mod planner;
pub mod simulator;

pub use occurrence::{find_occurrences, find_virtual_occurrences};
pub use planner::{days_in_window, Plan, Planner};
pub use simulator::{Balances, LineSink, Simulation, Simulator, StdoutSink};
