//! Display formatting for terminal output
//!
//! Provides utilities for formatting scenarios, plans and replay results for
//! terminal display.

pub mod plan;
pub mod report;

pub use plan::{
    format_balances, format_plan_summary, format_scenario, format_scenario_list,
    format_spending_comparison,
};
