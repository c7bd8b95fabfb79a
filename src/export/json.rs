//! JSON export
//!
//! Writes a planned ledger with enough context to reproduce the run.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::SmootherResult;
use crate::models::{Money, Transaction};
use crate::services::Plan;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// A plan as written to disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// First day of the planned window
    pub from: NaiveDate,

    /// Last day of the planned window
    pub to: NaiveDate,

    /// Flat daily spending rate
    pub ideal_daily: Money,

    /// Income in the window
    pub total_income: Money,

    /// Expenses smoothed over the window
    pub total_expenses: Money,

    /// Every planned transaction, in date order
    pub transactions: Vec<Transaction>,
}

impl PlanExport {
    /// Snapshot a plan for export
    pub fn from_plan(plan: &Plan, from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            from,
            to,
            ideal_daily: plan.ideal_daily,
            total_income: plan.total_income,
            total_expenses: plan.total_expenses,
            transactions: plan.ledger.iter().cloned().collect(),
        }
    }
}

/// Export a plan as pretty-printed JSON
pub fn export_plan_json<W: Write>(
    plan: &Plan,
    from: NaiveDate,
    to: NaiveDate,
    writer: &mut W,
) -> SmootherResult<()> {
    let export = PlanExport::from_plan(plan, from, to);
    serde_json::to_writer_pretty(&mut *writer, &export)?;
    writeln!(writer)?;
    Ok(())
}
