//! Ledger export
//!
//! Provides plan export in two formats:
//! - CSV: one row per planned transaction (spreadsheet-compatible)
//! - JSON: the full plan with window, rates and transactions

pub mod csv;
pub mod json;

pub use self::csv::{export_ledger_csv, LEDGER_HEADER};
pub use self::json::{export_plan_json, PlanExport, EXPORT_SCHEMA_VERSION};

use chrono::NaiveDate;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::config::settings::ExportFormat;
use crate::error::{SmootherError, SmootherResult};
use crate::services::Plan;

/// Write `plan` to `path` in the given format
pub fn export_plan(
    plan: &Plan,
    from: NaiveDate,
    to: NaiveDate,
    format: ExportFormat,
    path: &Path,
) -> SmootherResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            SmootherError::Export(format!("Failed to create {}: {}", parent.display(), e))
        })?;
    }

    let file = File::create(path)
        .map_err(|e| SmootherError::Export(format!("Failed to create {}: {}", path.display(), e)))?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => export_ledger_csv(&plan.ledger, &mut writer)?,
        ExportFormat::Json => export_plan_json(plan, from, to, &mut writer)?,
    }
    writer.flush()?;

    info!(path = %path.display(), transactions = plan.ledger.len(), "Plan exported");
    Ok(())
}
