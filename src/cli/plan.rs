//! CLI handler for planning runs
//!
//! Plans a scenario, replays the plan and reports how close realized spending
//! came to the ideal rate.

use chrono::NaiveDate;
use clap::Args;
use std::path::PathBuf;
use tracing::warn;

use crate::config::paths::SmootherPaths;
use crate::config::settings::{ExportFormat, Settings};
use crate::display::{
    format_balances, format_plan_summary, format_scenario, format_spending_comparison,
};
use crate::error::{SmootherError, SmootherResult};
use crate::export::export_plan;
use crate::models::parse_date;
use crate::scenario::Scenario;
use crate::services::{LineSink, Planner, Simulation, Simulator};

/// Arguments for `smoother plan`
#[derive(Args, Debug, Default)]
pub struct PlanArgs {
    /// Built-in scenario name or path to a scenario JSON file
    #[arg(short, long)]
    pub scenario: Option<String>,

    /// First day of the window (YYYY.MM.DD)
    #[arg(long, value_parser = parse_date_arg)]
    pub from: Option<NaiveDate>,

    /// Last day of the window (YYYY.MM.DD)
    #[arg(long, value_parser = parse_date_arg)]
    pub to: Option<NaiveDate>,

    /// Print the day-by-day replay
    #[arg(short, long)]
    pub verbose: bool,

    /// Export the planned ledger
    #[arg(short, long, value_enum)]
    pub export: Option<ExportFormat>,

    /// Export destination (defaults to the export directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Parse a `YYYY.MM.DD` command line date
pub fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    parse_date(s).map_err(|_| SmootherError::invalid_date(s).to_string())
}

/// Handle `smoother plan`
///
/// Returns `Ok(None)` when the window is insolvent and nothing was replayed.
pub fn handle_plan_command(
    args: &PlanArgs,
    paths: &SmootherPaths,
    settings: &Settings,
    out: &mut dyn LineSink,
) -> SmootherResult<Option<Simulation>> {
    let name = args
        .scenario
        .clone()
        .unwrap_or_else(|| settings.default_scenario.clone());
    let scenario = Scenario::resolve(&name)?.with_window(args.from, args.to);
    scenario.validate()?;

    let (from, to) = (scenario.from, scenario.to);
    emit_block(out, &format_scenario(&scenario));
    out.emit("");

    let plan = Planner::new(&scenario.incomes, &scenario.expenses).plan(from, to);
    emit_block(out, &format_plan_summary(&plan, from, to));
    out.emit("");

    if plan.is_insolvent() {
        return Ok(None);
    }

    let verbose = args.verbose || settings.verbose;
    let replay = if verbose {
        let result = Simulator::new().simulate(from, to, &plan.ledger, Some(&mut *out));
        out.emit("");
        result
    } else {
        Simulator::new().simulate(from, to, &plan.ledger, None)
    };

    let simulation = match replay {
        Ok(simulation) => simulation,
        Err(err) => {
            out.emit(&err.to_string());
            if let Some(balances) = err.balances() {
                emit_block(out, &format_balances(balances));
            }
            return Err(err);
        }
    };

    emit_block(out, &format_balances(&simulation.balances));
    out.emit("");
    emit_block(out, &format_spending_comparison(plan.ideal_daily, &simulation));

    if let Some(ratio) = simulation.ratio_to(plan.ideal_daily) {
        if !settings.within_tolerance(ratio) {
            warn!(
                ratio,
                tolerance = settings.ratio_tolerance,
                "Realized spending drifted from the ideal rate"
            );
        }
    }

    if args.export.is_some() || args.output.is_some() {
        let format = args.export.unwrap_or(settings.export_format);
        let path = args.output.clone().unwrap_or_else(|| {
            paths
                .export_dir()
                .join(format!("{}.{}", file_stem(&scenario.name), format.extension()))
        });
        export_plan(&plan, from, to, format, &path)?;
        out.emit("");
        out.emit(&format!("Exported plan to {}", path.display()));
    }

    Ok(Some(simulation))
}

fn emit_block(out: &mut dyn LineSink, block: &str) {
    for line in block.lines() {
        out.emit(line);
    }
}

fn file_stem(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect()
}
