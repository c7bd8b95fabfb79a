//! CLI handlers for scenario inspection

use clap::Subcommand;

use crate::display::{format_scenario, format_scenario_list};
use crate::error::SmootherResult;
use crate::scenario::Scenario;
use crate::services::LineSink;

/// Scenario subcommands
#[derive(Subcommand, Debug)]
pub enum ScenarioCommands {
    /// List built-in scenarios
    List,

    /// Show the incomes and expenses of a scenario
    Show {
        /// Built-in scenario name or path to a scenario JSON file
        name: String,
    },
}

/// Handle `smoother scenarios`
pub fn handle_scenario_command(
    cmd: Option<ScenarioCommands>,
    out: &mut dyn LineSink,
) -> SmootherResult<()> {
    let text = match cmd.unwrap_or(ScenarioCommands::List) {
        ScenarioCommands::List => format_scenario_list(&Scenario::builtins()),
        ScenarioCommands::Show { name } => format_scenario(&Scenario::resolve(&name)?),
    };

    for line in text.lines() {
        out.emit(line);
    }
    Ok(())
}
