//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the planner and simulator.

pub mod config;
pub mod plan;
pub mod scenario;

pub use config::handle_config_command;
pub use plan::{handle_plan_command, parse_date_arg, PlanArgs};
pub use scenario::{handle_scenario_command, ScenarioCommands};
