use anyhow::Result;
use clap::{Parser, Subcommand};

use smoother::cli::{
    handle_config_command, handle_plan_command, handle_scenario_command, PlanArgs,
    ScenarioCommands,
};
use smoother::config::{paths::SmootherPaths, settings::Settings};
use smoother::services::StdoutSink;

#[derive(Parser)]
#[command(
    name = "smoother",
    version,
    about = "Cash-flow smoothing planner",
    long_about = "Plans transfers between checking and savings so that daily \
                  discretionary spending stays flat across irregular income \
                  dates, then replays the plan to prove no account goes negative."
)]
struct Cli {
    /// Tracing filter for diagnostics on stderr (overrides the configured level)
    #[arg(long, global = true, env = "SMOOTHER_LOG")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan and replay a scenario
    Plan(PlanArgs),

    /// Inspect built-in scenarios
    #[command(alias = "scenario")]
    Scenarios {
        #[command(subcommand)]
        command: Option<ScenarioCommands>,
    },

    /// Show current configuration and paths
    Config {
        /// Write the current settings to disk
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = SmootherPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let level = cli.log_level.as_deref().unwrap_or(&settings.log_level);
    smoother::logging::init(level);

    let mut out = StdoutSink;

    match cli.command {
        Some(Commands::Plan(args)) => {
            handle_plan_command(&args, &paths, &settings, &mut out)?;
        }
        Some(Commands::Scenarios { command }) => {
            handle_scenario_command(command, &mut out)?;
        }
        Some(Commands::Config { init }) => {
            handle_config_command(&paths, &settings, init, &mut out)?;
        }
        None => {
            println!("Smoother - cash-flow smoothing planner");
            println!();
            println!("Run 'smoother --help' for usage information.");
            println!("Run 'smoother plan' to plan the default scenario.");
        }
    }

    Ok(())
}
