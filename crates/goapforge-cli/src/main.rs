//! CLI binary for GoapForge: run planning requests stored as JSON files.

mod input;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use goapforge::{
    are_goals_satisfied, console, enabled_transitions, generate_plan, generate_plan_isolated,
    operator_catalogue, single_step, PlannerConfig,
};
use tracing::level_filters::LevelFilter;

use crate::input::{print_json, read_json};

#[derive(Parser)]
#[command(name = "goapforge", version, about = "Goal-oriented action planner")]
struct Cli {
    /// Planner configuration file (TOML or YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log planner progress to stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for a plan; prints the plan, or null when the goal is unreachable
    Plan {
        /// Planning request (`-` reads stdin)
        request: PathBuf,

        /// Restrict the search to one behavior, overriding the request
        #[arg(short, long)]
        behavior: Option<String>,

        /// Override the configured iteration limit
        #[arg(long)]
        iteration_limit: Option<u64>,

        /// Run the search on a separate worker thread
        #[arg(long)]
        isolated: bool,

        /// Cancel an isolated search after this many milliseconds
        #[arg(long, requires = "isolated")]
        deadline_ms: Option<u64>,
    },

    /// Apply one transition; prints the resulting state, or null when not enabled
    Step {
        /// Single-step request (`-` reads stdin)
        request: PathBuf,
    },

    /// List the transitions enabled in a state
    Enabled {
        /// Enabled-transitions request (`-` reads stdin)
        request: PathBuf,
    },

    /// Check whether a state satisfies a goal
    Satisfied {
        /// Goal-check request (`-` reads stdin)
        request: PathBuf,
    },

    /// List the comparison and assignment operators of every type
    Operators,
}

fn load_config(path: Option<&Path>) -> Result<PlannerConfig> {
    match path {
        Some(path) => PlannerConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(PlannerConfig::default()),
    }
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.verbose > 0 {
        console::init_with_level(log_level(cli.verbose));
    }

    match cli.command {
        Commands::Plan {
            request,
            behavior,
            iteration_limit,
            isolated,
            deadline_ms,
        } => {
            let mut config = load_config(cli.config.as_deref())?;
            if let Some(limit) = iteration_limit {
                config = config.with_iteration_limit(limit);
                config.validate()?;
            }
            let mut request: goapforge::PlanningRequest = read_json(&request)?;
            if behavior.is_some() {
                request.behavior = behavior;
            }

            let plan = if isolated {
                let deadline = deadline_ms.map(Duration::from_millis);
                generate_plan_isolated(&request, &config, deadline)?
            } else {
                generate_plan(&request, &config)?
            };
            print_json(&plan, cli.pretty)
        }
        Commands::Step { request } => {
            let state = single_step(&read_json(&request)?)?;
            print_json(&state, cli.pretty)
        }
        Commands::Enabled { request } => {
            let enabled = enabled_transitions(&read_json(&request)?)?;
            print_json(&enabled, cli.pretty)
        }
        Commands::Satisfied { request } => {
            let satisfied = are_goals_satisfied(&read_json(&request)?)?;
            print_json(&satisfied, cli.pretty)
        }
        Commands::Operators => print_json(&operator_catalogue(), cli.pretty),
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
