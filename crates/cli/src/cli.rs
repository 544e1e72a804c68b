use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::lint_command;

#[derive(Parser, Debug)]
#[command(name = "scenario-runner")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct ScenarioRunnerCli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the configured external linter for a scenario
    Lint {
        /// Name of the scenario to target
        #[arg(short = 's', long = "scenario-name", default_value = "default")]
        scenario_name: String,
    },
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Lint { scenario_name } => lint_command(&scenario_name),
        }
    }
}
