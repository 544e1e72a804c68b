use anyhow::Result;
use clap::Parser;

use scenario_runner::ScenarioRunnerCli;

fn main() -> Result<()> {
    // Initialize tracing based on RUST_LOG env var
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Fatal errors surface here as a single stderr message and a non-zero exit
    let cli = ScenarioRunnerCli::parse();
    cli.command.execute()
}
