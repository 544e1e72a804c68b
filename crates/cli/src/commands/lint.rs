use anyhow::{Context, Result};
use tracing::debug;

use scenario_runner_core::{Config, Error, LintRunner};

pub fn lint_command(scenario_name: &str) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let config_path = Config::find_config_file(&cwd).with_context(|| {
        format!(
            "No scenario-runner configuration found searching upward from {}",
            cwd.display()
        )
    })?;

    debug!("Loading configuration from {:?}", config_path);
    let config = Config::load_from_file(&config_path)?;

    let scenario = config
        .scenario(scenario_name)
        .ok_or_else(|| Error::ScenarioNotFound(scenario_name.to_string()))?
        .clone();

    let runner = LintRunner::new(scenario);
    runner.execute()?;

    Ok(())
}
