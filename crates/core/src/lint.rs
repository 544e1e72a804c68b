//! The `lint` action: runs a scenario's configured external linter

use tracing::info;

use crate::command::ScenarioCommand;
use crate::config::Scenario;
use crate::environment::effective_environment;
use crate::error::{Error, Result};

/// Bare linter name accepted by the old configuration schema. Rejected with a
/// migration error before anything is spawned.
pub const DEPRECATED_LINT_COMMAND: &str = "yamllint";

/// Executes the external lint command configured for one scenario.
///
/// Linters are not bundled; whatever command the scenario configures must be
/// installed and reachable on the effective `PATH`.
pub struct LintRunner {
    scenario: Scenario,
}

impl LintRunner {
    pub fn new(scenario: Scenario) -> Self {
        Self { scenario }
    }

    /// Run the scenario's lint command, if any, and block until it exits.
    ///
    /// An empty `lint` value disables linting. The legacy bare
    /// [`DEPRECATED_LINT_COMMAND`] value is rejected without spawning anything.
    /// Every spawn/wait error and every non-zero exit is normalized to
    /// [`Error::LintFailed`]; nothing else escapes.
    pub fn execute(&self) -> Result<()> {
        info!("Scenario: '{}', action: 'lint'", self.scenario.name);

        let cmd = self.scenario.lint.as_str();
        if cmd.is_empty() {
            info!("Lint is disabled.");
            return Ok(());
        }

        if cmd == DEPRECATED_LINT_COMMAND {
            return Err(Error::DeprecatedLintConfig(cmd.to_string()));
        }

        let mut command = if self.scenario.via_shell {
            ScenarioCommand::new_shell(cmd.to_string())
        } else {
            ScenarioCommand::new_argv(cmd.to_string())
        };
        for (key, value) in effective_environment(&self.scenario.env) {
            command = command.with_env(key, value);
        }

        info!("Executing: {}", cmd);
        match command.execute() {
            Ok(status) if status.success() => Ok(()),
            Ok(status) => {
                let detail = match status.code() {
                    Some(code) => {
                        format!("Command '{cmd}' returned non-zero exit status {code}.")
                    }
                    None => format!("Command '{cmd}' was terminated by a signal."),
                };
                Err(Error::LintFailed(detail))
            }
            Err(e) => Err(Error::LintFailed(e.to_string())),
        }
    }
}
