//! scenario-runner - drives test scenarios and the external tooling configured for them
//!
//! This crate provides functionality to:
//! - Load scenario configuration from a project-local JSON file
//! - Compose the effective environment a scenario's commands run under
//! - Execute a scenario's external lint command and classify the outcome

pub mod command;
pub mod config;
pub mod environment;
pub mod error;
pub mod lint;

// Re-export commonly used types
pub use error::{Error, Result};

// Re-export main API components
pub use command::{CommandKind, ScenarioCommand};
pub use config::{Config, Scenario};
pub use environment::effective_environment;
pub use lint::{DEPRECATED_LINT_COMMAND, LintRunner};
