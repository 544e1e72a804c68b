use std::io;

/// Errors that can occur during scenario-runner operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Scenario '{0}' not found in configuration")]
    ScenarioNotFound(String),

    #[error(
        "Deprecated lint configuration found: `{0}` is no longer accepted as a bare lint \
         command. Migrate the scenario's `lint` key to a full shell command (for example \
         \"{0} .\")"
    )]
    DeprecatedLintConfig(String),

    /// The lint command failed to spawn or exited non-zero. The detail is
    /// repeated on purpose: the message carries it as both summary and detail.
    #[error("Lint failed: {0}: {0}")]
    LintFailed(String),
}

/// Result type alias for scenario-runner operations
pub type Result<T> = std::result::Result<T, Error>;
