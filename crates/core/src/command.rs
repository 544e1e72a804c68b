//! Scenario command execution

use std::io;
use std::process::{Command, ExitStatus};

#[derive(Debug, Clone, PartialEq)]
pub enum CommandKind {
    /// Run the command string through the platform shell. Metacharacters are
    /// honored, so pipes and redirection in user-supplied commands work.
    Shell,
    /// Split the command string on whitespace and spawn it directly.
    Argv,
}

/// An external command bound to a scenario, carrying the full environment the
/// child process runs under.
#[derive(Debug, Clone)]
pub struct ScenarioCommand {
    pub kind: CommandKind,
    pub command: String,
    pub env: Vec<(String, String)>,
}

impl ScenarioCommand {
    pub fn new_shell(command: String) -> Self {
        Self {
            kind: CommandKind::Shell,
            command,
            env: Vec::new(),
        }
    }

    pub fn new_argv(command: String) -> Self {
        Self {
            kind: CommandKind::Argv,
            command,
            env: Vec::new(),
        }
    }

    pub fn with_env(mut self, key: String, value: String) -> Self {
        self.env.push((key, value));
        self
    }

    pub fn to_shell_command(&self) -> String {
        self.command.clone()
    }

    /// Run the command and block until it exits, with standard streams
    /// inherited from the parent.
    ///
    /// The child's environment is exactly `self.env`; the ambient environment
    /// is cleared first so callers control the full mapping.
    pub fn execute(&self) -> io::Result<ExitStatus> {
        let mut cmd = match self.kind {
            CommandKind::Shell => {
                #[cfg(unix)]
                let mut cmd = Command::new("sh");
                #[cfg(unix)]
                cmd.arg("-c").arg(&self.command);

                #[cfg(windows)]
                let mut cmd = Command::new("cmd");
                #[cfg(windows)]
                cmd.arg("/C").arg(&self.command);

                cmd
            }
            CommandKind::Argv => {
                let mut parts = self.command.split_whitespace();
                let program = parts.next().ok_or_else(|| {
                    io::Error::new(io::ErrorKind::InvalidInput, "No command specified")
                })?;

                let mut cmd = Command::new(program);
                cmd.args(parts);
                cmd
            }
        };

        cmd.env_clear();
        cmd.envs(self.env.iter().map(|(k, v)| (k.as_str(), v.as_str())));

        cmd.status()
    }
}
