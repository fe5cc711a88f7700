/// External command execution with captured output
use std::ffi::OsStr;
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;
use tracing::debug;

use crate::error::InvocationError;

/// Result from command execution with captured output
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub status: ExitStatus,
}

impl CommandOutput {
    /// Create from tokio Command output
    fn from_output(output: std::process::Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            status: output.status,
        }
    }

    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Stdout followed by stderr
    pub fn combined(&self) -> String {
        let mut combined = String::with_capacity(self.stdout.len() + self.stderr.len());
        combined.push_str(&self.stdout);
        combined.push_str(&self.stderr);
        combined
    }
}

/// Builder for executing external commands with common patterns
pub struct CommandBuilder {
    command: Command,
    program: String,
}

impl CommandBuilder {
    /// Create a new command builder
    pub fn new<S: AsRef<OsStr>>(program: S) -> Self {
        let program_name = program.as_ref().to_string_lossy().into_owned();
        let mut command = Command::new(program);
        command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        Self {
            command,
            program: program_name,
        }
    }

    /// Add multiple arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.command.args(args);
        self
    }

    /// Set an environment variable
    pub fn env<K, V>(mut self, key: K, val: V) -> Self
    where
        K: AsRef<OsStr>,
        V: AsRef<OsStr>,
    {
        self.command.env(key, val);
        self
    }

    /// Set KUBECONFIG environment variable
    pub fn kubeconfig(self, path: &Path) -> Self {
        self.env("KUBECONFIG", path)
    }

    /// Execute and return raw output
    pub async fn output(mut self) -> Result<CommandOutput, InvocationError> {
        debug!("Running {:?}", self.command.as_std());
        let output = self
            .command
            .output()
            .await
            .map_err(|source| InvocationError::Spawn {
                program: self.program.clone(),
                source,
            })?;
        Ok(CommandOutput::from_output(output))
    }

    /// Execute and return combined output on success, error on failure
    pub async fn run_combined(self) -> Result<String, InvocationError> {
        let program = self.program.clone();
        let output = self.output().await?;
        if output.success() {
            Ok(output.combined())
        } else {
            Err(InvocationError::Exit {
                program,
                status: output.status,
                output: output.combined(),
            })
        }
    }
}
