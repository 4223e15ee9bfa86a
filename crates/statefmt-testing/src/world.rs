//! TestWorld pattern for end-to-end CLI tests.
//!
//! Provides a fluent interface for:
//! - Creating an isolated temp directory
//! - Writing state, schema and config files into it
//! - Running the `statefmt` binary with an isolated config

use anyhow::Result;
use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use statefmt_testing::TestWorld;
///
/// let world = TestWorld::new()
///     .with_state(serde_json::json!({"modules": []}))
///     .with_schemas(serde_json::json!({"providers": {}}));
///
/// let result = world.run(&["show"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");

        Self {
            temp_dir,
            config_path,
        }
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn state_path(&self) -> PathBuf {
        self.temp_dir.path().join("state.json")
    }

    pub fn schemas_path(&self) -> PathBuf {
        self.temp_dir.path().join("schemas.json")
    }

    /// Write `state.json`.
    pub fn with_state(self, state: serde_json::Value) -> Self {
        self.write("state.json", &state.to_string())
    }

    /// Write `schemas.json`.
    pub fn with_schemas(self, schemas: serde_json::Value) -> Self {
        self.write("schemas.json", &schemas.to_string())
    }

    /// Write the config file the binary is pointed at.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(&self.config_path, toml).expect("Failed to write config");
        self
    }

    /// Write an arbitrary file relative to the temp root.
    pub fn write(self, name: &str, content: &str) -> Self {
        std::fs::write(self.temp_dir.path().join(name), content).expect("Failed to write file");
        self
    }

    /// Run `statefmt` with `--state` and `--schemas` pointing into the
    /// world, followed by `args`.
    ///
    /// Colors are off unless the args ask for them. The config file path
    /// is always set so a user config never leaks into tests.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("statefmt")
            .map_err(|e| anyhow::anyhow!("Failed to find statefmt binary: {}", e))?;

        cmd.current_dir(self.temp_dir.path())
            .env("STATEFMT_CONFIG", &self.config_path)
            .env("NO_COLOR", "1");

        let (command, rest) = match args.split_first() {
            Some((command, rest)) => (*command, rest),
            None => ("show", &[][..]),
        };
        cmd.arg(command)
            .arg("--state")
            .arg(self.state_path());
        if command == "show" {
            cmd.arg("--schemas").arg(self.schemas_path());
        }
        cmd.args(rest);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Get stdout as a string.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Get stderr as a string.
    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
