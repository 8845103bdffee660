//! Common test utilities for curlkit integration tests
//!
//! - Scripted conversion engines for the library tests
//! - CLI invocation helpers with an isolated config directory

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use assert_cmd::Command;
use curlkit::{ConversionEngine, EngineError, Target};
use tempfile::TempDir;

/// HAR document holding one request with the given JSON body
pub fn har_with_request(request: serde_json::Value) -> String {
    serde_json::json!({
        "log": {
            "version": "1.2",
            "creator": { "name": "test", "version": "0" },
            "entries": [ { "request": request } ]
        }
    })
    .to_string()
}

/// Engine returning canned output and recording what it was asked
#[derive(Default)]
pub struct ScriptedEngine {
    pub har: Option<String>,
    pub failure: Option<String>,
    pub calls: AtomicUsize,
    pub targets: Mutex<Vec<Target>>,
    pub commands: Mutex<Vec<String>>,
}

impl ScriptedEngine {
    pub fn with_har(har: impl Into<String>) -> Self {
        Self { har: Some(har.into()), ..Default::default() }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self { failure: Some(message.into()), ..Default::default() }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_target(&self) -> Option<Target> {
        self.targets.lock().unwrap().last().copied()
    }

    pub fn last_command(&self) -> Option<String> {
        self.commands.lock().unwrap().last().cloned()
    }

    fn record(&self, curl: &str) -> Result<(), EngineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.commands.lock().unwrap().push(curl.to_string());
        match self.failure {
            Some(ref message) => Err(EngineError::Output(message.clone())),
            None => Ok(()),
        }
    }
}

impl ConversionEngine for ScriptedEngine {
    async fn to_har_string(&self, curl: &str) -> Result<String, EngineError> {
        self.record(curl)?;
        Ok(self.har.clone().unwrap_or_default())
    }

    async fn convert(&self, target: Target, curl: &str) -> Result<String, EngineError> {
        self.record(curl)?;
        self.targets.lock().unwrap().push(target);
        Ok(format!("// {}\n{}", target, curl))
    }
}

/// Isolated environment for running the CLI
pub struct MockEnvironment {
    /// Temporary config directory
    pub config_dir: TempDir,
}

impl Default for MockEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl MockEnvironment {
    pub fn new() -> Self {
        let config_dir = TempDir::new().expect("Failed to create temp config dir");
        Self { config_dir }
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_dir.path().to_path_buf()
    }

    /// Write `config.toml` into the config directory
    pub fn write_config(&self, content: &str) -> &Self {
        std::fs::write(self.config_dir.path().join("config.toml"), content)
            .expect("Failed to write config");
        self
    }

    /// Write a file into the config directory and return its path
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.config_dir.path().join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// The curlkit binary, configured to use this environment
    pub fn curlkit(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_curlkit"));
        cmd.env("CURLKIT_CONFIG_DIR", self.config_path());
        cmd.env_remove("CURLKIT_ENGINE");
        cmd.env_remove("RUST_LOG");
        cmd
    }
}
