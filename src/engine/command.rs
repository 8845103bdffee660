//! External `curlconverter` engine
//!
//! Runs `curlconverter --language <lang> -` with the cURL command on stdin
//! and returns its stdout. The command line may carry leading arguments,
//! e.g. `npx curlconverter`.

use std::io::ErrorKind;
use std::process::Stdio;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use super::{ConversionEngine, Target};
use crate::curl::tokenize;
use crate::errors::EngineError;

/// Default program name of the external engine
pub const DEFAULT_COMMAND: &str = "curlconverter";

#[derive(Debug, Clone)]
pub struct CommandEngine {
    program: String,
    args: Vec<String>,
}

impl Default for CommandEngine {
    fn default() -> Self {
        Self::new(DEFAULT_COMMAND)
    }
}

impl CommandEngine {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into(), args: Vec::new() }
    }

    /// Arguments placed before `--language`
    pub fn with_args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Build from a shell-style command line such as `npx curlconverter`
    pub fn from_command_line(line: &str) -> Result<Self, EngineError> {
        let mut words = tokenize(line)?.into_iter();
        let program = words
            .next()
            .ok_or_else(|| EngineError::InvalidCommand("empty engine command".to_string()))?;
        Ok(Self::new(program).with_args(words))
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn spawn_error(&self, source: std::io::Error) -> EngineError {
        EngineError::Spawn { program: self.program.clone(), source }
    }

    async fn run(&self, language: &str, curl: &str) -> Result<String, EngineError> {
        debug!(program = %self.program, language, "Running external conversion engine");

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg("--language")
            .arg(language)
            .arg("-")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| self.spawn_error(e))?;

        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(curl.as_bytes()).await {
                // the engine may exit without reading; its status tells why
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {}
                Err(e) => return Err(self.spawn_error(e)),
                Ok(()) => {}
            }
            // EOF for the engine
            drop(stdin);
        }

        let output = child.wait_with_output().await.map_err(|e| self.spawn_error(e))?;

        if !output.status.success() {
            return Err(EngineError::Failed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|e| EngineError::Output(e.to_string()))
    }
}

impl ConversionEngine for CommandEngine {
    async fn to_har_string(&self, curl: &str) -> Result<String, EngineError> {
        self.run("har", curl).await
    }

    async fn convert(&self, target: Target, curl: &str) -> Result<String, EngineError> {
        self.run(target.cli_language(), curl).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_command_line() {
        let engine = CommandEngine::from_command_line("npx --yes curlconverter").unwrap();
        assert_eq!(engine.program(), "npx");
        assert_eq!(engine.args, vec!["--yes", "curlconverter"]);
        assert!(CommandEngine::from_command_line("   ").is_err());
    }

    #[tokio::test]
    async fn test_missing_program_is_spawn_error() {
        let engine = CommandEngine::new("curlkit-test-no-such-program");
        let err = engine.convert(Target::Python, "curl https://example.com").await.unwrap_err();
        assert!(matches!(err, EngineError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_stdout_is_returned() {
        // $1 is --language, $2 the language
        let engine = CommandEngine::new("sh").with_args(["-c", "echo \"lang=$2\"; cat", "sh"]);
        let out = engine.convert(Target::Powershell, "curl https://example.com").await.unwrap();
        assert_eq!(out, "lang=powershell-webrequest\ncurl https://example.com");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failure_status() {
        let engine = CommandEngine::new("sh").with_args(["-c", "echo boom >&2; exit 3", "sh"]);
        let err = engine.to_har_string("curl https://example.com").await.unwrap_err();
        match err {
            EngineError::Failed { stderr, .. } => assert_eq!(stderr, "boom"),
            other => panic!("unexpected error {:?}", other),
        }
    }
}
