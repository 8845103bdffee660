//! Config file handling
//!
//! Read from `<config_dir>/curlkit/config.toml`. `CURLKIT_CONFIG_DIR`
//! replaces the directory.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::ValueEnum;
use tracing::debug;

use crate::engine::{AnyEngine, CommandEngine, NativeEngine, DEFAULT_COMMAND};
use crate::errors::{CurlkitError, Result};

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "CURLKIT_CONFIG_DIR";

/// Language used when none is given
pub const DEFAULT_LANGUAGE: &str = "python";

/// Which conversion engine to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum EngineKind {
    /// In-process parser and generators
    #[default]
    Native,
    /// External `curlconverter` process
    Command,
}

impl FromStr for EngineKind {
    type Err = CurlkitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "native" => Ok(EngineKind::Native),
            "command" => Ok(EngineKind::Command),
            other => Err(CurlkitError::Config(format!(
                "Unknown engine kind '{}' (expected 'native' or 'command')",
                other
            ))),
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EngineKind::Native => "native",
            EngineKind::Command => "command",
        })
    }
}

/// curlkit configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub config_dir: PathBuf,
    pub engine: EngineKind,
    /// Command line of the external engine, e.g. `npx curlconverter`
    pub engine_command: String,
    pub default_language: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::with_dir(Self::default_config_dir())
    }
}

impl Config {
    fn with_dir(config_dir: PathBuf) -> Self {
        Self {
            config_dir,
            engine: EngineKind::default(),
            engine_command: DEFAULT_COMMAND.to_string(),
            default_language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_config_dir())
    }

    /// Load `config.toml` from `config_dir`; a missing file yields defaults
    pub fn load_from(config_dir: &Path) -> Result<Self> {
        let config_file = config_dir.join("config.toml");
        if !config_file.exists() {
            debug!(path = %config_file.display(), "No config file, using defaults");
            return Ok(Self::with_dir(config_dir.to_path_buf()));
        }

        let content = std::fs::read_to_string(&config_file)
            .map_err(|e| CurlkitError::Config(format!("Failed to read config: {}", e)))?;
        Self::parse(config_dir, &content)
    }

    fn parse(config_dir: &Path, content: &str) -> Result<Self> {
        let toml_value: toml::Value = toml::from_str(content)
            .map_err(|e| CurlkitError::Config(format!("Invalid config TOML: {}", e)))?;

        let mut config = Self::with_dir(config_dir.to_path_buf());

        if let Some(kind) = toml_value
            .get("engine")
            .and_then(|e| e.get("kind"))
            .and_then(|v| v.as_str())
        {
            config.engine = kind.parse()?;
        }

        if let Some(command) = toml_value
            .get("engine")
            .and_then(|e| e.get("command"))
            .and_then(|v| v.as_str())
        {
            config.engine_command = command.to_string();
        }

        if let Some(language) = toml_value
            .get("codegen")
            .and_then(|c| c.get("default_language"))
            .and_then(|v| v.as_str())
        {
            config.default_language = language.to_lowercase();
        }

        Ok(config)
    }

    /// Get the default config directory
    pub fn default_config_dir() -> PathBuf {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return PathBuf::from(dir);
        }
        dirs::config_dir()
            .map(|p| p.join("curlkit"))
            .unwrap_or_else(|| PathBuf::from(".curlkit"))
    }

    /// Instantiate the configured engine
    pub fn build_engine(&self) -> Result<AnyEngine> {
        self.build_engine_of(self.engine)
    }

    /// Instantiate `kind`, taking its settings from this config
    pub fn build_engine_of(&self, kind: EngineKind) -> Result<AnyEngine> {
        Ok(match kind {
            EngineKind::Native => AnyEngine::Native(NativeEngine::new()),
            EngineKind::Command => AnyEngine::Command(CommandEngine::from_command_line(&self.engine_command)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(dir.path()).unwrap();
        assert_eq!(config.engine, EngineKind::Native);
        assert_eq!(config.engine_command, "curlconverter");
        assert_eq!(config.default_language, "python");
        assert_eq!(config.config_dir, dir.path());
    }

    #[test]
    fn test_full_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            "[engine]\nkind = \"command\"\ncommand = \"npx curlconverter\"\n\n[codegen]\ndefault_language = \"Go\"\n",
        )
        .unwrap();

        let config = Config::load_from(dir.path()).unwrap();
        assert_eq!(config.engine, EngineKind::Command);
        assert_eq!(config.engine_command, "npx curlconverter");
        assert_eq!(config.default_language, "go");

        match config.build_engine().unwrap() {
            AnyEngine::Command(engine) => assert_eq!(engine.program(), "npx"),
            other => panic!("unexpected engine {:?}", other),
        }
    }

    #[test]
    fn test_invalid_toml() {
        let err = Config::parse(Path::new("."), "[engine\nkind=").unwrap_err();
        assert!(matches!(err, CurlkitError::Config(_)));
    }

    #[test]
    fn test_unknown_engine_kind() {
        let err = Config::parse(Path::new("."), "[engine]\nkind = \"magic\"\n").unwrap_err();
        assert!(err.to_string().contains("magic"));
    }

    #[test]
    fn test_empty_command_rejected() {
        let mut config = Config::parse(Path::new("."), "").unwrap();
        config.engine_command = " ".to_string();
        assert!(config.build_engine_of(EngineKind::Command).is_err());
        assert!(config.build_engine_of(EngineKind::Native).is_ok());
    }
}
