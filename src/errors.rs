//! Error types for curlkit

use thiserror::Error;

/// Main error type for curlkit
#[derive(Error, Debug)]
pub enum CurlkitError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),
}

/// Failures crossing the conversion engine boundary
#[derive(Error, Debug)]
pub enum EngineError {
    /// The cURL command itself could not be understood
    #[error("invalid cURL command: {0}")]
    InvalidCommand(String),

    /// The engine has no generator for this target
    #[error("target '{0}' requires external engine")]
    Unsupported(String),

    /// The external engine process could not be run
    #[error("failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The external engine ran but reported a failure
    #[error("'{program}' exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("engine produced invalid output: {0}")]
    Output(String),
}

pub type Result<T> = std::result::Result<T, CurlkitError>;
