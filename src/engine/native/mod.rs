//! In-process conversion engine
//!
//! Parses the cURL command itself and generates code for the targets it
//! has a generator for. The remaining targets report
//! [`EngineError::Unsupported`] and need the [`super::CommandEngine`].

pub mod generators;
pub mod snippet;

pub use snippet::{SnippetBody, SnippetRequest};

use tracing::debug;

use super::{ConversionEngine, Target};
use crate::curl::{parse_curl_command, to_har_request};
use crate::errors::EngineError;
use crate::har::{har_from_request, to_har_string};

/// Targets with a native generator
pub const NATIVE_TARGETS: [Target; 16] = [
    Target::Csharp,
    Target::Dart,
    Target::Go,
    Target::Http,
    Target::Httpie,
    Target::Java,
    Target::JavaScript,
    Target::Kotlin,
    Target::Node,
    Target::Php,
    Target::Powershell,
    Target::Python,
    Target::Ruby,
    Target::Rust,
    Target::Swift,
    Target::Wget,
];

#[derive(Debug, Clone, Copy, Default)]
pub struct NativeEngine;

impl NativeEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn supports(target: Target) -> bool {
        NATIVE_TARGETS.contains(&target)
    }

    fn har_string(curl: &str) -> Result<String, EngineError> {
        let parsed = parse_curl_command(curl)?;
        let request = to_har_request(&parsed)?;
        to_har_string(&har_from_request(request)).map_err(|e| EngineError::Output(e.to_string()))
    }

    fn generate(target: Target, curl: &str) -> Result<String, EngineError> {
        let parsed = parse_curl_command(curl)?;
        let request = SnippetRequest::from_parsed(&parsed)?;
        debug!(target = %target, method = %request.method, url = %request.url, "Generating snippet");

        match target {
            Target::Python => generators::python(&request),
            Target::JavaScript => generators::javascript(&request),
            Target::Node => generators::node(&request),
            Target::Go => generators::go(&request),
            Target::Java => generators::java(&request),
            Target::Php => generators::php(&request),
            Target::Rust => generators::rust(&request),
            Target::Ruby => generators::ruby(&request),
            Target::Csharp => generators::csharp(&request),
            Target::Http => generators::http(&request),
            Target::Httpie => generators::httpie(&request),
            Target::Wget => generators::wget(&request),
            Target::Powershell => generators::powershell(&request),
            Target::Kotlin => generators::kotlin(&request),
            Target::Swift => generators::swift(&request),
            Target::Dart => generators::dart(&request),
            other => Err(EngineError::Unsupported(other.id().to_string())),
        }
    }
}

impl ConversionEngine for NativeEngine {
    async fn to_har_string(&self, curl: &str) -> Result<String, EngineError> {
        Self::har_string(curl)
    }

    async fn convert(&self, target: Target, curl: &str) -> Result<String, EngineError> {
        Self::generate(target, curl)
    }
}
