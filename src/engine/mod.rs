//! Conversion engine boundary
//!
//! The engine performs the two conversions the request core delegates:
//! cURL command -> HAR JSON, and cURL command -> client source code for a
//! [`Target`]. Only strings cross the boundary.
//!
//! - [`NativeEngine`] runs in-process and covers the common targets
//! - [`CommandEngine`] shells out to the `curlconverter` CLI and covers all
//!   of them
//! - [`AnyEngine`] picks one of the two at runtime (see [`crate::config`])

pub mod command;
pub mod native;

pub use command::{CommandEngine, DEFAULT_COMMAND};
pub use native::NativeEngine;

use std::fmt;
use std::future::Future;

use crate::errors::EngineError;

/// Languages the conversion engine can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Ansible,
    C,
    Cfml,
    Clojure,
    Csharp,
    Dart,
    Elixir,
    Go,
    Http,
    Httpie,
    Java,
    JavaScript,
    Julia,
    Kotlin,
    Lua,
    Matlab,
    Node,
    ObjectiveC,
    Ocaml,
    Perl,
    Php,
    Powershell,
    Python,
    R,
    Ruby,
    Rust,
    Swift,
    Wget,
}

impl Target {
    pub const ALL: [Target; 28] = [
        Target::Ansible,
        Target::C,
        Target::Cfml,
        Target::Clojure,
        Target::Csharp,
        Target::Dart,
        Target::Elixir,
        Target::Go,
        Target::Http,
        Target::Httpie,
        Target::Java,
        Target::JavaScript,
        Target::Julia,
        Target::Kotlin,
        Target::Lua,
        Target::Matlab,
        Target::Node,
        Target::ObjectiveC,
        Target::Ocaml,
        Target::Perl,
        Target::Php,
        Target::Powershell,
        Target::Python,
        Target::R,
        Target::Ruby,
        Target::Rust,
        Target::Swift,
        Target::Wget,
    ];

    /// Engine identifier of this target
    pub fn id(&self) -> &'static str {
        match self {
            Target::Ansible => "ansible",
            Target::C => "c",
            Target::Cfml => "cfml",
            Target::Clojure => "clojure",
            Target::Csharp => "csharp",
            Target::Dart => "dart",
            Target::Elixir => "elixir",
            Target::Go => "go",
            Target::Http => "http",
            Target::Httpie => "httpie",
            Target::Java => "java",
            Target::JavaScript => "javascript",
            Target::Julia => "julia",
            Target::Kotlin => "kotlin",
            Target::Lua => "lua",
            Target::Matlab => "matlab",
            Target::Node => "node",
            Target::ObjectiveC => "objc",
            Target::Ocaml => "ocaml",
            Target::Perl => "perl",
            Target::Php => "php",
            Target::Powershell => "powershell",
            Target::Python => "python",
            Target::R => "r",
            Target::Ruby => "ruby",
            Target::Rust => "rust",
            Target::Swift => "swift",
            Target::Wget => "wget",
        }
    }

    /// Resolve an engine identifier
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.id() == id)
    }

    /// Language name understood by the `curlconverter` CLI
    pub fn cli_language(&self) -> &'static str {
        match self {
            Target::Powershell => "powershell-webrequest",
            other => other.id(),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Translation backend for cURL commands
///
/// Conversion work is self-contained per call; implementations hold no
/// per-request state.
pub trait ConversionEngine: Send + Sync {
    /// Convert a cURL command into a HAR document (JSON text)
    fn to_har_string(&self, curl: &str) -> impl Future<Output = Result<String, EngineError>> + Send;

    /// Convert a cURL command into source code for `target`
    fn convert(&self, target: Target, curl: &str) -> impl Future<Output = Result<String, EngineError>> + Send;
}

/// Engine chosen at runtime
#[derive(Debug, Clone)]
pub enum AnyEngine {
    Native(NativeEngine),
    Command(CommandEngine),
}

impl ConversionEngine for AnyEngine {
    async fn to_har_string(&self, curl: &str) -> Result<String, EngineError> {
        match self {
            AnyEngine::Native(engine) => engine.to_har_string(curl).await,
            AnyEngine::Command(engine) => engine.to_har_string(curl).await,
        }
    }

    async fn convert(&self, target: Target, curl: &str) -> Result<String, EngineError> {
        match self {
            AnyEngine::Native(engine) => engine.convert(target, curl).await,
            AnyEngine::Command(engine) => engine.convert(target, curl).await,
        }
    }
}

impl<E: ConversionEngine> ConversionEngine for &E {
    fn to_har_string(&self, curl: &str) -> impl Future<Output = Result<String, EngineError>> + Send {
        (**self).to_har_string(curl)
    }

    fn convert(&self, target: Target, curl: &str) -> impl Future<Output = Result<String, EngineError>> + Send {
        (**self).convert(target, curl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_ids_roundtrip() {
        for target in Target::ALL {
            assert_eq!(Target::from_id(target.id()), Some(target));
        }
        assert_eq!(Target::from_id("typescript"), None);
        assert_eq!(Target::from_id("objc"), Some(Target::ObjectiveC));
    }

    #[test]
    fn test_cli_language() {
        assert_eq!(Target::Powershell.cli_language(), "powershell-webrequest");
        assert_eq!(Target::Node.cli_language(), "node");
    }
}
