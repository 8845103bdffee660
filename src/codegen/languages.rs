//! Code generation language table

use indexmap::IndexMap;
use once_cell::sync::Lazy;

/// Metadata of a selectable language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// Key used to select the language
    pub key: &'static str,
    /// Conversion engine identifier
    pub engine_id: &'static str,
    pub label: &'static str,
    pub extension: &'static str,
}

const fn lang(key: &'static str, engine_id: &'static str, label: &'static str, extension: &'static str) -> Language {
    Language { key, engine_id, label, extension }
}

// `curl` and `shell` both go to the raw HTTP target; `typescript` has no
// engine target of its own.
static LANGUAGES: Lazy<IndexMap<&'static str, Language>> = Lazy::new(|| {
    [
        lang("javascript", "javascript", "JavaScript", "js"),
        lang("typescript", "typescript", "TypeScript", "ts"),
        lang("python", "python", "Python", "py"),
        lang("java", "java", "Java", "java"),
        lang("node", "node", "Node.js", "js"),
        lang("curl", "http", "cURL", "sh"),
        lang("php", "php", "PHP", "php"),
        lang("go", "go", "Go", "go"),
        lang("csharp", "csharp", "C#", "cs"),
        lang("ruby", "ruby", "Ruby", "rb"),
        lang("swift", "swift", "Swift", "swift"),
        lang("kotlin", "kotlin", "Kotlin", "kt"),
        lang("rust", "rust", "Rust", "rs"),
        lang("dart", "dart", "Dart", "dart"),
        lang("objective_c", "objc", "Objective-C", "m"),
        lang("shell", "http", "Shell", "sh"),
        lang("powershell", "powershell", "PowerShell", "ps1"),
        lang("matlab", "matlab", "MATLAB", "m"),
        lang("r", "r", "R", "r"),
        lang("ansible", "ansible", "Ansible", "yml"),
        lang("c", "c", "C", "c"),
        lang("cfml", "cfml", "CFML", "cfm"),
        lang("clojure", "clojure", "Clojure", "clj"),
        lang("elixir", "elixir", "Elixir", "ex"),
        lang("http", "http", "HTTP", "http"),
        lang("httpie", "httpie", "HTTPie", "http"),
        lang("julia", "julia", "Julia", "jl"),
        lang("lua", "lua", "Lua", "lua"),
        lang("ocaml", "ocaml", "OCaml", "ml"),
        lang("perl", "perl", "Perl", "pl"),
        lang("wget", "wget", "Wget", "sh"),
    ]
    .into_iter()
    .map(|l| (l.key, l))
    .collect()
});

/// Look up a language by key
pub fn language(key: &str) -> Option<&'static Language> {
    LANGUAGES.get(key)
}

/// Every selectable language, in display order
pub fn languages() -> impl Iterator<Item = &'static Language> {
    LANGUAGES.values()
}

/// Selectable language keys, in display order
pub fn supported_languages() -> Vec<&'static str> {
    LANGUAGES.keys().copied().collect()
}

/// Display label; unknown keys are returned as-is
pub fn language_label(key: &str) -> String {
    language(key).map_or_else(|| key.to_string(), |l| l.label.to_string())
}

/// File extension; `txt` for unknown keys
pub fn language_extension(key: &str) -> &'static str {
    language(key).map_or("txt", |l| l.extension)
}

/// Engine identifier for a key; unknown keys pass through
pub fn engine_id(key: &str) -> &str {
    language(key).map_or(key, |l| l.engine_id)
}
