//! Client code generation
//!
//! A model is first rendered as a cURL command, which the conversion
//! engine then translates into the requested language. Generation never
//! fails: engine errors come back as a comment line in place of code.

pub mod languages;

pub use languages::{language, language_extension, language_label, languages, supported_languages, Language};

use tracing::{debug, warn};

use crate::engine::{ConversionEngine, Target};
use crate::model::{Body, FormField, RequestModel};
use crate::serializer::shell_quote;

/// Generates client code for a model through a conversion engine
#[derive(Debug, Clone)]
pub struct CodeGenerator<E> {
    engine: E,
}

impl<E: ConversionEngine> CodeGenerator<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Source code for `model` in `language` (case-insensitive key)
    ///
    /// `curl` returns the built command without touching the engine.
    /// Keys without an engine target fall back to Python.
    pub async fn generate_code(&self, model: &RequestModel, language: &str) -> String {
        let curl = build_curl_command(model);
        debug!(command = %curl, "Built cURL command");

        let language = language.to_lowercase();
        if language == "curl" {
            return curl;
        }

        let target = Target::from_id(languages::engine_id(&language)).unwrap_or(Target::Python);
        debug!(language = %language, target = %target, "Generating code");

        match self.engine.convert(target, &curl).await {
            Ok(code) => code,
            Err(e) => {
                warn!(language = %language, error = %e, "Code generation failed");
                format!("// Error generating code: {}", e)
            }
        }
    }
}

/// cURL command fed to the conversion engine
///
/// `curl -X METHOD [-H "k: v"]... [body flag] '<url>'`
pub fn build_curl_command(model: &RequestModel) -> String {
    let mut curl = format!("curl -X {}", model.method_upper());

    for header in model.enabled_headers() {
        curl.push_str(&format!(" -H {}", double_quote(&format!("{}: {}", header.key, header.value))));
    }

    if let Some(flag) = body_flag(&model.body) {
        curl.push(' ');
        curl.push_str(&flag);
    }

    curl.push(' ');
    curl.push_str(&shell_quote(&model.display_url()));
    curl
}

fn body_flag(body: &Body) -> Option<String> {
    match body {
        Body::None => None,
        Body::Raw { raw: text } | Body::Json { json: text } => {
            (!text.is_empty()).then(|| format!("-d {}", shell_quote(text)))
        }
        // multipart fields cannot be expressed as data flags
        Body::FormData { formdata } => active(formdata)
            .next()
            .map(|_| "--data-urlencode \"data\"".to_string()),
        Body::UrlEncoded { urlencoded } => {
            let flags: Vec<String> = active(urlencoded)
                .map(|f| format!("--data-urlencode {}", double_quote(&format!("{}={}", f.key, f.value))))
                .collect();
            (!flags.is_empty()).then(|| flags.join(" "))
        }
        Body::Binary { binary } => {
            let path = binary.path.to_string_lossy();
            (!path.is_empty()).then(|| format!("--data-binary {}", double_quote(&format!("@{}", path))))
        }
    }
}

fn active(fields: &[FormField]) -> impl Iterator<Item = &FormField> {
    fields.iter().filter(|f| f.is_active())
}

/// Double-quoted shell word; escapes the characters special inside `"..."`
fn double_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if matches!(c, '"' | '\\' | '$' | '`') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}
