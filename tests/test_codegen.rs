//! Integration tests for client code generation

mod common;

use common::ScriptedEngine;
use curlkit::codegen::{build_curl_command, language_extension, language_label, supported_languages};
use curlkit::model::{Body, FormField, Header, QueryParam, RequestModel};
use curlkit::{parse_curl, AnyEngine, CodeGenerator, NativeEngine, Target};

fn sample_model() -> RequestModel {
    RequestModel::new("post", "https://api.example.com", "/v1/users")
        .with_query(QueryParam::new("notify", "true"))
        .with_query(QueryParam::new("hidden", "1").disabled())
        .with_header(Header::new("Content-Type", "application/json"))
        .with_header(Header::new("X-Disabled", "1").disabled())
        .with_body(Body::json(r#"{"name":"John"}"#))
}

#[tokio::test]
async fn test_curl_bypasses_engine() {
    let engine = ScriptedEngine::default();
    let generator = CodeGenerator::new(&engine);
    let model = sample_model();

    for language in ["curl", "cURL", "CURL"] {
        assert_eq!(generator.generate_code(&model, language).await, build_curl_command(&model));
    }
    assert_eq!(engine.calls(), 0);
}

#[tokio::test]
async fn test_language_mapping() {
    let engine = ScriptedEngine::default();
    let generator = CodeGenerator::new(&engine);
    let model = sample_model();

    let cases = [
        ("python", Target::Python),
        ("Go", Target::Go),
        ("shell", Target::Http),
        ("objective_c", Target::ObjectiveC),
        ("powershell", Target::Powershell),
        ("typescript", Target::Python),
        ("no-such-language", Target::Python),
        ("ocaml", Target::Ocaml),
    ];
    for (language, expected) in cases {
        let code = generator.generate_code(&model, language).await;
        assert_eq!(engine.last_target(), Some(expected), "language {}", language);
        assert!(code.starts_with(&format!("// {}", expected)));
    }
}

#[tokio::test]
async fn test_engine_receives_filtered_command() {
    let engine = ScriptedEngine::default();
    CodeGenerator::new(&engine).generate_code(&sample_model(), "java").await;

    let command = engine.last_command().unwrap();
    assert_eq!(
        command,
        r#"curl -X POST -H "Content-Type: application/json" -d '{"name":"John"}' 'https://api.example.com/v1/users?notify=true'"#
    );
    assert!(!command.contains("hidden"));
    assert!(!command.contains("X-Disabled"));
}

#[tokio::test]
async fn test_engine_error_becomes_comment() {
    let engine = ScriptedEngine::failing("converter crashed");
    let code = CodeGenerator::new(&engine).generate_code(&sample_model(), "python").await;
    assert!(code.starts_with("// Error generating code: "), "got {}", code);
    assert!(code.contains("converter crashed"));
}

#[tokio::test]
async fn test_native_engine_unsupported_target_is_comment() {
    let generator = CodeGenerator::new(AnyEngine::Native(NativeEngine::new()));
    let code = generator.generate_code(&sample_model(), "elixir").await;
    assert!(code.starts_with("// Error generating code: "));
    assert!(code.contains("requires external engine"));
}

#[tokio::test]
async fn test_native_python_generation() {
    let generator = CodeGenerator::new(NativeEngine::new());
    let code = generator.generate_code(&sample_model(), "python").await;
    assert!(code.contains("import requests"));
    assert!(code.contains("https://api.example.com/v1/users?notify=true"));
    assert!(!code.contains("X-Disabled"));
}

#[tokio::test]
async fn test_urlencoded_body_survives_generation() {
    let model = RequestModel::new("POST", "https://example.com", "/login")
        .with_header(Header::new("Content-Type", "application/x-www-form-urlencoded"))
        .with_body(Body::url_encoded(vec![
            FormField::text("user", "alice"),
            FormField::text("skip", "x").disabled(),
            FormField::text("pass", "a b"),
        ]));

    // the generated command parses back to the same fields
    let command = build_curl_command(&model);
    let parsed = parse_curl(&NativeEngine::new(), &command).await.unwrap();
    assert_eq!(
        parsed.body,
        Body::url_encoded(vec![FormField::text("user", "alice"), FormField::text("pass", "a b")])
    );
}

#[test]
fn test_language_metadata() {
    let languages = supported_languages();
    assert_eq!(languages.len(), 31);
    assert!(languages.contains(&"objective_c"));
    assert_eq!(language_label("node"), "Node.js");
    assert_eq!(language_label("klingon"), "klingon");
    assert_eq!(language_extension("powershell"), "ps1");
    assert_eq!(language_extension("klingon"), "txt");
}
