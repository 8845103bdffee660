//! Model -> cURL command

use crate::model::{Body, RequestModel};

/// Render the model as a single-line cURL command
///
/// Only a non-empty [`Body::Raw`] is emitted as `-d`; the other body modes
/// are left out of the command.
pub fn to_curl(model: &RequestModel) -> String {
    let mut parts = vec![
        "curl".to_string(),
        "-X".to_string(),
        model.method_upper(),
        shell_quote(&model.display_url()),
    ];

    for header in model.enabled_headers() {
        parts.push("-H".to_string());
        parts.push(shell_quote(&format!("{}: {}", header.key, header.value)));
    }

    if let Body::Raw { ref raw } = model.body {
        if !raw.is_empty() {
            parts.push("-d".to_string());
            parts.push(shell_quote(raw));
        }
    }

    if let Some(timeout) = model.timeout.filter(|t| *t > 0) {
        parts.push("--max-time".to_string());
        parts.push(format!("{}", timeout as f64 / 1000.0));
    }

    parts.join(" ")
}

/// Wrap in single quotes, closing and reopening around embedded ones
pub fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\"'\"'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FormField, Header, QueryParam};

    #[test]
    fn test_full_command() {
        let model = RequestModel::new("post", "https://api.example.com", "/users")
            .with_query(QueryParam::new("page", "2"))
            .with_header(Header::new("Content-Type", "text/plain"))
            .with_body(Body::raw("hello"))
            .with_timeout(30000);
        assert_eq!(
            to_curl(&model),
            "curl -X POST 'https://api.example.com/users?page=2' -H 'Content-Type: text/plain' -d 'hello' --max-time 30"
        );
    }

    #[test]
    fn test_fractional_timeout() {
        let model = RequestModel::new("GET", "https://example.com", "/").with_timeout(1500);
        assert!(to_curl(&model).ends_with("--max-time 1.5"));
    }

    #[test]
    fn test_no_timeout_no_body() {
        let model = RequestModel::new("GET", "https://example.com", "/");
        assert_eq!(to_curl(&model), "curl -X GET 'https://example.com/'");
    }

    #[test]
    fn test_disabled_entries_skipped() {
        let model = RequestModel::new("GET", "https://example.com", "/")
            .with_query(QueryParam::new("hidden", "1").disabled())
            .with_header(Header::new("X-Hidden", "1").disabled())
            .with_header(Header::new("", "no key"));
        let curl = to_curl(&model);
        assert!(!curl.contains("hidden"));
        assert!(!curl.contains("X-Hidden"));
        assert!(!curl.contains("no key"));
    }

    #[test]
    fn test_only_raw_bodies_are_emitted() {
        let base = RequestModel::new("POST", "https://example.com", "/");
        for body in [
            Body::json(r#"{"a":1}"#),
            Body::url_encoded(vec![FormField::text("a", "1")]),
            Body::form_data(vec![FormField::text("a", "1")]),
            Body::binary("/tmp/payload.bin"),
            Body::raw(""),
        ] {
            let curl = to_curl(&base.clone().with_body(body));
            assert!(!curl.contains(" -d "), "unexpected body flag in {}", curl);
        }
    }

    #[test]
    fn test_single_quotes_escaped() {
        let model = RequestModel::new("POST", "https://example.com", "/")
            .with_body(Body::raw("it's"));
        assert!(to_curl(&model).contains(r#"-d 'it'"'"'s'"#));
    }
}
