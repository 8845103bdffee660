//! Conversion of a parsed cURL command into a HAR request
//!
//! Mirrors what a browser would record for the command. `-d` data without
//! an explicit `Content-Type` header only sets `postData.mimeType`; no
//! header is added, so a command regenerated from the model parses back to
//! the same header list. `-F` forms get a `multipart/form-data` header when
//! none is given.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use url::Url;

use super::command::ParsedCurl;
use crate::errors::EngineError;
use crate::har::{HarCookie, HarHeader, HarPostData, HarPostParam, HarQueryParam, HarRequest};

const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
const MULTIPART: &str = "multipart/form-data";
const JSON: &str = "application/json";

/// Build the HAR request for a parsed command
pub fn to_har_request(parsed: &ParsedCurl) -> Result<HarRequest, EngineError> {
    let raw_url = parsed
        .url
        .as_deref()
        .ok_or_else(|| EngineError::InvalidCommand("no URL specified".to_string()))?;
    let mut url = normalize_url(raw_url);

    let mut headers: Vec<HarHeader> = parsed
        .headers
        .iter()
        .map(|(name, value)| HarHeader { name: name.clone(), value: value.clone() })
        .collect();

    let has_header = |headers: &[HarHeader], name: &str| {
        headers.iter().any(|h| h.name.eq_ignore_ascii_case(name))
    };

    if let Some(ref ua) = parsed.user_agent {
        if !has_header(&headers, "User-Agent") {
            headers.push(HarHeader { name: "User-Agent".to_string(), value: ua.clone() });
        }
    }
    if let Some(ref referer) = parsed.referer {
        if !has_header(&headers, "Referer") {
            headers.push(HarHeader { name: "Referer".to_string(), value: referer.clone() });
        }
    }
    if parsed.has_json_flag() {
        if !has_header(&headers, "Content-Type") {
            headers.push(HarHeader { name: "Content-Type".to_string(), value: JSON.to_string() });
        }
        if !has_header(&headers, "Accept") {
            headers.push(HarHeader { name: "Accept".to_string(), value: JSON.to_string() });
        }
    }
    if let Some(ref user) = parsed.user {
        if !has_header(&headers, "Authorization") {
            let credentials = if user.contains(':') { user.clone() } else { format!("{}:", user) };
            headers.push(HarHeader {
                name: "Authorization".to_string(),
                value: format!("Basic {}", STANDARD.encode(credentials)),
            });
        }
    }
    if !parsed.form_fields.is_empty() && !has_header(&headers, "Content-Type") {
        headers.push(HarHeader { name: "Content-Type".to_string(), value: MULTIPART.to_string() });
    }

    let mut post_data = None;
    if !parsed.form_fields.is_empty() {
        let params = parsed
            .form_fields
            .iter()
            .map(|field| {
                let mut param = if field.is_file {
                    HarPostParam::file(&field.name, file_name(&field.value))
                } else {
                    HarPostParam::text(&field.name, &field.value)
                };
                param.content_type = field.content_type.clone();
                param
            })
            .collect();
        post_data = Some(HarPostData {
            mime_type: MULTIPART.to_string(),
            text: None,
            params: Some(params),
        });
    } else if let Some(text) = parsed.data_text() {
        if parsed.get {
            // -G moves the data into the query string
            url = append_query(&url, &text);
        } else {
            let mime_type = headers
                .iter()
                .find(|h| h.name.eq_ignore_ascii_case("Content-Type"))
                .map(|h| h.value.clone())
                .unwrap_or_else(|| FORM_URLENCODED.to_string());
            let params = if mime_type.contains(FORM_URLENCODED) {
                Some(
                    url::form_urlencoded::parse(text.as_bytes())
                        .map(|(name, value)| HarPostParam::text(name, value))
                        .collect(),
                )
            } else {
                None
            };
            post_data = Some(HarPostData { mime_type, text: Some(text), params });
        }
    }

    let cookies = parsed
        .cookie
        .as_deref()
        .map(parse_cookie_string)
        .unwrap_or_default();

    let query_string = Url::parse(&url)
        .map(|u| {
            u.query_pairs()
                .map(|(name, value)| HarQueryParam { name: name.into_owned(), value: value.into_owned() })
                .collect()
        })
        .unwrap_or_default();

    let body_size = post_data
        .as_ref()
        .and_then(|p| p.text.as_ref())
        .map(|t| t.len() as i64)
        .unwrap_or(0);

    Ok(HarRequest {
        method: parsed.effective_method(),
        url,
        http_version: "HTTP/1.1".to_string(),
        cookies,
        headers,
        query_string,
        post_data,
        headers_size: -1,
        body_size,
    })
}

/// Add `http://` when the URL has no scheme, as curl does
fn normalize_url(raw: &str) -> String {
    if raw.contains("://") {
        raw.to_string()
    } else {
        format!("http://{}", raw)
    }
}

fn append_query(url: &str, query: &str) -> String {
    if query.is_empty() {
        return url.to_string();
    }
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}{}", url, separator, query)
}

fn file_name(path: &str) -> String {
    std::path::Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

/// Split `a=1; b=2` into cookies
fn parse_cookie_string(cookie: &str) -> Vec<HarCookie> {
    cookie
        .split(';')
        .filter_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            if name.trim().is_empty() {
                return None;
            }
            Some(HarCookie { name: name.trim().to_string(), value: value.trim().to_string() })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curl::parse_curl_command;

    fn har(cmd: &str) -> HarRequest {
        to_har_request(&parse_curl_command(cmd).unwrap()).unwrap()
    }

    #[test]
    fn test_json_post() {
        let request = har(
            r#"curl -X POST -H "Content-Type: application/json" -d '{"a":1}' 'https://api.example.com/v1/items?x=1'"#,
        );
        assert_eq!(request.method, "POST");
        assert_eq!(request.query_string, vec![HarQueryParam { name: "x".into(), value: "1".into() }]);
        let post = request.post_data.unwrap();
        assert_eq!(post.mime_type, "application/json");
        assert_eq!(post.text.as_deref(), Some(r#"{"a":1}"#));
        assert!(post.params.is_none());
    }

    #[test]
    fn test_data_without_content_type_adds_no_header() {
        let request = har("curl -d 'a=1&b=x%20y' https://example.com");
        assert!(request.headers.is_empty());
        let post = request.post_data.unwrap();
        assert_eq!(post.mime_type, FORM_URLENCODED);
        let params = post.params.unwrap();
        assert_eq!(params[1], HarPostParam::text("b", "x y"));
    }

    #[test]
    fn test_multipart() {
        let request = har("curl -F name=John -F file=@/tmp/report.pdf https://example.com/upload");
        assert_eq!(request.get_header("content-type"), Some(MULTIPART));
        let params = request.post_data.unwrap().params.unwrap();
        assert_eq!(params[0], HarPostParam::text("name", "John"));
        assert_eq!(params[1].file_name.as_deref(), Some("report.pdf"));
        assert!(params[1].value.is_none());
    }

    #[test]
    fn test_cookies_and_user() {
        let request = har("curl -b 'session=abc; theme=dark' -u user:pass https://example.com");
        assert_eq!(request.cookies.len(), 2);
        assert_eq!(request.cookies[1].name, "theme");
        assert!(request.get_header("cookie").is_none());
        assert_eq!(request.get_header("authorization"), Some("Basic dXNlcjpwYXNz"));
    }

    #[test]
    fn test_get_moves_data_to_query() {
        let request = har("curl -G -d q=rust -d page=2 https://example.com/search");
        assert_eq!(request.method, "GET");
        assert_eq!(request.url, "https://example.com/search?q=rust&page=2");
        assert_eq!(request.query_string.len(), 2);
        assert!(request.post_data.is_none());
    }

    #[test]
    fn test_scheme_is_added() {
        let request = har("curl example.com/ping");
        assert_eq!(request.url, "http://example.com/ping");
    }

    #[test]
    fn test_json_flag() {
        let request = har(r#"curl --json '{"k":"v"}' https://example.com"#);
        assert_eq!(request.method, "POST");
        assert_eq!(request.get_header("content-type"), Some(JSON));
        assert_eq!(request.get_header("accept"), Some(JSON));
    }

    #[test]
    fn test_missing_url() {
        let parsed = parse_curl_command("curl -X GET").unwrap();
        assert!(matches!(to_har_request(&parsed), Err(EngineError::InvalidCommand(_))));
    }
}
