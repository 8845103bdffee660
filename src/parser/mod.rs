//! cURL command -> [`RequestModel`]
//!
//! The command is handed to the conversion engine, which returns a HAR
//! document; the first entry's request becomes the model. Only an empty
//! (or unreadable) HAR aborts the parse. Everything below that degrades:
//! a URL that does not parse keeps its raw text in `path`, undecodable
//! basic credentials leave `auth` empty.

pub mod auth;

pub use auth::detect_auth;

use tracing::{debug, warn};
use url::Url;

use crate::engine::ConversionEngine;
use crate::errors::{CurlkitError, Result};
use crate::har::{parse_har, HarPostData, HarRequest};
use crate::model::{Body, FormField, Header, QueryParam, RequestModel, DEFAULT_TIMEOUT_MS};

/// Parse a cURL command into a request model
pub async fn parse_curl<E: ConversionEngine>(engine: &E, curl_command: &str) -> Result<RequestModel> {
    let har_text = engine.to_har_string(curl_command).await.map_err(|e| {
        warn!(error = %e, "Conversion engine rejected cURL command");
        CurlkitError::Parse(format!("cannot parse cURL: {}", e))
    })?;

    let har = parse_har(&har_text)
        .map_err(|e| CurlkitError::Parse(format!("cannot parse cURL: invalid HAR: {}", e)))?;

    let entry = har
        .log
        .entries
        .into_iter()
        .next()
        .ok_or_else(|| CurlkitError::Parse("cannot parse cURL".to_string()))?;

    Ok(request_to_model(&entry.request))
}

/// Build a model from a HAR request
pub fn request_to_model(request: &HarRequest) -> RequestModel {
    debug!(url = %request.url, "HAR request URL");

    let parsed_url = Url::parse(&request.url);
    let (base_url, path) = match parsed_url {
        Ok(ref url) => split_url(url),
        Err(ref e) => {
            warn!(url = %request.url, error = %e, "Unparseable request URL, keeping it as path");
            let path = request.url.split('?').next().unwrap_or_default().to_string();
            (String::new(), path)
        }
    };

    let query: Vec<QueryParam> = if !request.query_string.is_empty() {
        request
            .query_string
            .iter()
            .map(|p| QueryParam::new(&p.name, &p.value))
            .collect()
    } else {
        parsed_url
            .as_ref()
            .map(|url| {
                url.query_pairs()
                    .map(|(key, value)| QueryParam::new(key, value))
                    .collect()
            })
            .unwrap_or_default()
    };

    let mut headers = Vec::with_capacity(request.headers.len() + 1);
    if let Some(cookie) = request.cookie_header() {
        headers.push(Header::new("Cookie", cookie));
    }
    headers.extend(request.headers.iter().map(|h| Header::new(&h.name, &h.value)));
    debug!(?headers, "Parsed headers");

    let content_type = headers
        .iter()
        .find(|h| h.key.eq_ignore_ascii_case("content-type"))
        .map(|h| h.value.as_str());
    let body = match request.post_data {
        Some(ref post_data) => body_from_post_data(content_type, post_data),
        None => Body::None,
    };

    let auth = detect_auth(&headers);
    let method = if request.method.is_empty() { "GET".to_string() } else { request.method.clone() };

    RequestModel {
        method,
        base_url,
        path,
        query,
        headers,
        body,
        auth,
        timeout: Some(DEFAULT_TIMEOUT_MS),
    }
}

/// `scheme://host[:port]` and the pathname
fn split_url(url: &Url) -> (String, String) {
    let mut base = format!("{}://", url.scheme());
    if let Some(host) = url.host_str() {
        base.push_str(host);
    }
    if let Some(port) = url.port() {
        base.push_str(&format!(":{}", port));
    }
    (base, url.path().to_string())
}

/// Pick the body variant from the request's `Content-Type`
fn body_from_post_data(content_type: Option<&str>, post_data: &HarPostData) -> Body {
    let text = || post_data.text.clone().unwrap_or_default();
    let params = post_data.params.as_deref().unwrap_or_default();

    match content_type {
        Some(ct) if ct.contains("application/json") => Body::json(text()),
        Some(ct) if ct.contains("application/x-www-form-urlencoded") => Body::url_encoded(
            params
                .iter()
                .map(|p| FormField::text(&p.name, p.value.clone().unwrap_or_default()))
                .collect(),
        ),
        Some(ct) if ct.contains("multipart/form-data") => Body::form_data(
            params
                .iter()
                .map(|p| match p.file_name {
                    Some(ref file_name) => FormField::file(
                        &p.name,
                        p.value.clone().filter(|v| !v.is_empty()).unwrap_or_else(|| file_name.clone()),
                    ),
                    None => FormField::text(&p.name, p.value.clone().unwrap_or_default()),
                })
                .collect(),
        ),
        _ => Body::raw(text()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::har::{HarCookie, HarHeader, HarPostParam, HarQueryParam};
    use crate::model::{Auth, FieldType};

    fn request(url: &str) -> HarRequest {
        HarRequest { method: "POST".into(), url: url.into(), ..Default::default() }
    }

    fn with_content_type(mut req: HarRequest, ct: &str, post: HarPostData) -> HarRequest {
        req.headers.push(HarHeader { name: "Content-Type".into(), value: ct.into() });
        req.post_data = Some(post);
        req
    }

    #[test]
    fn test_split_url_with_port() {
        let model = request_to_model(&request("http://localhost:8080/api/v1?x=1"));
        assert_eq!(model.base_url, "http://localhost:8080");
        assert_eq!(model.path, "/api/v1");
        assert_eq!(model.query, vec![QueryParam::new("x", "1")]);
        assert_eq!(model.timeout, Some(30000));
    }

    #[test]
    fn test_har_query_string_preferred() {
        let mut req = request("https://example.com/?from=url");
        req.query_string = vec![HarQueryParam { name: "from".into(), value: "har".into() }];
        let model = request_to_model(&req);
        assert_eq!(model.query, vec![QueryParam::new("from", "har")]);
    }

    #[test]
    fn test_cookie_header_leads() {
        let mut req = request("https://example.com/");
        req.cookies = vec![
            HarCookie { name: "a".into(), value: "1".into() },
            HarCookie { name: "b".into(), value: "2".into() },
        ];
        req.headers = vec![HarHeader { name: "Cookie".into(), value: "c=3".into() }];
        let model = request_to_model(&req);
        assert_eq!(model.headers, vec![Header::new("Cookie", "a=1; b=2"), Header::new("Cookie", "c=3")]);
    }

    #[test]
    fn test_json_dispatch() {
        let req = with_content_type(
            request("https://example.com/"),
            "application/json; charset=utf-8",
            HarPostData { mime_type: "application/json".into(), text: Some("{}".into()), params: None },
        );
        assert_eq!(request_to_model(&req).body, Body::json("{}"));
    }

    #[test]
    fn test_json_without_text_is_empty() {
        let req = with_content_type(
            request("https://example.com/"),
            "application/json",
            HarPostData { mime_type: "application/json".into(), text: None, params: None },
        );
        assert_eq!(request_to_model(&req).body, Body::json(""));
    }

    #[test]
    fn test_urlencoded_dispatch() {
        let req = with_content_type(
            request("https://example.com/"),
            "application/x-www-form-urlencoded",
            HarPostData {
                mime_type: "application/x-www-form-urlencoded".into(),
                text: Some("a=1&b=2".into()),
                params: Some(vec![HarPostParam::text("a", "1"), HarPostParam::text("b", "2")]),
            },
        );
        assert_eq!(
            request_to_model(&req).body,
            Body::url_encoded(vec![FormField::text("a", "1"), FormField::text("b", "2")])
        );
    }

    #[test]
    fn test_multipart_typing_follows_file_name() {
        let req = with_content_type(
            request("https://example.com/"),
            "multipart/form-data; boundary=x",
            HarPostData {
                mime_type: "multipart/form-data".into(),
                text: None,
                params: Some(vec![HarPostParam::text("name", "John"), HarPostParam::file("doc", "cv.pdf")]),
            },
        );
        match request_to_model(&req).body {
            Body::FormData { formdata } => {
                assert_eq!(formdata[0].field_type, FieldType::Text);
                assert_eq!(formdata[0].value, "John");
                assert_eq!(formdata[1].field_type, FieldType::File);
                assert_eq!(formdata[1].value, "cv.pdf");
            }
            other => panic!("unexpected body {:?}", other),
        }
    }

    #[test]
    fn test_multipart_empty_file_value_uses_file_name() {
        let req = with_content_type(
            request("https://example.com/"),
            "multipart/form-data",
            HarPostData {
                mime_type: "multipart/form-data".into(),
                text: None,
                params: Some(vec![HarPostParam {
                    name: "doc".into(),
                    value: Some(String::new()),
                    file_name: Some("cv.pdf".into()),
                    content_type: None,
                }]),
            },
        );
        assert_eq!(request_to_model(&req).body, Body::form_data(vec![FormField::file("doc", "cv.pdf")]));
    }

    #[test]
    fn test_unknown_content_type_is_raw() {
        let mut req = request("https://example.com/");
        req.post_data = Some(HarPostData {
            mime_type: "application/x-www-form-urlencoded".into(),
            text: Some("hello".into()),
            params: None,
        });
        assert_eq!(request_to_model(&req).body, Body::raw("hello"));
    }

    #[test]
    fn test_no_post_data_is_none() {
        let mut req = request("https://example.com/");
        req.method = String::new();
        let model = request_to_model(&req);
        assert_eq!(model.body, Body::None);
        assert_eq!(model.method, "GET");
    }

    #[test]
    fn test_unparseable_url_degrades() {
        let model = request_to_model(&request("not a url?x=1"));
        assert_eq!(model.base_url, "");
        assert_eq!(model.path, "not a url");
        assert!(model.query.is_empty());
    }

    #[test]
    fn test_auth_detected() {
        let mut req = request("https://example.com/");
        req.headers = vec![HarHeader { name: "Authorization".into(), value: "Bearer t".into() }];
        assert_eq!(request_to_model(&req).auth, Some(Auth::bearer("t")));
    }
}
