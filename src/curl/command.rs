//! cURL flag parsing
//!
//! Turns shell words into a [`ParsedCurl`]. Only flags that change the
//! request on the wire are interpreted; transfer options (output files,
//! verbosity, TLS files) are recognised so their arguments are skipped.

use super::lexer::tokenize;
use crate::errors::EngineError;

/// One `-d`-family argument, kept with the flag that introduced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataArg {
    /// `-d`, `--data`, `--data-ascii`
    Ascii(String),
    /// `--data-raw` (no `@file` interpretation)
    Raw(String),
    /// `--data-binary`
    Binary(String),
    /// `--data-urlencode`
    UrlEncode(String),
    /// `--json`
    Json(String),
}

/// One `-F` argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormArg {
    pub name: String,
    /// Literal value for text parts, path for file parts
    pub value: String,
    pub is_file: bool,
    pub content_type: Option<String>,
}

/// Parsed curl command structure
#[derive(Debug, Default)]
pub struct ParsedCurl {
    pub method: Option<String>,
    pub url: Option<String>,
    pub headers: Vec<(String, String)>,
    pub data: Vec<DataArg>,
    pub form_fields: Vec<FormArg>,
    pub user: Option<String>,
    pub cookie: Option<String>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
    pub follow_redirects: bool,
    pub timeout: Option<f64>,
    pub insecure: bool,
    pub compressed: bool,
    pub head_only: bool,
    pub get: bool,
}

/// Short flags that never take an argument, usable in bundles like `-sSL`
const FLAGS_WITHOUT_ARGS: [char; 19] = [
    's', 'S', 'L', 'v', 'k', 'I', 'i', 'O', 'J', 'f', 'g', 'G', 'N', '0', '1', '2', '3', '4', '6',
];

/// Parse a curl command string into a ParsedCurl structure
pub fn parse_curl_command(cmd: &str) -> Result<ParsedCurl, EngineError> {
    let tokens = tokenize(cmd)?;
    parse_tokens(&tokens)
}

/// Parse tokenized curl command
pub fn parse_tokens(tokens: &[String]) -> Result<ParsedCurl, EngineError> {
    let mut parsed = ParsedCurl::default();
    let mut i = 0;

    // Skip "curl" if present
    if tokens.first().map(|s| s.eq_ignore_ascii_case("curl")).unwrap_or(false) {
        i = 1;
    }

    while i < tokens.len() {
        let token = tokens[i].as_str();

        // `--flag=value` form
        if let Some((flag, value)) = token.strip_prefix("--").and_then(|t| t.split_once('=')) {
            let flag = format!("--{}", flag);
            if takes_argument(&flag) {
                apply_flag(&mut parsed, &flag, Some(value.to_string()));
                i += 1;
                continue;
            }
        }

        if token.starts_with('-') && token.len() > 1 {
            // Combined short flags like -sSL
            if !token.starts_with("--") && token.len() > 2 && token.is_char_boundary(2) {
                let rest = &token[1..];
                if rest.chars().all(|c| FLAGS_WITHOUT_ARGS.contains(&c)) {
                    for c in rest.chars() {
                        apply_flag(&mut parsed, &format!("-{}", c), None);
                    }
                    i += 1;
                    continue;
                }
                // -XPOST, -HName:value
                let (flag, value) = token.split_at(2);
                if takes_argument(flag) {
                    apply_flag(&mut parsed, flag, Some(value.to_string()));
                    i += 1;
                    continue;
                }
            }

            if takes_argument(token) {
                i += 1;
                let value = tokens.get(i).cloned().ok_or_else(|| {
                    EngineError::InvalidCommand(format!("option {} requires an argument", token))
                })?;
                apply_flag(&mut parsed, token, Some(value));
            } else {
                apply_flag(&mut parsed, token, None);
            }
        } else if parsed.url.is_none() {
            // URL (first non-flag argument)
            parsed.url = Some(token.to_string());
        }

        i += 1;
    }

    Ok(parsed)
}

fn takes_argument(flag: &str) -> bool {
    matches!(
        flag,
        "-X" | "--request"
            | "-H" | "--header"
            | "-d" | "--data" | "--data-ascii" | "--data-raw" | "--data-binary" | "--data-urlencode"
            | "--json"
            | "-F" | "--form" | "--form-string"
            | "-u" | "--user"
            | "-b" | "--cookie"
            | "-c" | "--cookie-jar"
            | "-A" | "--user-agent"
            | "-e" | "--referer"
            | "-m" | "--max-time"
            | "--connect-timeout"
            | "--max-redirs"
            | "-o" | "--output"
            | "-x" | "--proxy"
            | "-E" | "--cert"
            | "--key" | "--cacert" | "--capath"
            | "-w" | "--write-out"
            | "-T" | "--upload-file"
            | "-r" | "--range"
            | "--url"
            | "--resolve" | "--connect-to"
            | "--retry" | "--retry-delay" | "--retry-max-time"
            | "--limit-rate"
            | "--oauth2-bearer"
    )
}

fn apply_flag(parsed: &mut ParsedCurl, flag: &str, value: Option<String>) {
    let value = value.unwrap_or_default();
    match flag {
        "-X" | "--request" => parsed.method = Some(value.to_uppercase()),
        "-H" | "--header" => {
            if let Some(header) = parse_header(&value) {
                parsed.headers.push(header);
            }
        }
        "-d" | "--data" | "--data-ascii" => parsed.data.push(DataArg::Ascii(value)),
        "--data-raw" => parsed.data.push(DataArg::Raw(value)),
        "--data-binary" => parsed.data.push(DataArg::Binary(value)),
        "--data-urlencode" => parsed.data.push(DataArg::UrlEncode(value)),
        "--json" => parsed.data.push(DataArg::Json(value)),
        "-F" | "--form" => {
            if let Some(field) = parse_form_field(&value, true) {
                parsed.form_fields.push(field);
            }
        }
        "--form-string" => {
            if let Some(field) = parse_form_field(&value, false) {
                parsed.form_fields.push(field);
            }
        }
        "-u" | "--user" => parsed.user = Some(value),
        "--oauth2-bearer" => parsed.headers.push(("Authorization".to_string(), format!("Bearer {}", value))),
        "-b" | "--cookie" => {
            // without '=' the argument names a cookie file
            if value.contains('=') {
                parsed.cookie = Some(match parsed.cookie.take() {
                    Some(existing) => format!("{}; {}", existing, value),
                    None => value,
                });
            }
        }
        "-A" | "--user-agent" => parsed.user_agent = Some(value),
        "-e" | "--referer" => parsed.referer = Some(value),
        "-m" | "--max-time" => parsed.timeout = value.parse().ok(),
        "--url" => {
            if parsed.url.is_none() {
                parsed.url = Some(value);
            }
        }
        "-L" | "--location" | "--location-trusted" => parsed.follow_redirects = true,
        "-k" | "--insecure" => parsed.insecure = true,
        "--compressed" => parsed.compressed = true,
        "-I" | "--head" => parsed.head_only = true,
        "-G" | "--get" => parsed.get = true,
        _ => {}
    }
}

/// Parse a header string "Name: Value"
///
/// `Name;` sends an empty header; `Name:` with nothing after it removes a
/// default header in curl and is dropped here.
fn parse_header(header: &str) -> Option<(String, String)> {
    match header.find(':') {
        Some(colon_pos) => {
            let name = header[..colon_pos].trim().to_string();
            let value = header[colon_pos + 1..].trim().to_string();
            if name.is_empty() || value.is_empty() {
                return None;
            }
            Some((name, value))
        }
        None => {
            let name = header.trim().strip_suffix(';')?.trim();
            if name.is_empty() {
                return None;
            }
            Some((name.to_string(), String::new()))
        }
    }
}

/// Parse a form field "key=value", "key=@path;type=mime"
fn parse_form_field(field: &str, interpret: bool) -> Option<FormArg> {
    let (name, value) = field.split_once('=')?;
    let name = name.to_string();

    if interpret {
        if let Some(spec) = value.strip_prefix('@') {
            let mut parts = spec.split(';');
            let path = parts.next().unwrap_or_default().to_string();
            let content_type = parts
                .filter_map(|p| p.trim().strip_prefix("type="))
                .map(str::to_string)
                .next();
            return Some(FormArg { name, value: path, is_file: true, content_type });
        }
    }

    Some(FormArg { name, value: value.to_string(), is_file: false, content_type: None })
}

impl ParsedCurl {
    /// Effective HTTP method, following curl's defaults
    pub fn effective_method(&self) -> String {
        if let Some(ref method) = self.method {
            return method.clone();
        }
        if self.head_only {
            "HEAD".to_string()
        } else if self.get {
            "GET".to_string()
        } else if !self.data.is_empty() || !self.form_fields.is_empty() {
            "POST".to_string()
        } else {
            "GET".to_string()
        }
    }

    /// Get header value by name (case-insensitive, first match)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Request body text as curl would send it, `-d` arguments joined by `&`
    pub fn data_text(&self) -> Option<String> {
        if self.data.is_empty() {
            return None;
        }
        let parts: Vec<String> = self.data.iter().map(encode_data_arg).collect();
        Some(parts.join("&"))
    }

    /// Whether any `--json` argument was given
    pub fn has_json_flag(&self) -> bool {
        self.data.iter().any(|d| matches!(d, DataArg::Json(_)))
    }
}

fn encode_data_arg(arg: &DataArg) -> String {
    match arg {
        DataArg::Ascii(s) | DataArg::Raw(s) | DataArg::Binary(s) | DataArg::Json(s) => s.clone(),
        DataArg::UrlEncode(s) => encode_urlencode_arg(s),
    }
}

/// Apply curl's `--data-urlencode` rules
fn encode_urlencode_arg(arg: &str) -> String {
    if let Some(content) = arg.strip_prefix('=') {
        return urlencoding::encode(content).into_owned();
    }
    match arg.split_once('=') {
        Some((name, content)) => format!("{}={}", name, urlencoding::encode(content)),
        // `@file` / `name@file` read a file; kept as written
        None if arg.contains('@') => arg.to_string(),
        None => urlencoding::encode(arg).into_owned(),
    }
}
