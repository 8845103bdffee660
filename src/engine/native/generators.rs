//! Code snippet generation for various languages
//!
//! Each generator turns a [`SnippetRequest`] into a self-contained program
//! using the idiomatic HTTP client of the target language.

use super::snippet::{SnippetBody, SnippetRequest};
use crate::errors::EngineError;

type GenResult = Result<String, EngineError>;

fn multipart_unsupported(target: &str) -> EngineError {
    EngineError::Unsupported(format!("{} (multipart forms)", target))
}

/// Generate Python code (using requests library)
pub fn python(req: &SnippetRequest) -> GenResult {
    let mut code = String::from("import requests\n\n");

    code.push_str(&format!("url = \"{}\"\n", escape_string(&req.url)));

    let multipart = matches!(req.body, SnippetBody::Multipart(_));
    let headers: Vec<&(String, String)> = if multipart {
        req.headers_without_content_type().collect()
    } else {
        req.headers.iter().collect()
    };

    if !headers.is_empty() {
        code.push_str("headers = {\n");
        for (name, value) in &headers {
            code.push_str(&format!("    \"{}\": \"{}\",\n", escape_string(name), escape_string(value)));
        }
        code.push_str("}\n");
    }

    match req.body {
        SnippetBody::Text(ref text) => {
            code.push_str(&format!("data = \"{}\"\n", escape_string(text)));
        }
        SnippetBody::Multipart(ref params) => {
            code.push_str("files = {\n");
            for param in params {
                match param.file_name {
                    Some(ref file) => code.push_str(&format!(
                        "    \"{}\": open(\"{}\", \"rb\"),\n",
                        escape_string(&param.name),
                        escape_string(file)
                    )),
                    None => code.push_str(&format!(
                        "    \"{}\": (None, \"{}\"),\n",
                        escape_string(&param.name),
                        escape_string(param.value.as_deref().unwrap_or_default())
                    )),
                }
            }
            code.push_str("}\n");
        }
        SnippetBody::None => {}
    }

    code.push_str(&format!("\nresponse = requests.request(\n    \"{}\",\n    url", req.method));
    if !headers.is_empty() {
        code.push_str(",\n    headers=headers");
    }
    match req.body {
        SnippetBody::Text(_) => code.push_str(",\n    data=data"),
        SnippetBody::Multipart(_) => code.push_str(",\n    files=files"),
        SnippetBody::None => {}
    }
    if let Some(timeout) = req.timeout {
        code.push_str(&format!(",\n    timeout={}", timeout));
    }
    if req.insecure {
        code.push_str(",\n    verify=False");
    }
    code.push_str("\n)\n\n");
    code.push_str("print(response.status_code)\n");
    code.push_str("print(response.text)\n");

    Ok(code)
}

fn fetch_options(req: &SnippetRequest, indent: &str) -> String {
    let mut code = String::new();
    code.push_str(&format!("{}method: '{}',\n", indent, req.method));

    let multipart = matches!(req.body, SnippetBody::Multipart(_));
    let headers: Vec<&(String, String)> = if multipart {
        req.headers_without_content_type().collect()
    } else {
        req.headers.iter().collect()
    };
    if !headers.is_empty() {
        code.push_str(&format!("{}headers: {{\n", indent));
        for (name, value) in headers {
            code.push_str(&format!("{}  '{}': '{}',\n", indent, escape_single(name), escape_single(value)));
        }
        code.push_str(&format!("{}}},\n", indent));
    }

    match req.body {
        SnippetBody::Text(ref text) => {
            code.push_str(&format!("{}body: '{}',\n", indent, escape_single(text)));
        }
        SnippetBody::Multipart(_) => code.push_str(&format!("{}body: form,\n", indent)),
        SnippetBody::None => {}
    }
    code
}

fn fetch_form(req: &SnippetRequest, node: bool) -> String {
    let SnippetBody::Multipart(ref params) = req.body else {
        return String::new();
    };
    let mut code = String::from("const form = new FormData();\n");
    for param in params {
        match param.file_name {
            Some(ref file) if node => code.push_str(&format!(
                "form.append('{}', new Blob([fs.readFileSync('{}')]), '{}');\n",
                escape_single(&param.name),
                escape_single(file),
                escape_single(file)
            )),
            Some(ref file) => code.push_str(&format!(
                "form.append('{}', document.querySelector('input[type=file]').files[0], '{}');\n",
                escape_single(&param.name),
                escape_single(file)
            )),
            None => code.push_str(&format!(
                "form.append('{}', '{}');\n",
                escape_single(&param.name),
                escape_single(param.value.as_deref().unwrap_or_default())
            )),
        }
    }
    code.push('\n');
    code
}

/// Generate browser JavaScript code (using fetch)
pub fn javascript(req: &SnippetRequest) -> GenResult {
    let mut code = fetch_form(req, false);
    code.push_str(&format!("fetch('{}', {{\n", escape_single(&req.url)));
    code.push_str(&fetch_options(req, "  "));
    code.push_str("})\n");
    code.push_str("  .then(response => response.text())\n");
    code.push_str("  .then(data => console.log(data))\n");
    code.push_str("  .catch(error => console.error('Error:', error));\n");
    Ok(code)
}

/// Generate Node.js code (using fetch)
pub fn node(req: &SnippetRequest) -> GenResult {
    let mut code = String::new();
    if let SnippetBody::Multipart(ref params) = req.body {
        if params.iter().any(|p| p.file_name.is_some()) {
            code.push_str("import fs from 'fs';\n\n");
        }
    }
    code.push_str(&fetch_form(req, true));
    code.push_str(&format!("const url = '{}';\n\n", escape_single(&req.url)));
    code.push_str("const options = {\n");
    code.push_str(&fetch_options(req, "  "));
    code.push_str("};\n\n");
    code.push_str("const response = await fetch(url, options);\n");
    code.push_str("console.log(response.status);\n");
    code.push_str("console.log(await response.text());\n");
    Ok(code)
}

/// Generate Go code
pub fn go(req: &SnippetRequest) -> GenResult {
    if matches!(req.body, SnippetBody::Multipart(_)) {
        return Err(multipart_unsupported("go"));
    }
    let body = req.body_text();

    let mut code = String::from("package main\n\n");
    code.push_str("import (\n");
    code.push_str("\t\"fmt\"\n");
    code.push_str("\t\"io\"\n");
    code.push_str("\t\"net/http\"\n");
    if body.is_some() {
        code.push_str("\t\"strings\"\n");
    }
    code.push_str(")\n\n");

    code.push_str("func main() {\n");
    code.push_str("\tclient := &http.Client{}\n");

    if let Some(body_str) = body {
        code.push_str(&format!("\tvar data = strings.NewReader(`{}`)\n", body_str.replace('`', "` + \"`\" + `")));
        code.push_str(&format!("\treq, err := http.NewRequest(\"{}\", \"{}\", data)\n", req.method, escape_string(&req.url)));
    } else {
        code.push_str(&format!("\treq, err := http.NewRequest(\"{}\", \"{}\", nil)\n", req.method, escape_string(&req.url)));
    }

    code.push_str("\tif err != nil {\n");
    code.push_str("\t\tpanic(err)\n");
    code.push_str("\t}\n");

    for (name, value) in &req.headers {
        code.push_str(&format!("\treq.Header.Set(\"{}\", \"{}\")\n", escape_string(name), escape_string(value)));
    }

    code.push_str("\tresp, err := client.Do(req)\n");
    code.push_str("\tif err != nil {\n");
    code.push_str("\t\tpanic(err)\n");
    code.push_str("\t}\n");
    code.push_str("\tdefer resp.Body.Close()\n");
    code.push_str("\tbody, err := io.ReadAll(resp.Body)\n");
    code.push_str("\tif err != nil {\n");
    code.push_str("\t\tpanic(err)\n");
    code.push_str("\t}\n");
    code.push_str("\tfmt.Printf(\"%s\\n\", body)\n");
    code.push_str("}\n");

    Ok(code)
}

/// Generate Java code
pub fn java(req: &SnippetRequest) -> GenResult {
    if matches!(req.body, SnippetBody::Multipart(_)) {
        return Err(multipart_unsupported("java"));
    }

    let mut code = String::from("import java.net.URI;\n");
    code.push_str("import java.net.http.HttpClient;\n");
    code.push_str("import java.net.http.HttpRequest;\n");
    code.push_str("import java.net.http.HttpResponse;\n\n");

    code.push_str("HttpClient client = HttpClient.newBuilder()\n");
    if req.follow_redirects {
        code.push_str("    .followRedirects(HttpClient.Redirect.NORMAL)\n");
    }
    code.push_str("    .build();\n\n");

    code.push_str("HttpRequest request = HttpRequest.newBuilder()\n");
    code.push_str(&format!("    .uri(URI.create(\"{}\"))\n", escape_string(&req.url)));

    match req.body_text() {
        Some(body_str) => code.push_str(&format!(
            "    .method(\"{}\", HttpRequest.BodyPublishers.ofString(\"{}\"))\n",
            req.method,
            escape_string(body_str)
        )),
        None => code.push_str(&format!(
            "    .method(\"{}\", HttpRequest.BodyPublishers.noBody())\n",
            req.method
        )),
    }

    for (name, value) in &req.headers {
        code.push_str(&format!("    .header(\"{}\", \"{}\")\n", escape_string(name), escape_string(value)));
    }

    code.push_str("    .build();\n\n");
    code.push_str("HttpResponse<String> response = client.send(request, HttpResponse.BodyHandlers.ofString());\n");

    Ok(code)
}

/// Generate PHP code
pub fn php(req: &SnippetRequest) -> GenResult {
    let mut code = String::from("<?php\n");
    code.push_str("$ch = curl_init();\n");
    code.push_str(&format!("curl_setopt($ch, CURLOPT_URL, '{}');\n", escape_single(&req.url)));
    code.push_str("curl_setopt($ch, CURLOPT_RETURNTRANSFER, true);\n");
    code.push_str(&format!("curl_setopt($ch, CURLOPT_CUSTOMREQUEST, '{}');\n", req.method));

    let multipart = matches!(req.body, SnippetBody::Multipart(_));
    let headers: Vec<&(String, String)> = if multipart {
        req.headers_without_content_type().collect()
    } else {
        req.headers.iter().collect()
    };
    if !headers.is_empty() {
        code.push_str("curl_setopt($ch, CURLOPT_HTTPHEADER, [\n");
        for (name, value) in headers {
            code.push_str(&format!("    '{}: {}',\n", escape_single(name), escape_single(value)));
        }
        code.push_str("]);\n");
    }

    match req.body {
        SnippetBody::Text(ref text) => {
            code.push_str(&format!("curl_setopt($ch, CURLOPT_POSTFIELDS, '{}');\n", escape_single(text)));
        }
        SnippetBody::Multipart(ref params) => {
            code.push_str("curl_setopt($ch, CURLOPT_POSTFIELDS, [\n");
            for param in params {
                match param.file_name {
                    Some(ref file) => code.push_str(&format!(
                        "    '{}' => new CURLFile('{}'),\n",
                        escape_single(&param.name),
                        escape_single(file)
                    )),
                    None => code.push_str(&format!(
                        "    '{}' => '{}',\n",
                        escape_single(&param.name),
                        escape_single(param.value.as_deref().unwrap_or_default())
                    )),
                }
            }
            code.push_str("]);\n");
        }
        SnippetBody::None => {}
    }

    if req.follow_redirects {
        code.push_str("curl_setopt($ch, CURLOPT_FOLLOWLOCATION, true);\n");
    }
    if req.insecure {
        code.push_str("curl_setopt($ch, CURLOPT_SSL_VERIFYPEER, false);\n");
    }

    code.push_str("\n$response = curl_exec($ch);\n\n");
    code.push_str("curl_close($ch);\n");

    Ok(code)
}

/// Generate Rust code (using reqwest)
pub fn rust(req: &SnippetRequest) -> GenResult {
    let mut code = String::new();
    if matches!(req.body, SnippetBody::Multipart(_)) {
        code.push_str("use reqwest::multipart;\n\n");
    }
    code.push_str("#[tokio::main]\n");
    code.push_str("async fn main() -> Result<(), Box<dyn std::error::Error>> {\n");

    if let SnippetBody::Multipart(ref params) = req.body {
        code.push_str("    let form = multipart::Form::new()");
        for param in params {
            match param.file_name {
                Some(ref file) => code.push_str(&format!(
                    "\n        .file(\"{}\", \"{}\").await?",
                    escape_string(&param.name),
                    escape_string(file)
                )),
                None => code.push_str(&format!(
                    "\n        .text(\"{}\", \"{}\")",
                    escape_string(&param.name),
                    escape_string(param.value.as_deref().unwrap_or_default())
                )),
            }
        }
        code.push_str(";\n\n");
    }

    code.push_str("    let client = reqwest::Client::builder()");
    if req.insecure {
        code.push_str("\n        .danger_accept_invalid_certs(true)");
    }
    code.push_str("\n        .build()?;\n\n");

    code.push_str(&format!(
        "    let response = client\n        .request(reqwest::Method::from_bytes(b\"{}\")?, \"{}\")\n",
        req.method,
        escape_string(&req.url)
    ));

    let multipart = matches!(req.body, SnippetBody::Multipart(_));
    for (name, value) in &req.headers {
        if multipart && name.eq_ignore_ascii_case("content-type") {
            continue;
        }
        code.push_str(&format!("        .header(\"{}\", \"{}\")\n", escape_string(name), escape_string(value)));
    }

    match req.body {
        SnippetBody::Text(ref text) => {
            code.push_str(&format!("        .body(r#\"{}\"#)\n", text));
        }
        SnippetBody::Multipart(_) => code.push_str("        .multipart(form)\n"),
        SnippetBody::None => {}
    }
    if let Some(timeout) = req.timeout {
        code.push_str(&format!("        .timeout(std::time::Duration::from_secs_f64({:?}))\n", timeout));
    }

    code.push_str("        .send()\n");
    code.push_str("        .await?;\n\n");
    code.push_str("    println!(\"{}\", response.status());\n");
    code.push_str("    println!(\"{}\", response.text().await?);\n\n");
    code.push_str("    Ok(())\n");
    code.push_str("}\n");

    Ok(code)
}

/// Generate Ruby code
pub fn ruby(req: &SnippetRequest) -> GenResult {
    if matches!(req.body, SnippetBody::Multipart(_)) {
        return Err(multipart_unsupported("ruby"));
    }

    let mut code = String::from("require 'net/http'\n\n");
    code.push_str(&format!("uri = URI('{}')\n", escape_single(&req.url)));

    let method = req.method.to_uppercase();
    let method_class = match method.as_str() {
        "GET" => "Get".to_string(),
        "POST" => "Post".to_string(),
        "PUT" => "Put".to_string(),
        "DELETE" => "Delete".to_string(),
        "PATCH" => "Patch".to_string(),
        "HEAD" => "Head".to_string(),
        "OPTIONS" => "Options".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => format!("{}{}", first, chars.as_str().to_lowercase()),
                None => "Get".to_string(),
            }
        }
    };

    code.push_str(&format!("req = Net::HTTP::{}.new(uri)\n", method_class));
    for (name, value) in &req.headers {
        code.push_str(&format!("req['{}'] = '{}'\n", escape_single(name), escape_single(value)));
    }

    if let Some(body_str) = req.body_text() {
        code.push_str(&format!("\nreq.body = '{}'\n", escape_single(body_str)));
    }

    code.push_str("\nreq_options = {\n");
    code.push_str("  use_ssl: uri.scheme == 'https'");
    if req.insecure {
        code.push_str(",\n  verify_mode: OpenSSL::SSL::VERIFY_NONE");
    }
    code.push_str("\n}\n");
    code.push_str("res = Net::HTTP.start(uri.hostname, uri.port, req_options) do |http|\n");
    code.push_str("  http.request(req)\n");
    code.push_str("end\n");

    Ok(code)
}

/// Generate C# code
pub fn csharp(req: &SnippetRequest) -> GenResult {
    if matches!(req.body, SnippetBody::Multipart(_)) {
        return Err(multipart_unsupported("csharp"));
    }

    let mut code = String::from("using System.Net.Http;\n\n");
    code.push_str("HttpClient client = new HttpClient();\n\n");
    code.push_str(&format!(
        "HttpRequestMessage request = new HttpRequestMessage(new HttpMethod(\"{}\"), \"{}\");\n\n",
        req.method,
        escape_string(&req.url)
    ));

    let content_type = req.header("content-type");
    for (name, value) in req.headers_without_content_type() {
        code.push_str(&format!(
            "request.Headers.TryAddWithoutValidation(\"{}\", \"{}\");\n",
            escape_string(name),
            escape_string(value)
        ));
    }

    if let Some(body_str) = req.body_text() {
        code.push_str(&format!("\nrequest.Content = new StringContent(\"{}\");\n", escape_string(body_str)));
        if let Some(ct) = content_type {
            code.push_str(&format!(
                "request.Content.Headers.ContentType = System.Net.Http.Headers.MediaTypeHeaderValue.Parse(\"{}\");\n",
                escape_string(ct)
            ));
        }
    }

    code.push_str("\nHttpResponseMessage response = await client.SendAsync(request);\n");
    code.push_str("response.EnsureSuccessStatusCode();\n");
    code.push_str("string responseBody = await response.Content.ReadAsStringAsync();\n");

    Ok(code)
}

/// Generate a raw HTTP/1.1 request message
pub fn http(req: &SnippetRequest) -> GenResult {
    let parsed = url::Url::parse(&req.url)
        .map_err(|e| EngineError::InvalidCommand(format!("invalid URL '{}': {}", req.url, e)))?;

    let mut target = parsed.path().to_string();
    if let Some(query) = parsed.query() {
        target.push('?');
        target.push_str(query);
    }
    let host = match (parsed.host_str(), parsed.port()) {
        (Some(host), Some(port)) => format!("{}:{}", host, port),
        (Some(host), None) => host.to_string(),
        _ => String::new(),
    };

    let mut code = format!("{} {} HTTP/1.1\n", req.method, target);
    code.push_str(&format!("Host: {}\n", host));

    let boundary = "----curlkitFormBoundary";
    let body = match req.body {
        SnippetBody::Text(ref text) => Some(text.clone()),
        SnippetBody::Multipart(ref params) => {
            let mut out = String::new();
            for param in params {
                out.push_str(&format!("--{}\n", boundary));
                match param.file_name {
                    Some(ref file) => {
                        out.push_str(&format!(
                            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\n\n(data)\n",
                            param.name, file
                        ));
                    }
                    None => {
                        out.push_str(&format!(
                            "Content-Disposition: form-data; name=\"{}\"\n\n{}\n",
                            param.name,
                            param.value.as_deref().unwrap_or_default()
                        ));
                    }
                }
            }
            out.push_str(&format!("--{}--\n", boundary));
            Some(out)
        }
        SnippetBody::None => None,
    };

    for (name, value) in &req.headers {
        if matches!(req.body, SnippetBody::Multipart(_)) && name.eq_ignore_ascii_case("content-type") {
            code.push_str(&format!("{}: multipart/form-data; boundary={}\n", name, boundary));
        } else {
            code.push_str(&format!("{}: {}\n", name, value));
        }
    }
    if let Some(ref body) = body {
        code.push_str(&format!("Content-Length: {}\n\n", body.len()));
        code.push_str(body);
        if !body.ends_with('\n') {
            code.push('\n');
        }
    }

    Ok(code)
}

/// Generate an HTTPie command
pub fn httpie(req: &SnippetRequest) -> GenResult {
    let mut parts: Vec<String> = vec!["http".to_string()];

    if req.follow_redirects {
        parts.push("--follow".to_string());
    }
    if req.insecure {
        parts.push("--verify=no".to_string());
    }
    if let Some(timeout) = req.timeout {
        parts.push(format!("--timeout={}", timeout));
    }
    if matches!(req.body, SnippetBody::Multipart(_)) {
        parts.push("--multipart".to_string());
    }

    parts.push(req.method.clone());
    parts.push(shell_escape(&req.url));

    for (name, value) in &req.headers {
        if matches!(req.body, SnippetBody::Multipart(_)) && name.eq_ignore_ascii_case("content-type") {
            continue;
        }
        parts.push(shell_escape(&format!("{}:{}", name, value)));
    }

    match req.body {
        SnippetBody::Text(ref text) => {
            parts.push(format!("--raw={}", shell_escape(text)));
        }
        SnippetBody::Multipart(ref params) => {
            for param in params {
                match param.file_name {
                    Some(ref file) => parts.push(shell_escape(&format!("{}@{}", param.name, file))),
                    None => parts.push(shell_escape(&format!(
                        "{}={}",
                        param.name,
                        param.value.as_deref().unwrap_or_default()
                    ))),
                }
            }
        }
        SnippetBody::None => {}
    }

    Ok(parts.join(" ") + "\n")
}

/// Generate a Wget command
pub fn wget(req: &SnippetRequest) -> GenResult {
    if matches!(req.body, SnippetBody::Multipart(_)) {
        return Err(multipart_unsupported("wget"));
    }

    let mut parts: Vec<String> = vec!["wget".to_string(), "--no-verbose".to_string()];
    if req.method != "GET" {
        parts.push(format!("--method={}", req.method));
    }
    for (name, value) in &req.headers {
        parts.push(format!("--header={}", shell_escape(&format!("{}: {}", name, value))));
    }
    if let Some(body_str) = req.body_text() {
        parts.push(format!("--body-data={}", shell_escape(body_str)));
    }
    if let Some(timeout) = req.timeout {
        parts.push(format!("--timeout={}", timeout));
    }
    if req.insecure {
        parts.push("--no-check-certificate".to_string());
    }
    if !req.follow_redirects {
        parts.push("--max-redirect=0".to_string());
    }
    parts.push("--output-document".to_string());
    parts.push("-".to_string());
    parts.push(shell_escape(&req.url));

    Ok(parts.join(" \\\n  ") + "\n")
}

/// Generate PowerShell code (Invoke-WebRequest)
pub fn powershell(req: &SnippetRequest) -> GenResult {
    if matches!(req.body, SnippetBody::Multipart(_)) {
        return Err(multipart_unsupported("powershell"));
    }

    let mut code = String::new();
    let content_type = req.header("content-type");
    let headers: Vec<&(String, String)> = req.headers_without_content_type().collect();
    let has_headers = !headers.is_empty();
    if has_headers {
        code.push_str("$headers = @{\n");
        for (name, value) in headers {
            code.push_str(&format!("    \"{}\" = \"{}\"\n", escape_powershell(name), escape_powershell(value)));
        }
        code.push_str("}\n\n");
    }

    code.push_str(&format!(
        "$response = Invoke-WebRequest -Uri \"{}\" -Method {}",
        escape_powershell(&req.url),
        req.method
    ));
    if has_headers {
        code.push_str(" -Headers $headers");
    }
    if let Some(ct) = content_type {
        code.push_str(&format!(" -ContentType \"{}\"", escape_powershell(ct)));
    }
    if let Some(body_str) = req.body_text() {
        code.push_str(&format!(" -Body \"{}\"", escape_powershell(body_str)));
    }
    code.push('\n');

    Ok(code)
}

/// Generate Kotlin code (using OkHttp)
pub fn kotlin(req: &SnippetRequest) -> GenResult {
    if matches!(req.body, SnippetBody::Multipart(_)) {
        return Err(multipart_unsupported("kotlin"));
    }

    let mut code = String::from("import java.io.IOException\n");
    code.push_str("import okhttp3.MediaType.Companion.toMediaType\n");
    code.push_str("import okhttp3.OkHttpClient\n");
    code.push_str("import okhttp3.Request\n");
    code.push_str("import okhttp3.RequestBody.Companion.toRequestBody\n\n");
    code.push_str("val client = OkHttpClient()\n\n");

    let body_arg = match req.body_text() {
        Some(body_str) => {
            let media = req.header("content-type").unwrap_or("application/x-www-form-urlencoded");
            code.push_str(&format!(
                "val MEDIA_TYPE = \"{}\".toMediaType()\n\nval requestBody = \"{}\"\n\n",
                escape_string(media),
                escape_kotlin(body_str)
            ));
            "requestBody.toRequestBody(MEDIA_TYPE)"
        }
        None => "null",
    };

    code.push_str("val request = Request.Builder()\n");
    code.push_str(&format!("  .url(\"{}\")\n", escape_kotlin(&req.url)));
    code.push_str(&format!("  .method(\"{}\", {})\n", req.method, body_arg));
    for (name, value) in &req.headers {
        code.push_str(&format!("  .header(\"{}\", \"{}\")\n", escape_kotlin(name), escape_kotlin(value)));
    }
    code.push_str("  .build()\n\n");
    code.push_str("client.newCall(request).execute().use { response ->\n");
    code.push_str("  if (!response.isSuccessful) throw IOException(\"Unexpected code $response\")\n");
    code.push_str("  response.body!!.string()\n");
    code.push_str("}\n");

    Ok(code)
}

/// Generate Swift code (using URLSession)
pub fn swift(req: &SnippetRequest) -> GenResult {
    if matches!(req.body, SnippetBody::Multipart(_)) {
        return Err(multipart_unsupported("swift"));
    }

    let mut code = String::from("import Foundation\n\n");
    code.push_str(&format!("let url = URL(string: \"{}\")!\n", escape_string(&req.url)));
    code.push_str("var request = URLRequest(url: url)\n");
    code.push_str(&format!("request.httpMethod = \"{}\"\n", req.method));
    if let Some(timeout) = req.timeout {
        code.push_str(&format!("request.timeoutInterval = {:?}\n", timeout));
    }
    for (name, value) in &req.headers {
        code.push_str(&format!(
            "request.setValue(\"{}\", forHTTPHeaderField: \"{}\")\n",
            escape_string(value),
            escape_string(name)
        ));
    }
    if let Some(body_str) = req.body_text() {
        code.push_str(&format!("request.httpBody = \"{}\".data(using: .utf8)\n", escape_string(body_str)));
    }
    code.push('\n');
    code.push_str("let task = URLSession.shared.dataTask(with: request) { data, response, error in\n");
    code.push_str("    if let error = error {\n");
    code.push_str("        print(error)\n");
    code.push_str("    } else if let data = data {\n");
    code.push_str("        print(String(decoding: data, as: UTF8.self))\n");
    code.push_str("    }\n");
    code.push_str("}\n\n");
    code.push_str("task.resume()\n");

    Ok(code)
}

/// Generate Dart code (using package:http)
pub fn dart(req: &SnippetRequest) -> GenResult {
    if matches!(req.body, SnippetBody::Multipart(_)) {
        return Err(multipart_unsupported("dart"));
    }

    let mut code = String::from("import 'package:http/http.dart' as http;\n\n");
    code.push_str("void main() async {\n");

    if !req.headers.is_empty() {
        code.push_str("  final headers = {\n");
        for (name, value) in &req.headers {
            code.push_str(&format!("    '{}': '{}',\n", escape_dart(name), escape_dart(value)));
        }
        code.push_str("  };\n\n");
    }

    code.push_str(&format!("  final url = Uri.parse('{}');\n\n", escape_dart(&req.url)));
    code.push_str(&format!("  final req = http.Request('{}', url);\n", req.method));
    if !req.headers.is_empty() {
        code.push_str("  req.headers.addAll(headers);\n");
    }
    if let Some(body_str) = req.body_text() {
        code.push_str(&format!("  req.body = '{}';\n", escape_dart(body_str)));
    }
    code.push_str("\n  final res = await http.Response.fromStream(await req.send());\n");
    code.push_str("  final status = res.statusCode;\n");
    code.push_str("  if (status != 200) throw Exception('http.send error: statusCode= $status');\n\n");
    code.push_str("  print(res.body);\n");
    code.push_str("}\n");

    Ok(code)
}

/// Escape special characters for double-quoted strings
fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Escape for single-quoted strings (JavaScript, PHP, Ruby)
fn escape_single(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

/// Escape for Kotlin strings, which also interpolate `$`
fn escape_kotlin(s: &str) -> String {
    escape_string(s).replace('$', "\\$")
}

/// Escape for Dart single-quoted strings, which also interpolate `$`
fn escape_dart(s: &str) -> String {
    escape_single(s).replace('$', "\\$")
}

/// Escape for PowerShell double-quoted strings
fn escape_powershell(s: &str) -> String {
    s.replace('`', "``")
        .replace('"', "`\"")
        .replace('$', "`$")
        .replace('\n', "`n")
}

/// Shell-escape a string for safe inclusion in a command
fn shell_escape(s: &str) -> String {
    let needs_escaping = s.chars().any(|c| {
        matches!(c, ' ' | '\'' | '"' | '\\' | '$' | '`' | '!' | '*' | '?' |
                    '[' | ']' | '{' | '}' | '(' | ')' | '<' | '>' | '|' |
                    '&' | ';' | '#' | '~' | '\n' | '\t')
    });

    if !needs_escaping && !s.is_empty() {
        return s.to_string();
    }

    format!("'{}'", s.replace('\'', "'\"'\"'"))
}
