//! Request body representation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use super::request::enabled_by_default;

/// Kind of a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Text,
    File,
}

/// A multipart or URL-encoded form field
///
/// For `File` fields `value` holds the file path (or bare file name when
/// the field came from a parsed cURL command).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub key: String,
    #[serde(default)]
    pub value: String,
    #[serde(rename = "type", default)]
    pub field_type: FieldType,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

impl FormField {
    pub fn text(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self { key: key.into(), value: value.into(), field_type: FieldType::Text, enabled: true }
    }

    pub fn file(key: impl Into<String>, path: impl Into<String>) -> Self {
        Self { key: key.into(), value: path.into(), field_type: FieldType::File, enabled: true }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Enabled and keyed
    pub fn is_active(&self) -> bool {
        self.enabled && !self.key.is_empty()
    }
}

/// Reference to a file used as a binary request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryHandle {
    pub path: PathBuf,
}

impl BinaryHandle {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Request body, one variant per editing mode
///
/// Serialized as `{"mode": "<mode>", "<mode>": <payload>}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Body {
    #[default]
    None,
    Raw { raw: String },
    Json { json: String },
    #[serde(rename = "formdata")]
    FormData { formdata: Vec<FormField> },
    #[serde(rename = "urlencoded")]
    UrlEncoded { urlencoded: Vec<FormField> },
    Binary { binary: BinaryHandle },
}

/// Discriminant of [`Body`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyMode {
    None,
    Raw,
    Json,
    FormData,
    UrlEncoded,
    Binary,
}

impl BodyMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyMode::None => "none",
            BodyMode::Raw => "raw",
            BodyMode::Json => "json",
            BodyMode::FormData => "formdata",
            BodyMode::UrlEncoded => "urlencoded",
            BodyMode::Binary => "binary",
        }
    }
}

impl fmt::Display for BodyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Body {
    pub fn raw(text: impl Into<String>) -> Self {
        Body::Raw { raw: text.into() }
    }

    pub fn json(text: impl Into<String>) -> Self {
        Body::Json { json: text.into() }
    }

    pub fn form_data(fields: Vec<FormField>) -> Self {
        Body::FormData { formdata: fields }
    }

    pub fn url_encoded(fields: Vec<FormField>) -> Self {
        Body::UrlEncoded { urlencoded: fields }
    }

    pub fn binary(path: impl Into<PathBuf>) -> Self {
        Body::Binary { binary: BinaryHandle::new(path) }
    }

    pub fn mode(&self) -> BodyMode {
        match self {
            Body::None => BodyMode::None,
            Body::Raw { .. } => BodyMode::Raw,
            Body::Json { .. } => BodyMode::Json,
            Body::FormData { .. } => BodyMode::FormData,
            Body::UrlEncoded { .. } => BodyMode::UrlEncoded,
            Body::Binary { .. } => BodyMode::Binary,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Body::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_json_shape() {
        let body = Body::json(r#"{"a":1}"#);
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value, serde_json::json!({"mode": "json", "json": "{\"a\":1}"}));
    }

    #[test]
    fn test_formdata_deserializes_with_defaults() {
        let body: Body = serde_json::from_str(
            r#"{"mode": "formdata", "formdata": [{"key": "avatar", "value": "me.png", "type": "file"}, {"key": "name"}]}"#,
        )
        .unwrap();
        match body {
            Body::FormData { formdata } => {
                assert_eq!(formdata[0].field_type, FieldType::File);
                assert!(formdata[0].enabled);
                assert_eq!(formdata[1].field_type, FieldType::Text);
                assert_eq!(formdata[1].value, "");
            }
            other => panic!("unexpected body {:?}", other),
        }
    }

    #[test]
    fn test_mode() {
        assert_eq!(Body::default().mode(), BodyMode::None);
        assert_eq!(Body::url_encoded(vec![]).mode().as_str(), "urlencoded");
        assert_eq!(Body::binary("/tmp/blob.bin").mode(), BodyMode::Binary);
    }
}
