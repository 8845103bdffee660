//! Model body -> multipart form / URL-encoded parameters

use std::fmt;
use std::path::{Path, PathBuf};

use reqwest::multipart::{Form, Part};

use crate::errors::Result;
use crate::model::{Body, FieldType, FormField, RequestModel};

/// Value of one multipart part
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartValue {
    Text(String),
    /// Path of the file to attach
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPart {
    pub name: String,
    pub value: PartValue,
}

/// Multipart form assembled from a `formdata` body, parts in model order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartForm {
    pub parts: Vec<FormPart>,
}

impl MultipartForm {
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Build the transmittable form, reading file parts from disk
    pub async fn into_multipart(self) -> Result<Form> {
        let mut form = Form::new();
        for part in self.parts {
            form = match part.value {
                PartValue::Text(text) => form.text(part.name, text),
                PartValue::File(path) => form.part(part.name, file_part(&path).await?),
            };
        }
        Ok(form)
    }
}

async fn file_part(path: &Path) -> Result<Part> {
    let contents = tokio::fs::read(path).await?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("file")
        .to_string();
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    Ok(Part::bytes(contents).file_name(file_name).mime_str(mime.as_ref())?)
}

/// Ordered URL-encoded parameters from a `urlencoded` body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams(pub Vec<(String, String)>);

impl SearchParams {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for SearchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = serde_urlencoded::to_string(&self.0).map_err(|_| fmt::Error)?;
        f.write_str(&encoded)
    }
}

/// Multipart parts of a `formdata` body; empty for any other mode
///
/// A file field with no path is sent as an empty text part.
pub fn to_form_data(model: &RequestModel) -> MultipartForm {
    let Body::FormData { ref formdata } = model.body else {
        return MultipartForm::default();
    };

    let parts = active(formdata)
        .map(|field| FormPart {
            name: field.key.clone(),
            value: match field.field_type {
                FieldType::File if !field.value.is_empty() => PartValue::File(PathBuf::from(&field.value)),
                _ => PartValue::Text(field.value.clone()),
            },
        })
        .collect();

    MultipartForm { parts }
}

/// Parameters of a `urlencoded` body; empty for any other mode
pub fn to_url_search_params(model: &RequestModel) -> SearchParams {
    match model.body {
        Body::UrlEncoded { ref urlencoded } => SearchParams(
            active(urlencoded)
                .map(|field| (field.key.clone(), field.value.clone()))
                .collect(),
        ),
        _ => SearchParams::default(),
    }
}

fn active(fields: &[FormField]) -> impl Iterator<Item = &FormField> {
    fields.iter().filter(|f| f.is_active())
}
