//! Auth descriptor shown alongside a request

use serde::{Deserialize, Serialize};

/// Where an API key is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiKeyLocation {
    #[default]
    Header,
    Query,
}

/// Structured authentication info
///
/// Informational only: a bearer token may appear both here and as a
/// literal `Authorization` header in the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Auth {
    None,
    Basic {
        username: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        password: Option<String>,
    },
    Bearer {
        token: String,
    },
    ApiKey {
        key: String,
        value: String,
        #[serde(rename = "addTo", default)]
        add_to: ApiKeyLocation,
    },
}

impl Auth {
    pub fn bearer(token: impl Into<String>) -> Self {
        Auth::Bearer { token: token.into() }
    }

    pub fn basic(username: impl Into<String>, password: Option<String>) -> Self {
        Auth::Basic { username: username.into(), password }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_serde() {
        let value = serde_json::to_value(Auth::bearer("abc123")).unwrap();
        assert_eq!(value, serde_json::json!({"type": "bearer", "token": "abc123"}));

        let api_key: Auth = serde_json::from_str(
            r#"{"type": "api_key", "key": "X-Api-Key", "value": "k", "addTo": "query"}"#,
        )
        .unwrap();
        assert_eq!(
            api_key,
            Auth::ApiKey { key: "X-Api-Key".into(), value: "k".into(), add_to: ApiKeyLocation::Query }
        );
    }
}
