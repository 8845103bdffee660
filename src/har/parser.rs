//! HAR text parsing and serialization

use super::types::{Har, HarCreator, HarEntry, HarLog, HarRequest};

/// Parse HAR from a JSON string
pub fn parse_har(json: &str) -> Result<Har, serde_json::Error> {
    serde_json::from_str(json)
}

/// Wrap a single request in a HAR 1.2 log
pub fn har_from_request(request: HarRequest) -> Har {
    Har {
        log: HarLog {
            version: "1.2".to_string(),
            creator: Some(HarCreator {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            }),
            entries: vec![HarEntry::from_request(request)],
            comment: None,
        },
    }
}

/// Serialize a HAR document
pub fn to_har_string(har: &Har) -> Result<String, serde_json::Error> {
    serde_json::to_string(har)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_har_from_request_roundtrip() {
        let request = HarRequest {
            method: "GET".into(),
            url: "https://api.example.com/users".into(),
            ..Default::default()
        };
        let text = to_har_string(&har_from_request(request)).unwrap();
        let har = parse_har(&text).unwrap();
        assert_eq!(har.log.entries.len(), 1);
        assert_eq!(har.log.entries[0].request.url, "https://api.example.com/users");
        assert_eq!(har.log.creator.unwrap().name, "curlkit");
    }

    #[test]
    fn test_parse_har_invalid() {
        assert!(parse_har("not json").is_err());
        assert!(parse_har(r#"{"entries": []}"#).is_err());
    }
}
