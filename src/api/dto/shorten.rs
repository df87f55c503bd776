//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a link.
///
/// The `Link` and `LINK` keys are accepted as well as `link`.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The link to shorten. Any non-empty string is accepted.
    #[serde(alias = "Link", alias = "LINK")]
    #[validate(length(min = 1, message = "Link must not be empty"))]
    pub link: String,
}

/// A freshly created short link.
#[derive(Debug, Serialize, Deserialize)]
pub struct ShortenResponse {
    pub code: String,
    pub short_url: String,
    pub link: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_accepts_lowercase_key() {
        let req: ShortenRequest = serde_json::from_str(r#"{"link":"https://a.com"}"#).unwrap();
        assert_eq!(req.link, "https://a.com");
    }

    #[test]
    fn test_request_accepts_capitalised_key() {
        let req: ShortenRequest = serde_json::from_str(r#"{"Link":"https://a.com"}"#).unwrap();
        assert_eq!(req.link, "https://a.com");
    }

    #[test]
    fn test_request_accepts_uppercase_key() {
        let req: ShortenRequest = serde_json::from_str(r#"{"LINK":"https://a.com"}"#).unwrap();
        assert_eq!(req.link, "https://a.com");
    }

    #[test]
    fn test_empty_link_fails_validation() {
        let req = ShortenRequest {
            link: String::new(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_arbitrary_link_passes_validation() {
        let req = ShortenRequest {
            link: "not even a url".to_string(),
        };
        assert!(req.validate().is_ok());
    }
}
