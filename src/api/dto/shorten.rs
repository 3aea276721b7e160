//! DTOs for the link shortening endpoint.

use crate::expiration::ExpirationPreset;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten one URL.
///
/// `expiration` and `expires_at` are mutually exclusive on the wire: a custom
/// timestamp replaces the relative token entirely. [`crate::form::ShortenForm`]
/// is responsible for never producing both.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be a well-formed URL).
    #[validate(url(message = "Invalid URL format"))]
    pub original_url: String,

    /// Optional user-chosen short-link suffix.
    ///
    /// Sent verbatim; alias rules (length, charset, collisions) are enforced
    /// by the API and surface through its `detail` messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_alias: Option<String>,

    /// Relative expiration token. Omitted when `expires_at` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<ExpirationPreset>,

    /// Absolute expiry timestamp (ISO-8601, UTC). Omitted when a preset is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Successful response from `POST /shorten`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShortenResponse {
    /// The shortened link.
    pub short_url: String,

    /// QR code image for the short URL as a base64-encoded PNG, when the
    /// service generated one.
    pub qr_code_base64: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn request(
        expiration: Option<ExpirationPreset>,
        expires_at: Option<DateTime<Utc>>,
    ) -> ShortenRequest {
        ShortenRequest {
            original_url: "https://example.com".to_string(),
            custom_alias: None,
            expiration,
            expires_at,
        }
    }

    #[test]
    fn test_preset_serializes_as_wire_token() {
        let value =
            serde_json::to_value(request(Some(ExpirationPreset::OneWeek), None)).unwrap();

        assert_eq!(value["expiration"], "1week");
        assert!(value.get("expires_at").is_none());
        assert!(value.get("custom_alias").is_none());
    }

    #[test]
    fn test_expires_at_serializes_as_iso8601() {
        let at = Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap();
        let value = serde_json::to_value(request(None, Some(at))).unwrap();

        assert_eq!(value["expires_at"], "2026-03-01T10:00:00Z");
        assert!(value.get("expiration").is_none());
    }

    #[test]
    fn test_alias_is_sent_when_present() {
        let mut req = request(Some(ExpirationPreset::OneDay), None);
        req.custom_alias = Some("docs".to_string());

        let value = serde_json::to_value(req).unwrap();
        assert_eq!(value["custom_alias"], "docs");
    }

    #[test]
    fn test_url_rule_rejects_malformed_input() {
        let req = ShortenRequest {
            original_url: "not a url".to_string(),
            custom_alias: None,
            expiration: Some(ExpirationPreset::OneDay),
            expires_at: None,
        };

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_response_tolerates_missing_qr_field() {
        let resp: ShortenResponse =
            serde_json::from_str(r#"{"short_url":"https://s.test/abc"}"#).unwrap();

        assert_eq!(resp.short_url, "https://s.test/abc");
        assert!(resp.qr_code_base64.is_none());
    }
}
