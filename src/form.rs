//! Shorten-form state machine.
//!
//! [`ShortenForm`] owns everything the interactive flow needs between
//! prompts: the field values, the last response or error, and the
//! copy-confirmation window. The terminal front end in `main.rs` only reads
//! and mutates this state; all submission rules live here so they can be
//! tested without a terminal.

use crate::api::ApiClient;
use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::clipboard::ClipboardProvider;
use crate::error::ClientError;
use crate::expiration::ExpirationPreset;
use chrono::{DateTime, Utc};
use std::time::Duration;
use tokio::time::Instant;
use validator::Validate;

/// How long the copy confirmation stays visible after a successful copy.
pub const COPY_FEEDBACK_TTL: Duration = Duration::from_millis(2000);

/// State of one shortening form.
///
/// Expiration is either a preset or a custom timestamp, never both:
/// selecting one side clears the other. With neither set, submission falls
/// back to [`ExpirationPreset::FALLBACK`].
#[derive(Debug, Default)]
pub struct ShortenForm {
    original_url: String,
    custom_alias: String,
    preset: Option<ExpirationPreset>,
    custom_expires_at: Option<DateTime<Utc>>,
    result: Option<ShortenResponse>,
    error: Option<String>,
    copied_at: Option<Instant>,
}

impl ShortenForm {
    /// Creates a form with the default expiration preset selected.
    pub fn new() -> Self {
        Self {
            preset: Some(ExpirationPreset::default()),
            ..Self::default()
        }
    }

    pub fn original_url(&self) -> &str {
        &self.original_url
    }

    pub fn custom_alias(&self) -> &str {
        &self.custom_alias
    }

    /// The selected preset, if expiration is not in custom mode.
    pub fn preset(&self) -> Option<ExpirationPreset> {
        self.preset
    }

    /// The custom expiration timestamp, if one is set.
    pub fn custom_expires_at(&self) -> Option<DateTime<Utc>> {
        self.custom_expires_at
    }

    /// The short URL from the last successful submission.
    pub fn short_url(&self) -> Option<&str> {
        self.result.as_ref().map(|r| r.short_url.as_str())
    }

    /// The base64 QR payload from the last successful submission, if the
    /// server sent one.
    pub fn qr_code_base64(&self) -> Option<&str> {
        self.result.as_ref().and_then(|r| r.qr_code_base64.as_deref())
    }

    /// The user-facing message from the last failed submission.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_original_url(&mut self, url: impl Into<String>) {
        self.original_url = url.into();
    }

    pub fn set_custom_alias(&mut self, alias: impl Into<String>) {
        self.custom_alias = alias.into();
    }

    /// Selects an expiration preset, leaving custom mode.
    pub fn select_preset(&mut self, preset: ExpirationPreset) {
        self.preset = Some(preset);
        self.custom_expires_at = None;
    }

    /// Sets a custom expiration timestamp, deselecting any preset.
    pub fn set_custom_expires_at(&mut self, expires_at: DateTime<Utc>) {
        self.custom_expires_at = Some(expires_at);
        self.preset = None;
    }

    /// Clears a custom timestamp without reselecting a preset.
    ///
    /// Submitting in this state uses [`ExpirationPreset::FALLBACK`].
    pub fn clear_custom_expires_at(&mut self) {
        self.custom_expires_at = None;
    }

    /// Builds the request payload for the current field values.
    ///
    /// An empty alias is omitted. A custom timestamp is sent as
    /// `expires_at` with no `expiration` field; otherwise `expiration`
    /// carries the selected preset or the fallback.
    pub fn request(&self) -> ShortenRequest {
        let custom_alias = if self.custom_alias.is_empty() {
            None
        } else {
            Some(self.custom_alias.clone())
        };

        let (expiration, expires_at) = match self.custom_expires_at {
            Some(at) => (None, Some(at)),
            None => (
                Some(self.preset.unwrap_or(ExpirationPreset::FALLBACK)),
                None,
            ),
        };

        ShortenRequest {
            original_url: self.original_url.clone(),
            custom_alias,
            expiration,
            expires_at,
        }
    }

    /// Validates and submits the form, recording the outcome on the form.
    ///
    /// Any previous result, error and copy confirmation are cleared before
    /// the attempt. Returns `true` when a short URL was produced; on
    /// failure the message to show is available through
    /// [`error`](Self::error).
    pub async fn submit(&mut self, client: &ApiClient) -> bool {
        self.error = None;
        self.result = None;
        self.copied_at = None;

        let request = self.request();
        let outcome = match request.validate() {
            Ok(()) => client.shorten(&request).await,
            Err(errors) => Err(ClientError::from(errors)),
        };

        match outcome {
            Ok(response) => {
                tracing::info!("shortened {} -> {}", request.original_url, response.short_url);
                self.result = Some(response);
                true
            }
            Err(err) => {
                tracing::debug!("shorten failed: {}", err);
                self.error = Some(err.user_message());
                false
            }
        }
    }

    /// Copies the short URL to the clipboard and opens the confirmation
    /// window.
    ///
    /// Returns `false` when there is no result to copy or the clipboard
    /// rejects the write; the confirmation is only shown for text that
    /// actually landed on the clipboard.
    pub fn copy_short_url(&mut self, clipboard: &mut dyn ClipboardProvider) -> bool {
        let Some(short_url) = self.short_url() else {
            return false;
        };

        match clipboard.set_text(short_url) {
            Ok(()) => {
                self.copied_at = Some(Instant::now());
                true
            }
            Err(err) => {
                tracing::warn!("copy to clipboard failed: {}", err);
                false
            }
        }
    }

    /// Whether the copy confirmation should currently be shown.
    ///
    /// True for [`COPY_FEEDBACK_TTL`] after a successful copy, false again
    /// once the window has elapsed or after the next submission.
    pub fn copied(&self) -> bool {
        self.copied_at
            .is_some_and(|at| at.elapsed() < COPY_FEEDBACK_TTL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::{ClipboardResult, NullClipboard};
    use url::Url;

    #[derive(Default)]
    struct RecordingClipboard {
        contents: Vec<String>,
    }

    impl ClipboardProvider for RecordingClipboard {
        fn set_text(&mut self, text: &str) -> ClipboardResult<()> {
            self.contents.push(text.to_string());
            Ok(())
        }
    }

    fn response(short_url: &str) -> ShortenResponse {
        ShortenResponse {
            short_url: short_url.to_string(),
            qr_code_base64: None,
        }
    }

    fn offline_client() -> ApiClient {
        ApiClient::new(Url::parse("http://localhost:9").unwrap())
    }

    #[test]
    fn test_new_form_selects_ten_minutes() {
        let form = ShortenForm::new();
        assert_eq!(form.preset(), Some(ExpirationPreset::TenMinutes));
        assert_eq!(form.custom_expires_at(), None);
        assert_eq!(
            form.request().expiration,
            Some(ExpirationPreset::TenMinutes)
        );
    }

    #[test]
    fn test_selecting_preset_clears_custom_timestamp() {
        let mut form = ShortenForm::new();
        form.set_custom_expires_at("2026-03-01T10:00:00Z".parse().unwrap());
        form.select_preset(ExpirationPreset::OneWeek);

        assert_eq!(form.preset(), Some(ExpirationPreset::OneWeek));
        assert_eq!(form.custom_expires_at(), None);
    }

    #[test]
    fn test_custom_timestamp_deselects_preset() {
        let mut form = ShortenForm::new();
        form.set_custom_expires_at("2026-03-01T10:00:00Z".parse().unwrap());

        assert_eq!(form.preset(), None);
        let request = form.request();
        assert_eq!(request.expiration, None);
        assert!(request.expires_at.is_some());
    }

    #[test]
    fn test_request_falls_back_to_one_day_with_nothing_selected() {
        let mut form = ShortenForm::new();
        form.set_custom_expires_at("2026-03-01T10:00:00Z".parse().unwrap());
        form.clear_custom_expires_at();

        assert_eq!(form.request().expiration, Some(ExpirationPreset::OneDay));
    }

    #[test]
    fn test_request_omits_empty_alias() {
        let mut form = ShortenForm::new();
        form.set_original_url("https://example.com/long");
        assert_eq!(form.request().custom_alias, None);

        form.set_custom_alias("mylink");
        assert_eq!(form.request().custom_alias, Some("mylink".to_string()));
    }

    #[tokio::test]
    async fn test_submit_rejects_invalid_url_before_any_request() {
        let mut form = ShortenForm::new();
        form.set_original_url("not a url");

        assert!(!form.submit(&offline_client()).await);
        assert_eq!(form.error(), Some("Invalid URL format"));
        assert_eq!(form.short_url(), None);
    }

    #[tokio::test]
    async fn test_submit_clears_previous_outcome() {
        let mut form = ShortenForm::new();
        form.result = Some(response("https://sho.rt/old"));
        form.copied_at = Some(Instant::now());
        form.set_original_url("not a url");

        form.submit(&offline_client()).await;

        assert_eq!(form.short_url(), None);
        assert!(!form.copied());
        assert!(form.error().is_some());
    }

    #[test]
    fn test_copy_without_result_does_nothing() {
        let mut form = ShortenForm::new();
        let mut clipboard = RecordingClipboard::default();

        assert!(!form.copy_short_url(&mut clipboard));
        assert!(clipboard.contents.is_empty());
        assert!(!form.copied());
    }

    #[test]
    fn test_failed_copy_leaves_confirmation_hidden() {
        let mut form = ShortenForm::new();
        form.result = Some(response("https://sho.rt/abc"));

        assert!(!form.copy_short_url(&mut NullClipboard::new()));
        assert!(!form.copied());
    }

    #[tokio::test(start_paused = true)]
    async fn test_copy_confirmation_expires_after_two_seconds() {
        let mut form = ShortenForm::new();
        form.result = Some(response("https://sho.rt/abc"));
        let mut clipboard = RecordingClipboard::default();

        assert!(form.copy_short_url(&mut clipboard));
        assert_eq!(clipboard.contents, vec!["https://sho.rt/abc".to_string()]);
        assert!(form.copied());

        tokio::time::advance(Duration::from_millis(1999)).await;
        assert!(form.copied());

        tokio::time::advance(Duration::from_millis(1)).await;
        assert!(!form.copied());
    }
}
