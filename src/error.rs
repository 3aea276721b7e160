use reqwest::StatusCode;
use validator::ValidationErrors;

/// Fallback shown to the user when the API gives nothing better.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport failure or an unreadable success body.
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response from the shortening API.
    #[error("API error ({status}): {}", .detail.as_deref().unwrap_or(GENERIC_ERROR_MESSAGE))]
    Api {
        status: StatusCode,
        detail: Option<String>,
    },

    /// Payload rejected before it was sent.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// QR image payload that is not valid base64.
    #[error("Invalid QR image payload: {0}")]
    QrDecode(#[from] base64::DecodeError),

    /// QR image payload that decodes to something other than a PNG.
    #[error("QR image payload is not a PNG")]
    QrNotPng,

    /// Failed to write the QR image to disk.
    #[error("Failed to write QR image: {0}")]
    QrWrite(#[from] std::io::Error),
}

impl ClientError {
    /// The single user-facing error string.
    ///
    /// Surfaces the server-provided `detail` when present, the validation
    /// rule message for payloads rejected locally, and a generic fallback for
    /// everything else. Callers render this inline; there is no retry path.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api {
                detail: Some(detail),
                ..
            } => detail.clone(),
            Self::Validation(errors) => first_validation_message(errors)
                .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string()),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Picks the first human-readable rule message out of validator's error map.
fn first_validation_message(errors: &ValidationErrors) -> Option<String> {
    errors
        .field_errors()
        .values()
        .flat_map(|field| field.iter())
        .find_map(|error| error.message.as_ref().map(|message| message.to_string()))
}
