//! # Shorten CLI
//!
//! An interactive terminal client for a URL-shortening service.
//!
//! ## Architecture
//!
//! The crate separates the form logic from the terminal front end:
//!
//! - **Form** ([`form`]) - Field state, submission rules and the
//!   copy-confirmation window
//! - **API** ([`api`]) - HTTP client and wire types for `POST /shorten`
//! - **Clipboard** ([`clipboard`]) - Provider trait with system and no-op
//!   implementations
//! - **Expiration** ([`expiration`]) - Preset tokens and custom timestamp
//!   parsing
//! - **QR** ([`qr`]) - Decoding and saving base64 PNG payloads
//!
//! ## Quick Start
//!
//! ```bash
//! # Point the client at the API
//! export API_BASE_URL="http://localhost:8000"
//!
//! # Run the interactive form
//! cargo run
//!
//! # Or shorten in one shot
//! cargo run -- shorten --url https://example.com/very/long/path
//! ```
//!
//! ## Configuration
//!
//! Client configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod expiration;
pub mod form;
pub mod qr;

pub use error::ClientError;
pub use form::ShortenForm;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::api::ApiClient;
    pub use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
    pub use crate::clipboard::ClipboardProvider;
    pub use crate::error::ClientError;
    pub use crate::expiration::ExpirationPreset;
    pub use crate::form::ShortenForm;
}
