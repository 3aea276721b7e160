//! Data Transfer Objects for the shortening API.
//!
//! Wire types use Serde for JSON serialization and validator for the
//! client-side URL rule.

pub mod shorten;
