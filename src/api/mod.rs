//! Client-side API layer for the shortening service.
//!
//! Translates form state into wire requests and API responses back into
//! renderable results.
//!
//! # Modules
//!
//! - [`client`] - HTTP client for the shortening API
//! - [`dto`] - Data Transfer Objects for request/response serialization

pub mod client;
pub mod dto;

pub use client::ApiClient;
