//! REST client for the SLA configuration service
//!
//! - Uses the retrying [`crate::http::HttpClient`] (no direct reqwest calls)
//! - Maps server error bodies back to domain errors, keeping field details

pub mod client;
pub mod errors;

pub use client::{ApiClientConfig, SlaApiClient};
pub use errors::{ApiError, ApiErrorCategory, ErrorBody};
