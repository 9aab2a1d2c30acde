//! # Servdesk Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - SQLite stores for the policy document and holiday calendar
//! - HTTP client with retry
//! - REST client implementing the editor backend
//! - Configuration loading
//!
//! ## Architecture
//! - Implements traits defined in `servdesk-core`
//! - Contains all "impure" code (I/O)

pub mod api;
pub mod config;
pub mod database;
pub mod errors;
pub mod http;

// Re-export commonly used items
pub use api::{ApiClientConfig, ApiError, SlaApiClient};
pub use database::{DbManager, SqliteHolidayRepository, SqlitePolicyRepository};
pub use errors::InfraError;
pub use http::HttpClient;
