//! # Servdesk API
//!
//! HTTP application layer - handlers, routing and the main entry point.
//!
//! This crate contains:
//! - REST handlers for the SLA configuration and holiday calendar
//! - Application context (dependency injection)
//! - Error responses and logging setup
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture behind an axum router

pub mod commands;
pub mod context;
pub mod errors;
pub mod router;
pub mod utils;

// Re-export for convenience
pub use context::AppContext;
pub use errors::AppError;
pub use router::build_router;
