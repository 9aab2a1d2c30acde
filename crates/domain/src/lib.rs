//! # Servdesk Domain
//!
//! Business domain types for the Servdesk SLA policy service.
//!
//! This crate contains:
//! - The SLA policy value and its sub-objects (business hours, priority
//!   targets, escalation tiers, custom rules, notification toggles)
//! - Holidays and category overrides
//! - Partial-document merging over policy defaults
//! - Domain error types and Result definitions
//! - Configuration structures
//!
//! ## Architecture
//! - Depends only on the foundation tier of `servdesk-common`
//! - Pure data structures, no I/O

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod merge;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
