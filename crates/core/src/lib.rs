//! # Servdesk Core
//!
//! Business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces for policy and holiday storage and for the REST backend
//! - The server-side configuration service
//! - The policy editor session
//!
//! ## Architecture Principles
//! - Only depends on `servdesk-common` and `servdesk-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits

pub mod editor;
pub mod sla;

pub use editor::{EditorSection, Notice, NoticeKind, PolicyEditor};
pub use sla::ports::{HolidayStore, PolicyStore, SlaBackend};
pub use sla::SlaConfigService;
