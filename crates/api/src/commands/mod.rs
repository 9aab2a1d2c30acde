//! HTTP handlers (client → backend bridge)
//!
//! Each handler times its work and reports the outcome through
//! [`log_request_outcome`](crate::utils::logging::log_request_outcome).

pub mod configuration;
pub mod health;
pub mod holidays;

pub use configuration::{get_configuration, save_configuration};
pub use health::health;
pub use holidays::{create_holiday, delete_holiday, list_holidays};
