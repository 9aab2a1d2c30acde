//! SLA policy storage ports and the configuration service

pub mod ports;
pub mod service;

pub use service::SlaConfigService;
