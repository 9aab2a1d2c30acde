//! Utility modules for the server layer

pub mod logging;
