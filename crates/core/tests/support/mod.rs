//! Shared test helpers for `servdesk-core` integration tests.
#![allow(dead_code)]

pub mod repositories;
