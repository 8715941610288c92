//! Infrastructure layer: adapters for config, seed data, logging, and storage paths.

pub mod config;
pub mod contracts;
pub mod demo_sender;
pub mod error;
pub mod logging;
pub mod seed;
pub mod storage_layout;
#[cfg(test)]
pub mod stubs;

/// Returns the infra module name for smoke checks.
pub fn module_name() -> &'static str {
    "infra"
}
