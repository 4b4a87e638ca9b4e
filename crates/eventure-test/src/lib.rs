//! Eventure integration test support.
//!
//! Re-exports the workspace crates under one roof so scenario tests can use short paths.

pub use eventure_core::config;
pub use eventure_service as service;
pub use eventure_store as store;
