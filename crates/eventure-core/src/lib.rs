//! Eventure shared configuration, constants and core error types.

pub mod config;
pub mod constants;
pub mod error;
