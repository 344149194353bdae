//! Arbor common types, errors, and configuration.
//!
//! This crate provides shared definitions used across the Arbor workspace.

pub mod config;
pub mod error;
pub mod key;

pub use config::DemoConfig;
pub use error::{ArborError, Result};
pub use key::{BptKey, ByteSliceKey, StringKey};
