//! Common utilities and shared functionality.
//!
//! This module contains helper functions and data structures used across
//! the other modules of the exporter.
//!
//! # Utilities
//!
//! - Logging setup
//! - Bandwidth string parsing (`"100Mbps"`, `"1Gbps"`)
//!
//! # Data Structures
//!
//! - `CustomError` - free-form error used during bootstrap

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
