//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the exporter configuration
//! from a TOML file.
//!
//! # Configuration Structure
//!
//! The configuration file (`config.toml`) contains:
//! - **log_level**, **listen**: process-level settings
//! - **lang**: locale used for status label values (`zh` or anything else for English)
//! - **compatibility_mode**: switches to the status-count naming scheme
//! - **max_download_speed** / **max_upload_speed**: optional bandwidth display values
//! - **rewrite_tracker**: tracker host to alias table
//! - **clients**: one entry per download client to poll
//!
//! # Example
//!
//! ```rust,ignore
//! use pt_exporter::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! config.validate()?;
//! ```

/// Configuration enumerations (client kind, errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

#[cfg(test)]
mod tests;
