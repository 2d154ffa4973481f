//! Implementation blocks for configuration types.

pub mod client_config;
pub mod client_kind;
pub mod configuration;
pub mod configuration_error;
