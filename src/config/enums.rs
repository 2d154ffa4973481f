//! Configuration enumerations.

/// Supported download client kinds.
pub mod client_kind;

/// Errors raised while loading or validating the configuration.
pub mod configuration_error;
