//! Collector enumerations.

/// Authentication state of a registry's connector session.
pub mod session_state;
