//! Common data structures.

/// Free-form error carrying a message.
pub mod custom_error;
