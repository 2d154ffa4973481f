//! Registry data structures.

pub mod collector_registry;
