//! Implementation blocks for the registry.

pub mod collector_registry;
