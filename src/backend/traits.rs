//! Backend trait definitions.

pub mod pollable_backend;
