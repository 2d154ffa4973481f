//! Collector registry, one per configured download client.
//!
//! A [`CollectorRegistry`] owns a connector and a [`MetricEmitter`] and runs
//! one poll-and-emit cycle per scrape. Its session follows a two-state
//! machine:
//!
//! - **Unauthenticated**: the scrape logs in first. A failed login yields the
//!   failure metric set and the state is kept.
//! - **Authenticated**: the scrape polls. An authorization failure drops the
//!   session so the *next* scrape logs in again; the current scrape is not
//!   retried. Other failures leave the session untouched.
//!
//! Scrapes against the same registry are serialized by an async mutex held for
//! the whole cycle, so two polls never interleave on one connector. Registries
//! share nothing and run concurrently with each other.
//!
//! [`CollectorRegistry`]: crate::collector::structs::collector_registry::CollectorRegistry
//! [`MetricEmitter`]: crate::metrics::structs::metric_emitter::MetricEmitter

/// Session state enumeration.
pub mod enums;

/// Implementation blocks for the registry.
pub mod impls;

/// Registry data structures.
pub mod structs;
