//! Pull-based metrics endpoint.
//!
//! Serves `GET /metrics` in the Prometheus text exposition format (0.0.4).
//! Each request scrapes every collector registry concurrently, merges the
//! resulting metric sets so each family carries a single `# HELP`/`# TYPE`
//! header, and renders the result. A failing client only lowers its own
//! `*_up` sample; the response is always `200 OK`.
//!
//! Any other path answers `404 Not Found`.

/// Data structures shared with the HTTP handlers.
pub mod structs;

/// Server setup, routes and handlers.
#[allow(clippy::module_inception)]
pub mod http;
