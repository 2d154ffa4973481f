//! Download client connectors.
//!
//! Each supported client kind implements the [`PollableBackend`] capability:
//! `login`, `fetch_status` and `fetch_torrents`, plus a combined `poll` that
//! produces a full [`BackendSnapshot`]. Connectors own their session state
//! (qBittorrent `SID` cookie, Transmission session id) and enforce the
//! configured request timeout; the collector only sees snapshots and
//! [`BackendError`]s.
//!
//! # Supported clients
//!
//! - **qBittorrent**: WebUI API v2 (`/api/v2/auth/login`, `/api/v2/sync/maindata`)
//! - **Transmission**: JSON RPC (`session-stats`, `session-get`, `free-space`, `torrent-get`)
//!
//! # Errors
//!
//! Authorization failures are reported as [`BackendError::Authentication`] so
//! the collector can drop its session and log in again on the next scrape.
//! Network failures and non-2xx responses are `Transport`, malformed bodies
//! are `Decode`.
//!
//! [`PollableBackend`]: crate::backend::traits::pollable_backend::PollableBackend
//! [`BackendSnapshot`]: crate::snapshot::structs::backend_snapshot::BackendSnapshot
//! [`BackendError`]: crate::backend::errors::BackendError
//! [`BackendError::Authentication`]: crate::backend::errors::BackendError::Authentication

/// Connector construction from client configuration.
pub mod connector;

/// Error types for backend operations.
pub mod errors;

/// Implementation blocks for the connectors.
pub mod impls;

/// Connector and wire data structures.
pub mod structs;

/// Pollable backend trait definition.
pub mod traits;
