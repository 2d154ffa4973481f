//! Connector and wire data structures.

/// qBittorrent WebUI connector.
pub mod qbittorrent_client;

/// qBittorrent `sync/maindata` response body.
pub mod qbittorrent_maindata;

/// Transmission RPC connector.
pub mod transmission_client;

/// Transmission RPC envelopes and argument bodies.
pub mod transmission_rpc;
