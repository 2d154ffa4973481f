//! Implementation blocks for the connectors.

pub mod qbittorrent_client;
pub mod qbittorrent_maindata;
pub mod transmission_client;
pub mod transmission_rpc;
