//! # PT Exporter
//!
//! A Prometheus exporter for BitTorrent download clients, built with Rust and
//! the Actix-web framework.
//!
//! ## Overview
//!
//! PT Exporter polls qBittorrent and Transmission instances on every scrape
//! and republishes their state as a normalized, label-dimensioned metric set:
//! global transfer counters and speeds, free disk space, and per-torrent
//! size, status and transfer counters grouped by tracker.
//!
//! ## Features
//!
//! - **Multiple Clients**: any number of qBittorrent and Transmission instances
//! - **Status Normalization**: client-specific torrent states mapped onto one
//!   canonical set, rendered in Chinese or English
//! - **Tracker Rewriting**: announce hosts renamed through an operator table,
//!   or replaced by the torrent category
//! - **Two Naming Schemes**: detailed per-torrent `pt_*` series, or
//!   `downloader_*` status counts for existing dashboards
//! - **Isolation**: a failing client only lowers its own `*_up` sample
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pt_exporter::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! ```
//!
//! ## Modules
//!
//! - [`backend`] - qBittorrent and Transmission connectors
//! - [`collector`] - Per-client scrape orchestration and session state
//! - [`common`] - Logging setup, error helpers and bandwidth parsing
//! - [`config`] - Configuration management and TOML parsing
//! - [`http`] - The `/metrics` endpoint
//! - [`metrics`] - Metric sets, aggregation, emission and rendering
//! - [`snapshot`] - Data handed from connectors to the exporter core
//! - [`status`] - Torrent status normalization
//! - [`structs`] - CLI argument parsing
//! - [`tracker`] - Tracker identity resolution

/// Download client connectors.
pub mod backend;

/// Collector registries, one per configured client.
pub mod collector;

/// Common utilities and shared functionality.
pub mod common;

/// Configuration management module.
pub mod config;

/// Pull-based metrics endpoint.
pub mod http;

/// Metric normalization, aggregation and emission.
pub mod metrics;

/// Backend snapshot data contract.
pub mod snapshot;

/// Torrent status normalization.
pub mod status;

/// CLI argument structures.
pub mod structs;

/// Tracker identity resolution.
pub mod tracker;
