//! Tracker identity resolution.
//!
//! Torrents are grouped by the tracker they announce to. The identity is the
//! hostname of the announce URL, optionally replaced by an operator alias from
//! the `rewrite_tracker` table. Unparsable URLs never fail a scrape; they
//! resolve to an empty identity.

#[allow(clippy::module_inception)]
pub mod tracker;
