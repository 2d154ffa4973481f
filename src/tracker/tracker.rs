use std::collections::BTreeMap;
use url::{Host, Url};
use crate::snapshot::structs::torrent_record::TorrentRecord;

/// Hostname of `announce_url`, or the alias mapped to it in `rewrite_table`.
/// Returns an empty string when the URL cannot be parsed or has no host.
pub fn resolve_tracker(announce_url: &str, rewrite_table: &BTreeMap<String, String>) -> String
{
    let host = tracker_host(announce_url).unwrap_or_default();
    rewrite(host, rewrite_table)
}

/// Tracker identity of a torrent. With `use_category` set, a non-blank
/// category takes the place of the announce host.
pub fn resolve_identity(record: &TorrentRecord, rewrite_table: &BTreeMap<String, String>, use_category: bool) -> String
{
    if use_category {
        if let Some(category) = record.category_label() {
            return rewrite(category.to_string(), rewrite_table);
        }
    }
    resolve_tracker(&record.tracker, rewrite_table)
}

pub fn tracker_host(announce_url: &str) -> Result<String, url::ParseError>
{
    let parsed = Url::parse(announce_url.trim())?;
    Ok(match parsed.host() {
        None => String::new(),
        Some(Host::Domain(domain)) => domain.to_string(),
        Some(Host::Ipv4(ip)) => ip.to_string(),
        Some(Host::Ipv6(ip)) => ip.to_string(),
    })
}

fn rewrite(identity: String, rewrite_table: &BTreeMap<String, String>) -> String
{
    match rewrite_table.get(&identity) {
        None => identity,
        Some(alias) => alias.clone(),
    }
}

/// Rewrite table as looked up at scrape time. Keys are kept as written and
/// also added in the form a special-scheme URL parser yields (lowercase,
/// punycode), so `Tracker.Example` matches an https announce to that host.
/// A key written in canonical form wins over a derived one.
pub fn normalize_rewrite_table(rewrite_table: &BTreeMap<String, String>) -> BTreeMap<String, String>
{
    let mut normalized = rewrite_table.clone();
    for (key, alias) in rewrite_table.iter() {
        if key.is_empty() {
            continue;
        }
        if let Ok(host) = tracker_host(&format!("http://{key}/")) {
            if !host.is_empty() && host != *key {
                normalized.entry(host).or_insert_with(|| alias.clone());
            }
        }
    }
    normalized
}
