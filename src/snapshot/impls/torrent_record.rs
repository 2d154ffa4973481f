use crate::snapshot::structs::torrent_record::TorrentRecord;

impl TorrentRecord {
    /// Hash label value; clients that do not expose one yield an empty string.
    pub fn hash_label(&self) -> &str
    {
        self.hash.as_deref().unwrap_or("")
    }

    /// Category when it is set and not blank.
    pub fn category_label(&self) -> Option<&str>
    {
        self.category.as_deref().map(str::trim).filter(|category| !category.is_empty())
    }
}
