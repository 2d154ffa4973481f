pub mod backend_snapshot;
pub mod torrent_record;
