use crate::metrics::enums::naming_scheme::NamingScheme;
use crate::metrics::structs::metric_names::MetricNames;

impl MetricNames {
    pub fn new(scheme: NamingScheme) -> MetricNames
    {
        let ns = scheme.namespace();
        MetricNames {
            up: format!("{ns}_up"),
            download_bytes_total: format!("{ns}_download_bytes_total"),
            upload_bytes_total: format!("{ns}_upload_bytes_total"),
            download_speed_bytes: format!("{ns}_download_speed_bytes"),
            upload_speed_bytes: format!("{ns}_upload_speed_bytes"),
            free_space_on_disk_bytes: format!("{ns}_free_space_on_disk_bytes"),
            tracker_torrent: format!("{ns}_tracker_torrent"),
            tracker_torrent_size_bytes: format!("{ns}_tracker_torrent_size_bytes"),
            tracker_torrent_status: format!("{ns}_tracker_torrent_status"),
            tracker_torrent_download_bytes_total: format!("{ns}_tracker_torrent_download_bytes_total"),
            tracker_torrent_upload_bytes_total: format!("{ns}_tracker_torrent_upload_bytes_total"),
            torrents_count: format!("{ns}_torrents_count"),
            max_download_speed_bytes: format!("{ns}_max_download_speed_bytes"),
            max_upload_speed_bytes: format!("{ns}_max_upload_speed_bytes"),
        }
    }
}
