use std::sync::Arc;
use crate::config::enums::client_kind::ClientKind;
use crate::metrics::aggregator::aggregate;
use crate::metrics::enums::metric_kind::MetricKind;
use crate::metrics::enums::naming_scheme::NamingScheme;
use crate::metrics::structs::emitter_options::EmitterOptions;
use crate::metrics::structs::metric_emitter::MetricEmitter;
use crate::metrics::structs::metric_family::LabelSet;
use crate::metrics::structs::metric_names::MetricNames;
use crate::metrics::structs::metric_set::MetricSet;
use crate::snapshot::structs::backend_snapshot::BackendSnapshot;
use crate::status::enums::status_bucket::StatusBucket;
use crate::tracker::tracker::resolve_identity;

pub const COMPATIBILITY_VERSION: &str = "v0.0.0";

impl MetricEmitter {
    pub fn new(kind: ClientKind, name: &str, host: &str, options: Arc<EmitterOptions>) -> MetricEmitter
    {
        let mut const_labels = vec![
            (String::from("name"), name.to_string()),
            (String::from("host"), host.to_string()),
            (String::from("client"), kind.to_string()),
        ];
        if options.scheme == NamingScheme::Compatibility {
            const_labels.push((String::from("version"), String::from(COMPATIBILITY_VERSION)));
        }
        MetricEmitter {
            kind,
            names: MetricNames::new(options.scheme),
            options,
            const_labels,
        }
    }

    pub fn scheme(&self) -> NamingScheme
    {
        self.options.scheme
    }

    /// Builds the metric set of one scrape. `None` is the failure signal: the
    /// set then holds only `up 0` and the static bandwidth gauges.
    pub fn emit(&self, snapshot: Option<&BackendSnapshot>) -> MetricSet
    {
        let mut set = MetricSet::new();
        match snapshot {
            None => {
                self.add(&mut set, &self.names.up, "Whether the last poll of the download client succeeded.", MetricKind::Gauge, vec![], 0.0);
                self.emit_bandwidth_limits(&mut set);
            }
            Some(snapshot) => {
                self.add(&mut set, &self.names.up, "Whether the last poll of the download client succeeded.", MetricKind::Gauge, vec![], 1.0);
                self.emit_bandwidth_limits(&mut set);
                self.emit_global(&mut set, snapshot);
                match self.options.scheme {
                    NamingScheme::Detailed => self.emit_detailed(&mut set, snapshot),
                    NamingScheme::Compatibility => self.emit_compatibility(&mut set, snapshot),
                }
            }
        }
        set
    }

    fn emit_bandwidth_limits(&self, set: &mut MetricSet)
    {
        if self.options.scheme == NamingScheme::Compatibility {
            return;
        }
        if self.options.max_download_speed > 0 {
            self.add(set, &self.names.max_download_speed_bytes, "Configured maximum download bandwidth in bytes.", MetricKind::Gauge, vec![], self.options.max_download_speed as f64);
        }
        if self.options.max_upload_speed > 0 {
            self.add(set, &self.names.max_upload_speed_bytes, "Configured maximum upload bandwidth in bytes.", MetricKind::Gauge, vec![], self.options.max_upload_speed as f64);
        }
    }

    fn emit_global(&self, set: &mut MetricSet, snapshot: &BackendSnapshot)
    {
        let status = &snapshot.status;
        self.add(set, &self.names.download_bytes_total, "Total bytes downloaded by the client.", MetricKind::Counter, vec![], status.downloaded as f64);
        self.add(set, &self.names.upload_bytes_total, "Total bytes uploaded by the client.", MetricKind::Counter, vec![], status.uploaded as f64);
        self.add(set, &self.names.download_speed_bytes, "Current download speed in bytes per second.", MetricKind::Gauge, vec![], status.download_speed as f64);
        self.add(set, &self.names.upload_speed_bytes, "Current upload speed in bytes per second.", MetricKind::Gauge, vec![], status.upload_speed as f64);
        if let Some(free_space) = status.free_space_on_disk {
            self.add(set, &self.names.free_space_on_disk_bytes, "Free space on the download disk in bytes.", MetricKind::Gauge, vec![], free_space as f64);
        }
    }

    fn emit_detailed(&self, set: &mut MetricSet, snapshot: &BackendSnapshot)
    {
        for record in snapshot.torrents.iter() {
            let tracker = resolve_identity(record, &self.options.rewrite_tracker, self.options.use_category_as_tracker);
            let bucket = StatusBucket::classify(self.kind, &record.state);
            let labels = vec![
                (String::from("torrent_hash"), record.hash_label().to_string()),
                (String::from("torrent_name"), record.name.clone()),
                (String::from("tracker"), tracker),
            ];
            self.add(set, &self.names.tracker_torrent, "Torrent present in the client.", MetricKind::Gauge, labels.clone(), 1.0);
            self.add(set, &self.names.tracker_torrent_size_bytes, "Torrent size in bytes.", MetricKind::Gauge, labels.clone(), record.size as f64);
            self.add(set, &self.names.tracker_torrent_status, "Torrent status ordinal.", MetricKind::Gauge, labels.clone(), f64::from(bucket.ordinal()));
            self.add(set, &self.names.tracker_torrent_download_bytes_total, "Bytes downloaded for the torrent.", MetricKind::Counter, labels.clone(), record.downloaded as f64);
            self.add(set, &self.names.tracker_torrent_upload_bytes_total, "Bytes uploaded for the torrent.", MetricKind::Counter, labels, record.uploaded as f64);
        }
    }

    fn emit_compatibility(&self, set: &mut MetricSet, snapshot: &BackendSnapshot)
    {
        let mut keys = Vec::with_capacity(snapshot.torrents.len());
        for record in snapshot.torrents.iter() {
            let tracker = resolve_identity(record, &self.options.rewrite_tracker, self.options.use_category_as_tracker);
            let bucket = StatusBucket::classify(self.kind, &record.state);
            let labels = vec![
                (String::from("torrent_name"), record.name.clone()),
                (String::from("tracker"), tracker.clone()),
            ];
            self.add(set, &self.names.tracker_torrent_download_bytes_total, "Bytes downloaded for the torrent.", MetricKind::Counter, labels.clone(), record.downloaded as f64);
            self.add(set, &self.names.tracker_torrent_upload_bytes_total, "Bytes uploaded for the torrent.", MetricKind::Counter, labels, record.uploaded as f64);
            keys.push((bucket.label(&self.options.lang).into_owned(), tracker));
        }

        for count in aggregate(keys) {
            let labels = vec![
                (String::from("status"), count.status),
                (String::from("tracker"), count.tracker),
            ];
            self.add(set, &self.names.torrents_count, "Number of torrents per status and tracker.", MetricKind::Gauge, labels, count.count as f64);
        }
    }

    fn add(&self, set: &mut MetricSet, name: &str, help: &str, kind: MetricKind, labels: LabelSet, value: f64)
    {
        let mut full = Vec::with_capacity(self.const_labels.len() + labels.len());
        full.extend(self.const_labels.iter().cloned());
        full.extend(labels);
        set.add(name, help, kind, full, value);
    }
}
