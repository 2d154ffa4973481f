use std::fmt;
use crate::config::enums::client_kind::ClientKind;
use crate::status::enums::canonical_status::CanonicalStatus;

pub const LANG_CHINESE: &str = "zh";

impl CanonicalStatus {
    pub const ALL: [CanonicalStatus; 10] = [
        CanonicalStatus::Unknown,
        CanonicalStatus::Allocating,
        CanonicalStatus::Downloading,
        CanonicalStatus::Uploading,
        CanonicalStatus::Checking,
        CanonicalStatus::Errored,
        CanonicalStatus::Stalled,
        CanonicalStatus::Queued,
        CanonicalStatus::Paused,
        CanonicalStatus::Moving,
    ];

    /// Total mapping from a native status word; words missing from the
    /// client's table become `Unknown`.
    pub fn normalize(kind: ClientKind, native: &str) -> CanonicalStatus
    {
        Self::lookup(kind, native).unwrap_or(CanonicalStatus::Unknown)
    }

    pub fn lookup(kind: ClientKind, native: &str) -> Option<CanonicalStatus>
    {
        match kind {
            ClientKind::qbittorrent => Self::lookup_qbittorrent(native),
            ClientKind::transmission => Self::lookup_transmission(native),
        }
    }

    fn lookup_qbittorrent(native: &str) -> Option<CanonicalStatus>
    {
        match native {
            "unknown" => Some(CanonicalStatus::Unknown),
            "allocating" => Some(CanonicalStatus::Allocating),
            "downloading" | "metaDL" | "forcedDL" => Some(CanonicalStatus::Downloading),
            "uploading" | "forcedUP" => Some(CanonicalStatus::Uploading),
            "checkingUP" | "checkingDL" | "checkingResumeData" => Some(CanonicalStatus::Checking),
            "missingFiles" | "error" => Some(CanonicalStatus::Errored),
            "stalledUP" | "stalledDL" => Some(CanonicalStatus::Stalled),
            "queuedUP" | "queuedDL" => Some(CanonicalStatus::Queued),
            // qBittorrent 5 renamed paused* to stopped*
            "pausedUP" | "pausedDL" | "stoppedUP" | "stoppedDL" => Some(CanonicalStatus::Paused),
            "moving" => Some(CanonicalStatus::Moving),
            _ => None,
        }
    }

    fn lookup_transmission(native: &str) -> Option<CanonicalStatus>
    {
        match native {
            "downloading" => Some(CanonicalStatus::Downloading),
            "seeding" => Some(CanonicalStatus::Uploading),
            "checking" => Some(CanonicalStatus::Checking),
            "check pending" | "download pending" | "seed pending" => Some(CanonicalStatus::Queued),
            "stopped" => Some(CanonicalStatus::Paused),
            _ => None,
        }
    }

    pub fn ordinal(&self) -> u8
    {
        match self {
            CanonicalStatus::Unknown => 0,
            CanonicalStatus::Allocating => 1,
            CanonicalStatus::Downloading => 2,
            CanonicalStatus::Uploading => 3,
            CanonicalStatus::Checking => 4,
            CanonicalStatus::Errored => 5,
            CanonicalStatus::Stalled => 6,
            CanonicalStatus::Queued => 7,
            CanonicalStatus::Paused => 8,
            CanonicalStatus::Moving => 9,
        }
    }

    /// Label text for `locale`. Only `zh` is recognized; anything else renders English.
    pub fn render(&self, locale: &str) -> &'static str
    {
        if locale == LANG_CHINESE {
            match self {
                CanonicalStatus::Unknown => "未知",
                CanonicalStatus::Allocating => "分配",
                CanonicalStatus::Downloading => "下载中",
                CanonicalStatus::Uploading => "上传中",
                CanonicalStatus::Checking => "校验",
                CanonicalStatus::Errored => "错误",
                CanonicalStatus::Stalled => "等待",
                CanonicalStatus::Queued => "排队",
                CanonicalStatus::Paused => "暂停",
                CanonicalStatus::Moving => "移动中",
            }
        } else {
            match self {
                CanonicalStatus::Unknown => "Unknown",
                CanonicalStatus::Allocating => "Allocating",
                CanonicalStatus::Downloading => "Downloading",
                CanonicalStatus::Uploading => "Uploading",
                CanonicalStatus::Checking => "Checking",
                CanonicalStatus::Errored => "Errored",
                CanonicalStatus::Stalled => "Stalled",
                CanonicalStatus::Queued => "Queued",
                CanonicalStatus::Paused => "Paused",
                CanonicalStatus::Moving => "Moving",
            }
        }
    }
}

impl fmt::Display for CanonicalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(""))
    }
}
