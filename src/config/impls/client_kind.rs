use std::fmt;
use crate::config::enums::client_kind::ClientKind;

impl fmt::Display for ClientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientKind::qbittorrent => write!(f, "qbittorrent"),
            ClientKind::transmission => write!(f, "transmission"),
        }
    }
}
