use url::Url;
use crate::backend::errors::BackendError;
use crate::backend::structs::qbittorrent_client::QbittorrentClient;
use crate::backend::structs::transmission_client::TransmissionClient;
use crate::backend::traits::pollable_backend::PollableBackend;
use crate::config::enums::client_kind::ClientKind;
use crate::config::structs::client_config::ClientConfig;

pub fn build_backend(config: &ClientConfig) -> Result<Box<dyn PollableBackend>, BackendError>
{
    Ok(match config.kind {
        ClientKind::qbittorrent => Box::new(QbittorrentClient::new(config)?),
        ClientKind::transmission => Box::new(TransmissionClient::new(config)?),
    })
}

/// `host[:port]` of a client url, used as the `host` constant label. Falls
/// back to the raw url when it cannot be parsed.
pub fn client_host(url: &str) -> String
{
    match Url::parse(url.trim()) {
        Ok(parsed) => match (parsed.host_str(), parsed.port()) {
            (Some(host), Some(port)) => format!("{host}:{port}"),
            (Some(host), None) => host.to_string(),
            (None, _) => url.to_string(),
        },
        Err(_) => url.to_string(),
    }
}
