use std::time::Duration;
use crate::config::structs::client_config::ClientConfig;

pub const DEFAULT_CLIENT_TIMEOUT: u64 = 30;

impl ClientConfig {
    pub fn request_timeout(&self) -> Duration
    {
        Duration::from_secs(self.timeout.unwrap_or(DEFAULT_CLIENT_TIMEOUT))
    }
}
