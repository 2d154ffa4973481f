use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::config::structs::client_config::ClientConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Configuration {
    pub log_level: String,
    pub listen: String,
    pub lang: String,
    pub compatibility_mode: bool,
    pub use_category_as_tracker: bool,
    pub max_download_speed: Option<String>,
    pub max_upload_speed: Option<String>,
    pub rewrite_tracker: BTreeMap<String, String>,
    pub clients: Vec<ClientConfig>,
}
