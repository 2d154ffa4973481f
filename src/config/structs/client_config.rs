use serde::{Deserialize, Serialize};
use crate::config::enums::client_kind::ClientKind;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ClientConfig {
    pub name: String,
    pub kind: ClientKind,
    pub url: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    pub timeout: Option<u64>,
}
