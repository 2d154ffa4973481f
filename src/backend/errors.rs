use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Decode error: {0}")]
    Decode(String),
}

impl BackendError {
    pub fn is_authentication(&self) -> bool {
        matches!(self, BackendError::Authentication(_))
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            BackendError::Decode(error.to_string())
        } else {
            BackendError::Transport(error.to_string())
        }
    }
}

impl From<serde_json::Error> for BackendError {
    fn from(error: serde_json::Error) -> Self {
        BackendError::Decode(error.to_string())
    }
}
