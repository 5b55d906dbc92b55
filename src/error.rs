//! Error types for Steam Web API calls.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SteamError {
    /// Connection, timeout or body read failure
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// Body was not the JSON we expected
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl SteamError {
    /// True for failures of the request itself, as opposed to a response we
    /// received but could not make sense of.
    pub fn is_transport(&self) -> bool {
        matches!(self, SteamError::Transport(_) | SteamError::Status { .. })
    }
}

pub type Result<T> = std::result::Result<T, SteamError>;
