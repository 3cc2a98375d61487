use thiserror::Error;

/// Transport-level failure of a single probe request
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Connection refused: {url}")]
    ConnectionRefused { url: String },

    #[error("Timeout: {url}")]
    Timeout { url: String },

    #[error("Error: {0}")]
    Request(String),
}

impl ProbeError {
    /// Classify a reqwest failure for the given URL
    pub fn from_reqwest(url: &str, err: reqwest::Error) -> Self {
        // A connect timeout reports both flags; treat it as a timeout.
        if err.is_timeout() {
            Self::Timeout {
                url: url.to_string(),
            }
        } else if err.is_connect() {
            Self::ConnectionRefused {
                url: url.to_string(),
            }
        } else {
            Self::Request(err.to_string())
        }
    }

    /// Description recorded on the failed TestResult
    pub fn description(&self) -> String {
        match self {
            Self::ConnectionRefused { .. } => "Connection refused".to_string(),
            Self::Timeout { .. } => "Timeout".to_string(),
            Self::Request(message) => message.clone(),
        }
    }
}
