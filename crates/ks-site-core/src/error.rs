use thiserror::Error;

/// Failures of a document load phase. Always caught at the phase boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SiteError {
    #[error("fetch failed for {path}: {message}")]
    Transport { path: String, message: String },

    #[error("HTTP {status} for {path}")]
    Status { path: String, status: u16 },

    #[error("invalid JSON in {path}: {message}")]
    Parse { path: String, message: String },

    #[error("unexpected document shape in {path}")]
    Shape { path: String },
}

impl SiteError {
    pub fn transport(path: &str, message: impl Into<String>) -> Self {
        SiteError::Transport {
            path: path.to_owned(),
            message: message.into(),
        }
    }

    pub fn parse(path: &str, err: serde_json::Error) -> Self {
        SiteError::Parse {
            path: path.to_owned(),
            message: err.to_string(),
        }
    }
}
