use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid rig configuration: {field} {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    HttpStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("failed to parse response from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed response from {url}: {reason}")]
    MalformedResponse { url: String, reason: &'static str },

    #[error("world list is empty, nothing to connect to")]
    NoWorlds,

    #[error("settings error: {0}")]
    Settings(#[from] confy::ConfyError),
}

impl Error {
    pub(crate) fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}
