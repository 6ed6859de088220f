//! Error types for esq.

use thiserror::Error;

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, EsqError>;

/// Everything that can abort a search run.
///
/// None of these are recovered from: the binary reports the error and exits.
#[derive(Debug, Error)]
pub enum EsqError {
    /// Configuration rejected before any network activity.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A `name^boost` field specification could not be parsed.
    #[error("invalid field '{spec}': {reason}")]
    InvalidField {
        /// The text as given.
        spec: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// Config file is not valid YAML for a query configuration.
    #[error("config file error: {0}")]
    Config(#[from] serde_yaml::Error),

    /// Reading a config file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Endpoint address does not form a usable URL.
    #[error("invalid endpoint '{0}'")]
    Url(String),

    /// Transport-level failure talking to the service (refused, reset, DNS, ...).
    #[error("connection error: {0}")]
    Connection(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("search service returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Error body as returned by the service.
        body: String,
    },

    /// The service answered with something that is not JSON.
    #[error("response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl EsqError {
    /// Whether the failure happened before a response was received.
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}
