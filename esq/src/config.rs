//! Query configuration.
//!
//! Every option defaults to the values the tool has always searched with, so an
//! empty configuration runs `Searching` over `title^2, summary^1` in
//! `localhost:9200/book/chapter`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{EsqError, Result};
use crate::query::{FieldBoost, QueryPayload};

/// Default search service host.
pub const DEFAULT_HOST: &str = "localhost";
/// Default search service port.
pub const DEFAULT_PORT: u16 = 9200;
/// Default index.
pub const DEFAULT_INDEX: &str = "book";
/// Default document type.
pub const DEFAULT_DOCUMENT_TYPE: &str = "chapter";
/// Default search term.
pub const DEFAULT_SEARCH_TERM: &str = "Searching";

/// Everything needed to run one search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QueryConfig {
    /// Service host, optionally with an `http://` or `https://` scheme.
    pub host: String,
    /// Service port.
    pub port: u16,
    /// Target index.
    pub index: String,
    /// Document type; `None` targets the index-only `_search` endpoint.
    pub document_type: Option<String>,
    /// Search expression handed to `query_string`.
    pub search_term: String,
    /// Fields searched, with optional boosts.
    pub fields: Vec<FieldBoost>,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            index: DEFAULT_INDEX.to_string(),
            document_type: Some(DEFAULT_DOCUMENT_TYPE.to_string()),
            search_term: DEFAULT_SEARCH_TERM.to_string(),
            fields: vec![
                FieldBoost::boosted("title", 2.0),
                FieldBoost::boosted("summary", 1.0),
            ],
        }
    }
}

impl QueryConfig {
    /// Parse a YAML document. Keys that are absent keep their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a YAML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Check the configuration before anything touches the network.
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(EsqError::InvalidConfig("host is empty".to_string()));
        }
        if self.port == 0 {
            return Err(EsqError::InvalidConfig("port must be non-zero".to_string()));
        }
        if self.index.trim().is_empty() {
            return Err(EsqError::InvalidConfig("index is empty".to_string()));
        }
        if self
            .document_type
            .as_deref()
            .is_some_and(|t| t.trim().is_empty())
        {
            return Err(EsqError::InvalidConfig(
                "document type is empty; omit it to search the whole index".to_string(),
            ));
        }
        if self.fields.is_empty() {
            return Err(EsqError::InvalidConfig(
                "at least one field is required".to_string(),
            ));
        }
        Ok(())
    }

    /// Request body for this configuration.
    pub fn payload(&self) -> QueryPayload {
        QueryPayload::new(self.search_term.clone(), &self.fields)
    }
}

/// Default config file location: `<config dir>/esq/config.yaml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("esq").join("config.yaml"))
}
