//! Command line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{QueryConfig, default_config_path};
use crate::error::Result;
use crate::formatter::OutputFormat;
use crate::query::FieldBoost;

/// esq - run a boosted multi-field query against an Elasticsearch-style service.
///
/// With no options it searches `Searching` over `title^2, summary^1` in
/// `book/chapter` on `localhost:9200` and prints the raw response.
#[derive(Parser, Debug)]
#[command(name = "esq")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// YAML config file (default: <config dir>/esq/config.yaml, if present).
    #[arg(short, long, env = "ESQ_CONFIG")]
    pub config: Option<PathBuf>,

    /// Search service host, optionally with scheme.
    #[arg(long, env = "ESQ_HOST")]
    pub host: Option<String>,

    /// Search service port.
    #[arg(long, env = "ESQ_PORT")]
    pub port: Option<u16>,

    /// Index to search.
    #[arg(long, env = "ESQ_INDEX")]
    pub index: Option<String>,

    /// Document type within the index.
    #[arg(long = "doc-type", env = "ESQ_DOC_TYPE")]
    pub doc_type: Option<String>,

    /// Search the whole index (`<index>/_search`); overrides any document type.
    #[arg(long)]
    pub no_doc_type: bool,

    /// Search expression.
    #[arg(short, long, env = "ESQ_QUERY")]
    pub query: Option<String>,

    /// Field to search, as NAME or NAME^BOOST. Repeat to search several fields.
    #[arg(short = 'f', long = "field", value_name = "NAME[^BOOST]")]
    pub fields: Vec<FieldBoost>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,

    /// Print the request instead of sending it.
    #[arg(long)]
    pub print_query: bool,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Build the effective configuration: defaults, then the config file, then flags.
    pub fn resolve_config(&self) -> Result<QueryConfig> {
        let base = match &self.config {
            Some(path) => QueryConfig::load(path)?,
            None => match default_config_path().filter(|p| p.is_file()) {
                Some(path) => QueryConfig::load(&path)?,
                None => QueryConfig::default(),
            },
        };
        Ok(self.apply(base))
    }

    /// Apply command line overrides on top of `config`.
    pub fn apply(&self, mut config: QueryConfig) -> QueryConfig {
        if let Some(host) = &self.host {
            config.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(index) = &self.index {
            config.index.clone_from(index);
        }
        if let Some(doc_type) = &self.doc_type {
            config.document_type = Some(doc_type.clone());
        }
        if self.no_doc_type {
            config.document_type = None;
        }
        if let Some(query) = &self.query {
            config.search_term.clone_from(query);
        }
        if !self.fields.is_empty() {
            config.fields.clone_from(&self.fields);
        }
        config
    }
}
