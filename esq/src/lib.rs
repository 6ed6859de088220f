//! esq - Elasticsearch query runner
//!
//! Sends one `query_string` search over boosted fields to an Elasticsearch-style
//! service and hands back the raw response.
//!
//! ## Features
//!
//! - Typed (`<index>/<type>/_search`) and index-only (`<index>/_search`) endpoints
//! - `name^boost` field syntax
//! - YAML config file, environment variables and flags layered over fixed defaults
//! - Pass-through output: the response is printed as received

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod formatter;
pub mod query;
pub mod runner;

pub use cli::Cli;
pub use client::SearchClient;
pub use config::QueryConfig;
pub use error::{EsqError, Result};
pub use formatter::{OutputFormat, render};
pub use query::{FieldBoost, QueryPayload};
pub use runner::run;
