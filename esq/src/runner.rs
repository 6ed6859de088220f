//! The search run: connect, build the payload, submit.

use serde_json::Value;

use crate::client::SearchClient;
use crate::config::QueryConfig;
use crate::error::Result;

/// Run the configured search and return the service's response.
///
/// Any failure is returned as-is. Nothing is retried.
pub fn run(config: &QueryConfig) -> Result<Value> {
    config.validate()?;

    let client = SearchClient::connect(&config.host, config.port)?;
    let payload = config.payload();
    tracing::debug!(
        payload = %serde_json::to_string(&payload)?,
        index = %config.index,
        document_type = ?config.document_type,
        "built query"
    );

    client.search(&config.index, config.document_type.as_deref(), &payload)
}
