//! Blocking HTTP client for an Elasticsearch-style search service.

use std::net::Ipv6Addr;
use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use crate::error::{EsqError, Result};
use crate::query::QueryPayload;

/// Connection handle to one search service endpoint.
#[derive(Debug, Clone)]
pub struct SearchClient {
    /// Underlying HTTP client.
    http: Client,
    /// Endpoint root, always ending in `/`.
    base: Url,
}

impl SearchClient {
    /// Open a handle to `host:port`.
    ///
    /// `host` may carry its own `http://` or `https://` scheme, and a port of its
    /// own which then takes precedence over `port`. Plain hosts use `http`; bare
    /// IPv6 literals are bracketed. Requests made through the handle never time out.
    pub fn connect(host: &str, port: u16) -> Result<Self> {
        let trimmed = host.trim().trim_end_matches('/');
        let raw = if trimmed.contains("://") {
            format!("{trimmed}/")
        } else if trimmed.parse::<Ipv6Addr>().is_ok() {
            format!("http://[{trimmed}]/")
        } else {
            format!("http://{trimmed}/")
        };
        let mut base = Url::parse(&raw).map_err(|_| EsqError::Url(raw.clone()))?;
        if base.cannot_be_a_base() || base.host().is_none() {
            return Err(EsqError::Url(raw));
        }
        if !has_explicit_port(&raw) {
            base.set_port(Some(port)).map_err(|()| EsqError::Url(raw.clone()))?;
        }

        let http = Client::builder().timeout(None::<Duration>).build()?;
        tracing::debug!(endpoint = %base, "search client ready");

        Ok(Self { http, base })
    }

    /// Endpoint root.
    pub const fn base_url(&self) -> &Url {
        &self.base
    }

    /// URL of the `_search` endpoint for an index and optional document type.
    pub fn search_url(&self, index: &str, document_type: Option<&str>) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| EsqError::Url(self.base.to_string()))?
            .pop_if_empty()
            .push(index)
            .extend(document_type)
            .push("_search");
        Ok(url)
    }

    /// Path of the `_search` endpoint as it is sent, e.g. `/book/chapter/_search`.
    pub fn search_path(&self, index: &str, document_type: Option<&str>) -> Result<String> {
        Ok(self.search_url(index, document_type)?.path().to_string())
    }

    /// Submit `payload` and return the service's response unchanged.
    pub fn search(
        &self,
        index: &str,
        document_type: Option<&str>,
        payload: &QueryPayload,
    ) -> Result<Value> {
        let url = self.search_url(index, document_type)?;
        let body = serde_json::to_vec(payload)?;

        tracing::info!(%url, "submitting search");
        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()?;

        let status = response.status();
        let text = response.text()?;
        tracing::info!(status = status.as_u16(), bytes = text.len(), "search response");

        if !status.is_success() {
            return Err(EsqError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}

/// Whether the authority of `url` spells out a port, default ports included.
fn has_explicit_port(url: &str) -> bool {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    let authority = rest.split('/').next().unwrap_or_default();
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, hp)| hp);
    host_port.rsplit_once(':').is_some_and(|(host, port)| {
        !port.is_empty()
            && port.bytes().all(|b| b.is_ascii_digit())
            && (!host.starts_with('[') || host.ends_with(']'))
    })
}
