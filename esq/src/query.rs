//! Query payload construction.
//!
//! The payload is a `query_string` query over a list of boosted fields:
//!
//! ```json
//! {"query": {"query_string": {"query": "Searching", "fields": ["title^2", "summary^1"]}}}
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EsqError, Result};

/// A field name with an optional relevance boost, written `name` or `name^boost`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FieldBoost {
    /// Field name as known to the index mapping.
    pub name: String,
    /// Boost multiplier, omitted from the wire form when `None`.
    pub boost: Option<f64>,
}

impl FieldBoost {
    /// Field with an explicit boost.
    pub fn boosted(name: impl Into<String>, boost: f64) -> Self {
        Self {
            name: name.into(),
            boost: Some(boost),
        }
    }

    /// Field without a boost.
    pub fn plain(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            boost: None,
        }
    }
}

impl fmt::Display for FieldBoost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // f64 Display already drops a trailing ".0", so 2.0 renders as "2".
        match self.boost {
            Some(boost) => write!(f, "{}^{boost}", self.name),
            None => f.write_str(&self.name),
        }
    }
}

impl FromStr for FieldBoost {
    type Err = EsqError;

    fn from_str(spec: &str) -> Result<Self> {
        let invalid = |reason| EsqError::InvalidField {
            spec: spec.to_string(),
            reason,
        };

        let (name, boost) = match spec.rsplit_once('^') {
            Some((name, raw)) => {
                let boost: f64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| invalid("boost is not a number"))?;
                if !boost.is_finite() || boost < 0.0 {
                    return Err(invalid("boost must be a finite, non-negative number"));
                }
                (name.trim(), Some(boost))
            }
            None => (spec.trim(), None),
        };

        if name.is_empty() {
            return Err(invalid("field name is empty"));
        }

        Ok(Self {
            name: name.to_string(),
            boost,
        })
    }
}

impl TryFrom<String> for FieldBoost {
    type Error = EsqError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<FieldBoost> for String {
    fn from(field: FieldBoost) -> Self {
        field.to_string()
    }
}

/// Request body of a `query_string` search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryPayload {
    /// Top-level `query` clause.
    pub query: QueryClause,
}

/// The `query` clause, holding a single `query_string` query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryClause {
    /// The `query_string` query.
    pub query_string: QueryString,
}

/// A `query_string` query over boosted fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryString {
    /// Search expression, parsed by the engine.
    pub query: String,
    /// Fields searched, in order.
    pub fields: Vec<FieldBoost>,
}

impl QueryPayload {
    /// Build a payload searching `term` over `fields`.
    pub fn new(term: impl Into<String>, fields: &[FieldBoost]) -> Self {
        Self {
            query: QueryClause {
                query_string: QueryString {
                    query: term.into(),
                    fields: fields.to_vec(),
                },
            },
        }
    }

    /// Payload as a JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_boosted_and_plain_fields() {
        let f: FieldBoost = "title^2".parse().unwrap();
        assert_eq!(f, FieldBoost::boosted("title", 2.0));

        let f: FieldBoost = "body^0.5".parse().unwrap();
        assert_eq!(f.boost, Some(0.5));

        let f: FieldBoost = "summary".parse().unwrap();
        assert_eq!(f, FieldBoost::plain("summary"));
    }

    #[test]
    fn splits_on_last_caret() {
        let f: FieldBoost = "odd^name^3".parse().unwrap();
        assert_eq!(f.name, "odd^name");
        assert_eq!(f.boost, Some(3.0));
    }

    #[test]
    fn rejects_bad_fields() {
        for spec in ["", "^2", "title^", "title^x", "title^-1", "title^inf", "title^NaN"] {
            assert!(
                matches!(spec.parse::<FieldBoost>(), Err(EsqError::InvalidField { .. })),
                "{spec} should be rejected"
            );
        }
    }

    #[test]
    fn renders_boost_without_trailing_zero() {
        assert_eq!(FieldBoost::boosted("title", 2.0).to_string(), "title^2");
        assert_eq!(FieldBoost::boosted("summary", 1.0).to_string(), "summary^1");
        assert_eq!(FieldBoost::boosted("body", 1.5).to_string(), "body^1.5");
        assert_eq!(FieldBoost::plain("tags").to_string(), "tags");
    }

    #[test]
    fn payload_matches_query_dsl() {
        let fields = [
            FieldBoost::boosted("title", 2.0),
            FieldBoost::boosted("summary", 1.0),
        ];
        let payload = QueryPayload::new("Searching", &fields);

        assert_eq!(
            payload.to_value().unwrap(),
            json!({
                "query": {
                    "query_string": {
                        "query": "Searching",
                        "fields": ["title^2", "summary^1"]
                    }
                }
            })
        );
    }

    #[test]
    fn payload_keeps_field_order() {
        let fields = [
            FieldBoost::plain("z"),
            FieldBoost::plain("a"),
            FieldBoost::boosted("m", 4.0),
        ];
        let body = serde_json::to_string(&QueryPayload::new("x", &fields)).unwrap();
        assert_eq!(
            body,
            r#"{"query":{"query_string":{"query":"x","fields":["z","a","m^4"]}}}"#
        );
    }
}
