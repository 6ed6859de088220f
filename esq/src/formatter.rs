//! Rendering of search responses.

use clap::ValueEnum;
use colored::Colorize;
use serde_json::Value;

use crate::error::Result;

/// How a response is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The full response, pretty-printed.
    #[default]
    Pretty,
    /// The full response on one line.
    Json,
    /// A short listing of the hits.
    Hits,
}

/// Render `response` in the requested format.
///
/// `Pretty` and `Json` emit the response exactly as received, number spelling
/// and key order included; only the whitespace differs.
pub fn render(response: &Value, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Pretty => serde_json::to_string_pretty(response)?,
        OutputFormat::Json => serde_json::to_string(response)?,
        OutputFormat::Hits => render_hits(response)?,
    })
}

/// Total hit count. Older engines report a bare number, newer ones `{"value": n, ...}`.
pub fn total_hits(response: &Value) -> Option<u64> {
    let total = response.pointer("/hits/total")?;
    total
        .as_u64()
        .or_else(|| total.get("value").and_then(Value::as_u64))
}

/// One header line with the hit count, then one entry per hit.
fn render_hits(response: &Value) -> Result<String> {
    let hits = response
        .pointer("/hits/hits")
        .and_then(Value::as_array)
        .map_or(&[][..], Vec::as_slice);

    let mut out = String::new();
    let total = total_hits(response).map_or_else(|| "?".to_string(), |n| n.to_string());
    out.push_str(&format!("{} {total} hits", "Total:".bold()));
    if let Some(took) = response.get("took").and_then(Value::as_u64) {
        out.push_str(&format!(" {}", format!("({took} ms)").dimmed()));
    }
    out.push('\n');

    if hits.is_empty() {
        out.push_str(&"No results found.".dimmed().to_string());
        return Ok(out);
    }

    for (i, hit) in hits.iter().enumerate() {
        let score = hit
            .get("_score")
            .and_then(Value::as_f64)
            .map_or_else(|| "-".to_string(), |s| format!("{s:.4}"));
        let location = ["_index", "_type", "_id"]
            .iter()
            .filter_map(|key| hit.get(*key).and_then(Value::as_str))
            .collect::<Vec<_>>()
            .join("/");
        let source = match hit.get("_source") {
            Some(source) => serde_json::to_string(source)?,
            None => String::new(),
        };

        out.push_str(&format!(
            "\n{} {} {}\n   {}",
            format!("{}.", i + 1).cyan(),
            score.dimmed(),
            location.bold(),
            source
        ));
    }

    Ok(out)
}
