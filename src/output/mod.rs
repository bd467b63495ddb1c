// Output formatting — topic report tables in markdown, CSV, and LaTeX.
//
// All three formats share one numeric-presentation routine
// (`format_keyword_list`) and one label-alignment rule (`resolve_label`),
// so a topic row reads identically across formats apart from the markup.

pub mod delimited;
pub mod latex;
pub mod markdown;

use anyhow::Result;
use clap::ValueEnum;

use crate::topics::extract::TopicRecord;

/// Placeholder for topics without a supplied label.
pub const LABEL_PLACEHOLDER: &str = "TBD";

/// Closed set of report output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TableFormat {
    Markdown,
    Csv,
    Latex,
}

/// Render a topic report in the requested format.
///
/// Labels pair with topics by position: missing positions render as "TBD",
/// extra labels are ignored. Rows appear in input order; topic ordering and
/// keyword ranking are trusted as supplied.
pub fn render(
    format: TableFormat,
    topics: &[TopicRecord],
    labels: Option<&[String]>,
    num_keywords: usize,
    decimal_places: usize,
) -> Result<String> {
    match format {
        TableFormat::Markdown => Ok(markdown::render(topics, labels, num_keywords, decimal_places)),
        TableFormat::Csv => delimited::render(topics, labels, num_keywords, decimal_places),
        TableFormat::Latex => Ok(latex::render(topics, labels, num_keywords, decimal_places)),
    }
}

/// Format (token, probability) pairs as an inline keyword cell:
/// `"fire (0.0565), water (0.0530)"`. Probabilities use exactly
/// `decimal_places` fixed digits — this is the single source of truth for
/// numeric presentation across every output format.
pub fn format_keyword_list(keywords: &[(String, f64)], decimal_places: usize) -> String {
    keywords
        .iter()
        .map(|(word, prob)| format!("{word} ({prob:.decimal_places$})"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// The label for row `i`: supplied label if present, "TBD" otherwise.
pub(crate) fn resolve_label(labels: &[String], i: usize) -> &str {
    labels.get(i).map(String::as_str).unwrap_or(LABEL_PLACEHOLDER)
}

/// A topic's keywords truncated to the first `num_keywords` entries.
pub(crate) fn truncated(topic: &TopicRecord, num_keywords: usize) -> &[(String, f64)] {
    &topic.keywords[..topic.keywords.len().min(num_keywords)]
}
