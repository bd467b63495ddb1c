// CSV topic table — the format fed into spreadsheets and downstream scripts.
//
// Hand-rolled RFC 4180-style quoting: the keyword cell always contains
// ", " as its pair separator, so nearly every data field ends up quoted.

use std::io::Write;

use anyhow::{Context, Result};

use crate::topics::extract::TopicRecord;

use super::{format_keyword_list, resolve_label, truncated};

/// Write topics as CSV records to a caller-provided destination.
///
/// One header record, then one record per topic in input order. The keyword
/// column name embeds `num_keywords` (e.g. `top_10_keywords`). Any write
/// failure aborts the whole render — the destination is flushed only after
/// every record has been written, never after a partial row.
pub fn write<W: Write>(
    mut out: W,
    topics: &[TopicRecord],
    labels: Option<&[String]>,
    num_keywords: usize,
    decimal_places: usize,
) -> Result<()> {
    let header = match labels {
        Some(_) => format!("topic_id,top_{num_keywords}_keywords,preliminary_label"),
        None => format!("topic_id,top_{num_keywords}_keywords"),
    };
    writeln!(out, "{header}").context("Failed to write CSV header")?;

    for (i, topic) in topics.iter().enumerate() {
        let keywords = format_keyword_list(truncated(topic, num_keywords), decimal_places);
        let record = match labels {
            Some(labels) => format!(
                "{},{},{}",
                topic.topic_id,
                quote_field(&keywords),
                quote_field(resolve_label(labels, i))
            ),
            None => format!("{},{}", topic.topic_id, quote_field(&keywords)),
        };
        writeln!(out, "{record}")
            .with_context(|| format!("Failed to write CSV record for topic {}", topic.topic_id))?;
    }

    out.flush().context("Failed to flush CSV destination")?;
    Ok(())
}

/// Render topics as an in-memory CSV string (UTF-8).
pub fn render(
    topics: &[TopicRecord],
    labels: Option<&[String]>,
    num_keywords: usize,
    decimal_places: usize,
) -> Result<String> {
    let mut buf = Vec::new();
    write(&mut buf, topics, labels, num_keywords, decimal_places)?;
    String::from_utf8(buf).context("CSV render produced invalid UTF-8")
}

/// Quote a field if it contains the delimiter, a quote, or a line break;
/// embedded quotes are doubled.
fn quote_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
