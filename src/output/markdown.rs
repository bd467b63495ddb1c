// Markdown topic table — the format pasted into analysis notes and READMEs.

use crate::topics::extract::TopicRecord;

use super::{format_keyword_list, resolve_label, truncated};

/// Render topics as a markdown table.
///
/// Two columns (`Topic #`, keywords), or three when labels are supplied.
/// Tokens are embedded as-is; markdown needs no escaping for the underscore
/// and ampersand characters the corpus produces.
pub fn render(
    topics: &[TopicRecord],
    labels: Option<&[String]>,
    num_keywords: usize,
    decimal_places: usize,
) -> String {
    let mut lines = Vec::new();

    match labels {
        Some(_) => {
            lines.push(format!(
                "| Topic # | Top {num_keywords} Keywords (with weights) | Preliminary Label |"
            ));
            lines.push("|---------|--------------------------------|-------------------|".to_string());
        }
        None => {
            lines.push(format!(
                "| Topic # | Top {num_keywords} Keywords (with weights) |"
            ));
            lines.push("|---------|--------------------------------|".to_string());
        }
    }

    for (i, topic) in topics.iter().enumerate() {
        let keywords = format_keyword_list(truncated(topic, num_keywords), decimal_places);
        match labels {
            Some(labels) => {
                let label = resolve_label(labels, i);
                lines.push(format!("| {} | {keywords} | {label} |", topic.topic_id));
            }
            None => lines.push(format!("| {} | {keywords} |", topic.topic_id)),
        }
    }

    lines.join("\n")
}
