// LaTeX topic table — a self-contained table block for the writeup.
//
// Corpus tokens routinely contain underscores (bigram tokens like
// "red_dead"), which LaTeX treats as math-mode subscripts, so both keyword
// cells and labels are escaped before embedding.

use crate::topics::extract::TopicRecord;

use super::{format_keyword_list, resolve_label, truncated};

/// Render topics as a captioned, labeled LaTeX table block.
///
/// Intended for `\input` into a larger document, not as a standalone file.
/// Column widths differ between the labeled (3-column) and unlabeled
/// (2-column) variants so the keyword cell wraps sensibly either way.
pub fn render(
    topics: &[TopicRecord],
    labels: Option<&[String]>,
    num_keywords: usize,
    decimal_places: usize,
) -> String {
    let mut lines = Vec::new();

    lines.push(r"\begin{table}[h]".to_string());
    lines.push(r"\centering".to_string());
    match labels {
        Some(_) => {
            lines.push(r"\begin{tabular}{|l|p{8cm}|p{3cm}|}".to_string());
            lines.push(r"\hline".to_string());
            lines.push(format!(
                r"Topic \# & Top {num_keywords} Keywords (with weights) & Preliminary Label \\"
            ));
        }
        None => {
            lines.push(r"\begin{tabular}{|l|p{10cm}|}".to_string());
            lines.push(r"\hline".to_string());
            lines.push(format!(
                r"Topic \# & Top {num_keywords} Keywords (with weights) \\"
            ));
        }
    }
    lines.push(r"\hline".to_string());

    for (i, topic) in topics.iter().enumerate() {
        let keywords = escape(&format_keyword_list(
            truncated(topic, num_keywords),
            decimal_places,
        ));
        match labels {
            Some(labels) => {
                let label = escape(resolve_label(labels, i));
                lines.push(format!(r"{} & {keywords} & {label} \\", topic.topic_id));
            }
            None => lines.push(format!(r"{} & {keywords} \\", topic.topic_id)),
        }
        lines.push(r"\hline".to_string());
    }

    lines.push(r"\end{tabular}".to_string());
    lines.push(r"\caption{Topic keywords and interpretations}".to_string());
    lines.push(r"\label{tab:topics}".to_string());
    lines.push(r"\end{table}".to_string());

    lines.join("\n")
}

/// Escape the reserved characters the corpus actually produces.
fn escape(text: &str) -> String {
    text.replace('_', r"\_").replace('&', r"\&")
}
