// Auto-labeling — derive a quick human-readable label from top keywords.
//
// These labels are placeholders for manual interpretation, not final topic
// names. A more sophisticated version could use an LLM to generate better
// labels.

use super::extract::TopicRecord;

/// Label a single topic from its first `num_label_words` keywords,
/// joined with " / ". A topic with no keywords yields an empty string.
pub fn auto_label(topic: &TopicRecord, num_label_words: usize) -> String {
    let words: Vec<&str> = topic
        .keywords
        .iter()
        .take(num_label_words)
        .map(|(word, _)| word.as_str())
        .collect();
    words.join(" / ")
}

/// Auto-generate one label per topic, index-aligned with the input slice.
pub fn auto_generate_labels(topics: &[TopicRecord], num_label_words: usize) -> Vec<String> {
    topics
        .iter()
        .map(|topic| auto_label(topic, num_label_words))
        .collect()
}
