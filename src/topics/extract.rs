// TopicRecord — one topic's ranked keyword distribution, and the extractor
// that pulls records out of a fitted model.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::traits::TopicModel;

/// One topic's ranked keywords with probabilities.
///
/// `keywords` preserves the model's own descending-probability order
/// verbatim — no re-sort, no renormalization. The probabilities are trusted
/// as supplied; validating the model's sort is the model's contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicRecord {
    /// Stable zero-based identifier assigned by the model. Unique, but not
    /// necessarily contiguous when a caller subsets a record list.
    pub topic_id: usize,
    /// (token, probability) pairs in descending probability order
    pub keywords: Vec<(String, f64)>,
}

/// Extract the top `num_keywords` keywords for every topic in the model.
///
/// Produces one record per topic index, in ascending topic_id order. The
/// model may return fewer than `num_keywords` pairs for a topic; that is
/// passed through as-is.
pub fn extract_topic_keywords(
    model: &dyn TopicModel,
    num_keywords: usize,
) -> Result<Vec<TopicRecord>> {
    if num_keywords < 1 {
        anyhow::bail!("num_keywords must be at least 1, got {num_keywords}");
    }

    let count = model.topic_count()?;

    let mut topics = Vec::with_capacity(count);
    for topic_id in 0..count {
        let keywords = model.top_keywords(topic_id, num_keywords)?;
        topics.push(TopicRecord { topic_id, keywords });
    }

    info!(
        topics = topics.len(),
        num_keywords, "Extracted topic keywords"
    );

    Ok(topics)
}
