// JSON-backed fitted model — per-topic keyword distributions exported by the
// training pipeline.
//
// The training side (out of scope) dumps each topic's ranked keyword list to
// a JSON file; this type loads that file and exposes it through the
// TopicModel trait so the report pipeline cannot tell it apart from a live
// model binding.
//
// File shape:
// {
//   "topics": [
//     { "topic_id": 0, "keywords": [["fire", 0.12], ["water", 0.08]] },
//     { "topic_id": 1, "keywords": [["win", 0.30]] }
//   ]
// }

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::extract::TopicRecord;
use super::traits::TopicModel;

/// A fitted model's exported topic distributions.
///
/// Topics are stored in ascending topic_id order; `top_keywords` indexes
/// by position and truncates to the requested count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FittedTopics {
    pub topics: Vec<TopicRecord>,
}

impl FittedTopics {
    /// Load exported topic distributions from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read topics file: {}", path.display()))?;
        let fitted: FittedTopics = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse topics file: {}", path.display()))?;

        info!(
            topics = fitted.topics.len(),
            path = %path.display(),
            "Loaded fitted topic distributions"
        );

        Ok(fitted)
    }
}

impl TopicModel for FittedTopics {
    fn topic_count(&self) -> Result<usize> {
        Ok(self.topics.len())
    }

    fn top_keywords(&self, topic_index: usize, n: usize) -> Result<Vec<(String, f64)>> {
        let topic = self.topics.get(topic_index).ok_or_else(|| {
            anyhow::anyhow!(
                "Topic index {topic_index} out of range ({} topics)",
                self.topics.len()
            )
        })?;
        Ok(topic.keywords.iter().take(n).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exported_shape() {
        let json = r#"{
            "topics": [
                { "topic_id": 0, "keywords": [["fire", 0.12], ["water", 0.08]] },
                { "topic_id": 1, "keywords": [["win", 0.30]] }
            ]
        }"#;
        let fitted: FittedTopics = serde_json::from_str(json).unwrap();
        assert_eq!(fitted.topic_count().unwrap(), 2);
        assert_eq!(
            fitted.top_keywords(0, 10).unwrap(),
            vec![("fire".to_string(), 0.12), ("water".to_string(), 0.08)]
        );
    }

    #[test]
    fn test_top_keywords_truncates() {
        let fitted = FittedTopics {
            topics: vec![TopicRecord {
                topic_id: 0,
                keywords: vec![
                    ("a".to_string(), 0.3),
                    ("b".to_string(), 0.2),
                    ("c".to_string(), 0.1),
                ],
            }],
        };
        assert_eq!(fitted.top_keywords(0, 2).unwrap().len(), 2);
    }

    #[test]
    fn test_out_of_range_index_errors() {
        let fitted = FittedTopics { topics: vec![] };
        let result = fitted.top_keywords(0, 5);
        assert!(result.unwrap_err().to_string().contains("out of range"));
    }

    #[test]
    fn test_load_missing_file_errors() {
        let result = FittedTopics::load(Path::new("/nonexistent/topics.json"));
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read topics file"));
    }
}
