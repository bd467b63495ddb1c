// Unit tests for topic extraction, the JSON model file, and auto-labeling.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use kindling::topics::extract::{extract_topic_keywords, TopicRecord};
use kindling::topics::label::{auto_generate_labels, auto_label};
use kindling::topics::model_file::FittedTopics;
use kindling::topics::traits::TopicModel;

/// In-memory model stub with fixed distributions.
struct StubModel {
    topics: Vec<Vec<(String, f64)>>,
}

impl TopicModel for StubModel {
    fn topic_count(&self) -> Result<usize> {
        Ok(self.topics.len())
    }

    fn top_keywords(&self, topic_index: usize, n: usize) -> Result<Vec<(String, f64)>> {
        Ok(self.topics[topic_index].iter().take(n).cloned().collect())
    }
}

fn pairs(words: &[(&str, f64)]) -> Vec<(String, f64)> {
    words.iter().map(|(w, p)| (w.to_string(), *p)).collect()
}

// ============================================================
// extract_topic_keywords — keyword fidelity
// ============================================================

#[test]
fn extract_preserves_order_and_ids() {
    let model = StubModel {
        topics: vec![
            pairs(&[("fire", 0.12), ("water", 0.08)]),
            pairs(&[("win", 0.30)]),
        ],
    };

    let records = extract_topic_keywords(&model, 2).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].topic_id, 0);
    assert_eq!(records[0].keywords, pairs(&[("fire", 0.12), ("water", 0.08)]));
    assert_eq!(records[1].topic_id, 1);
    assert_eq!(records[1].keywords, pairs(&[("win", 0.30)]));
}

#[test]
fn extract_does_not_resort_or_renormalize() {
    // Deliberately un-normalized probabilities — passed through verbatim
    let model = StubModel {
        topics: vec![pairs(&[("a", 0.9), ("b", 0.9)])],
    };
    let records = extract_topic_keywords(&model, 5).unwrap();
    assert_eq!(records[0].keywords, pairs(&[("a", 0.9), ("b", 0.9)]));
}

#[test]
fn extract_empty_model_yields_no_records() {
    let model = StubModel { topics: vec![] };
    let records = extract_topic_keywords(&model, 3).unwrap();
    assert!(records.is_empty());
}

#[test]
fn extract_rejects_zero_num_keywords() {
    let model = StubModel { topics: vec![] };
    let err = extract_topic_keywords(&model, 0).unwrap_err();
    assert!(err.to_string().contains("at least 1"));
}

// ============================================================
// FittedTopics — JSON round trip through the TopicModel trait
// ============================================================

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("kindling-test-{}-{name}", std::process::id()))
}

#[test]
fn fitted_topics_load_and_extract() {
    let path = temp_path("topics.json");
    fs::write(
        &path,
        r#"{"topics": [
            {"topic_id": 0, "keywords": [["fire", 0.12], ["water", 0.08]]},
            {"topic_id": 1, "keywords": [["win", 0.30]]}
        ]}"#,
    )
    .unwrap();

    let fitted = FittedTopics::load(&path).unwrap();
    let records = extract_topic_keywords(&fitted, 10).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].keywords, pairs(&[("win", 0.30)]));

    fs::remove_file(&path).unwrap();
}

#[test]
fn fitted_topics_invalid_json_errors_with_path() {
    let path = temp_path("bad-topics.json");
    fs::write(&path, "not json").unwrap();

    let err = FittedTopics::load(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse topics file"));

    fs::remove_file(&path).unwrap();
}

// ============================================================
// auto-labeling
// ============================================================

#[test]
fn auto_label_joins_top_words() {
    let topic = TopicRecord {
        topic_id: 4,
        keywords: pairs(&[("heist", 0.2), ("horse", 0.1), ("camp", 0.05), ("gold", 0.01)]),
    };
    assert_eq!(auto_label(&topic, 3), "heist / horse / camp");
    assert_eq!(auto_label(&topic, 1), "heist");
}

#[test]
fn auto_label_zero_keywords_is_empty() {
    let topic = TopicRecord {
        topic_id: 0,
        keywords: vec![],
    };
    assert_eq!(auto_label(&topic, 3), "");
}

#[test]
fn auto_generate_labels_one_per_topic() {
    let topics = vec![
        TopicRecord {
            topic_id: 0,
            keywords: pairs(&[("fire", 0.12), ("water", 0.08)]),
        },
        TopicRecord {
            topic_id: 1,
            keywords: pairs(&[("win", 0.30)]),
        },
    ];
    let labels = auto_generate_labels(&topics, 2);
    assert_eq!(labels, vec!["fire / water", "win"]);
}
