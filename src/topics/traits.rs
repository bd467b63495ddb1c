// Topic model trait — swap-ready abstraction.
//
// The model is trained elsewhere (out of scope here); this crate only needs
// its topic count and ranked per-topic keyword distributions. The trait lets
// the report pipeline run against any fitted model source — a JSON export,
// an in-process model binding, or a test stub.

use anyhow::Result;

/// Capability exposed by a fitted topic model.
pub trait TopicModel {
    /// Number of topics in the fitted model.
    ///
    /// Errors if the model cannot report a count (e.g. not yet fitted).
    fn topic_count(&self) -> Result<usize>;

    /// Top `n` (token, probability) pairs for the topic at `topic_index`,
    /// already sorted descending by probability. `topic_index` must be in
    /// `[0, topic_count)`.
    fn top_keywords(&self, topic_index: usize, n: usize) -> Result<Vec<(String, f64)>>;
}
