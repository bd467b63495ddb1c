// General-language baseline provider — swap-ready abstraction.
//
// The domain categories in `categories.rs` only cover gaming-specific noise;
// the bulk of the exclusion set comes from a general English stopword list
// supplied by an external provider. The trait keeps the aggregator decoupled
// from where that list comes from (crate, file, versioned corpus).

use anyhow::Result;
use stop_words::{get, LANGUAGE};

/// Trait for supplying the general-language stopword baseline.
///
/// Implementations are queried fresh on every aggregation — the provider may
/// itself be versioned, so the aggregator never caches the result.
pub trait BaselineProvider {
    /// Return the baseline word list.
    fn words(&self) -> Result<Vec<String>>;
}

/// English baseline backed by the `stop-words` crate (~180 words).
#[derive(Debug, Default)]
pub struct EnglishBaseline;

impl BaselineProvider for EnglishBaseline {
    fn words(&self) -> Result<Vec<String>> {
        Ok(get(LANGUAGE::English))
    }
}
