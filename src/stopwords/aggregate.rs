// Stopword aggregation — union the named categories into one exclusion set.

use std::collections::HashSet;

use anyhow::Result;
use colored::Colorize;
use tracing::debug;

use super::baseline::{BaselineProvider, EnglishBaseline};
use super::categories::{
    ALL_CATEGORIES, CHARACTER_NAMES, CREATOR_NAMES, EXTENDED_COMMON, FRANCHISE_TOKENS,
    GAMING_METADATA, GENERIC_CHAT, PLATFORM_TERMS,
};

/// Which optional categories to fold into the exclusion set.
///
/// The five core categories (generic chat, platform terms, creator names,
/// gaming metadata, extended common) are always included — they are noise in
/// every analysis. Only the categories with a real analysis trade-off are
/// toggleable, and each field is named so call sites stay self-documenting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwordConfig {
    /// Include the general-language baseline (default: true).
    pub include_baseline: bool,
    /// Include franchise/game-name tokens (default: false — game names are
    /// the discriminative tokens in cross-game topic comparison).
    pub include_franchise: bool,
    /// Include in-game character names (default: true — set false for
    /// narrative analysis where character names *are* the topics).
    pub include_characters: bool,
}

impl Default for StopwordConfig {
    fn default() -> Self {
        Self {
            include_baseline: true,
            include_franchise: false,
            include_characters: true,
        }
    }
}

/// Per-category size report for a given configuration.
///
/// Rows are in fixed report order; the baseline row reflects a fresh query
/// of the provider, never a cached count.
#[derive(Debug, Clone)]
pub struct CategoryStats {
    /// (category name, member count) in report order
    pub categories: Vec<(&'static str, usize)>,
    /// Size of the aggregate set under the given configuration
    pub total: usize,
}

impl CategoryStats {
    /// Display the stats report in the terminal.
    pub fn display(&self) {
        println!("\n{}", "=== Stopword Categories ===".bold());
        println!();
        for (name, count) in &self.categories {
            println!("  {:<20} {:>5}", name, count);
        }
        println!("  {}", "-".repeat(26).dimmed());
        println!("  {:<20} {:>5}  {}", "total", self.total, "(for this config)".dimmed());
    }
}

/// Aggregates the named lexical categories plus an optional external
/// baseline into a single exclusion set.
///
/// Pure and deterministic: identical config flags always yield a set-equal
/// result, regardless of category insertion order.
pub struct StopwordAggregator {
    baseline: Option<Box<dyn BaselineProvider>>,
}

impl Default for StopwordAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl StopwordAggregator {
    /// Aggregator with the default English baseline provider.
    pub fn new() -> Self {
        Self {
            baseline: Some(Box::new(EnglishBaseline)),
        }
    }

    /// Aggregator with a caller-supplied baseline provider.
    pub fn with_baseline(provider: Box<dyn BaselineProvider>) -> Self {
        Self {
            baseline: Some(provider),
        }
    }

    /// Aggregator with no baseline provider configured. Aggregating with
    /// `include_baseline: true` will then fail rather than silently degrade.
    pub fn without_baseline() -> Self {
        Self { baseline: None }
    }

    /// Build the combined exclusion set for the given configuration.
    ///
    /// Overlapping tokens across categories collapse exactly once (set
    /// semantics). Errors if the baseline is requested but no provider is
    /// configured or the provider fails — an empty baseline would silently
    /// poison every downstream topic run.
    pub fn aggregate(&self, config: &StopwordConfig) -> Result<HashSet<String>> {
        let mut set: HashSet<String> = HashSet::new();

        if config.include_baseline {
            for word in self.baseline_words()? {
                set.insert(word);
            }
        }

        for category in [
            GENERIC_CHAT,
            PLATFORM_TERMS,
            CREATOR_NAMES,
            GAMING_METADATA,
            EXTENDED_COMMON,
        ] {
            set.extend(category.iter().map(|t| t.to_string()));
        }

        if config.include_franchise {
            set.extend(FRANCHISE_TOKENS.iter().map(|t| t.to_string()));
        }

        if config.include_characters {
            set.extend(CHARACTER_NAMES.iter().map(|t| t.to_string()));
        }

        debug!(
            size = set.len(),
            baseline = config.include_baseline,
            franchise = config.include_franchise,
            characters = config.include_characters,
            "Aggregated stopword set"
        );

        Ok(set)
    }

    /// Per-category counts plus the aggregate total for the configuration.
    ///
    /// The baseline is queried fresh for its size (the provider may be
    /// versioned); the row is omitted entirely when no provider is set.
    pub fn category_stats(&self, config: &StopwordConfig) -> Result<CategoryStats> {
        let mut categories: Vec<(&'static str, usize)> = Vec::new();

        if let Some(provider) = &self.baseline {
            categories.push(("baseline", provider.words()?.len()));
        }
        for (name, members) in ALL_CATEGORIES.iter().copied() {
            categories.push((name, members.len()));
        }

        let total = self.aggregate(config)?.len();

        Ok(CategoryStats { categories, total })
    }

    fn baseline_words(&self) -> Result<Vec<String>> {
        match &self.baseline {
            Some(provider) => provider.words(),
            None => anyhow::bail!(
                "Baseline stopwords requested but no baseline provider is configured — \
                 construct the aggregator with a provider or set include_baseline: false"
            ),
        }
    }
}
