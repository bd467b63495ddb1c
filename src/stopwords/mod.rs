// Stopword aggregation — named lexical categories unioned into one exclusion set.

pub mod aggregate;
pub mod baseline;
pub mod categories;
