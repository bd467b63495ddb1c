// Kindling: stopword curation and topic report tables for gaming comment corpora
//
// This is the library root. Each module corresponds to one of the two
// subsystems: stopword aggregation (feeds the preprocessing pipeline) and
// topic table rendering (consumes a fitted topic model).

pub mod output;
pub mod stopwords;
pub mod topics;
