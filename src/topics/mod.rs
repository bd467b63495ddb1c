// Topic table pipeline — keyword extraction from a fitted model and labeling.

pub mod extract;
pub mod label;
pub mod model_file;
pub mod traits;
