//! Rule-based receipt line processing: classification, extraction, and
//! normalization.

pub mod classifier;
pub mod extractor;
pub mod heuristic;
pub mod normalize;
pub mod patterns;

pub use classifier::is_noise;
pub use extractor::derive_item;
pub use heuristic::parse_heuristically;
pub use normalize::{clean_name, normalize_unit, sanitize_quantity};
