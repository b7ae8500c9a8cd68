//! Data models for the receipt parsing pipeline.

pub mod config;
pub mod item;

pub use config::{ModelConfig, PipelineConfig};
pub use item::ParsedItem;
