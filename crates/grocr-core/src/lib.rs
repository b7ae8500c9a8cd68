//! Core library for receipt-to-pantry parsing.
//!
//! This crate provides:
//! - Rule-based receipt line processing (classification, extraction,
//!   normalization, de-duplication)
//! - Model-assisted extraction via an OpenAI-compatible chat endpoint
//! - A two-tier pipeline orchestrator that falls back to the rules when
//!   the model tier is unconfigured, fails, or finds nothing

pub mod error;
pub mod model;
pub mod models;
pub mod pipeline;
pub mod receipt;

pub use error::{GrocrError, ModelError, Result};
pub use model::{ChatBackend, ModelExtractor, OpenAiBackend};
pub use models::{ModelConfig, ParsedItem, PipelineConfig};
pub use pipeline::Pipeline;
pub use receipt::{derive_item, is_noise, parse_heuristically};
