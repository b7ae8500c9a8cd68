//! Two-tier pipeline orchestrator: model-assisted extraction with a
//! deterministic heuristic fallback.

use tracing::{debug, info, warn};

use crate::model::ModelExtractor;
use crate::models::{ParsedItem, PipelineConfig};
use crate::receipt::parse_heuristically;

/// Pipeline stages. The fallback contract is explicit: every failure or
/// empty result on the model tier transitions to `Heuristic`, and
/// `Heuristic` always reaches `Done`.
enum Stage {
    Start,
    ModelAttempt,
    Heuristic,
    Done(Vec<ParsedItem>),
}

/// Receipt parsing pipeline.
///
/// Holds no shared mutable state; each `parse_receipt_lines` call works
/// on its own input. The model extractor is injected at construction so
/// the pipeline is testable without process-wide configuration.
pub struct Pipeline {
    extractor: Option<ModelExtractor>,
}

impl Pipeline {
    /// Build a pipeline from configuration. Without a credential the
    /// model tier is skipped entirely.
    pub fn new(config: &PipelineConfig) -> Self {
        let extractor = if config.model.has_credential() {
            match ModelExtractor::from_config(&config.model) {
                Ok(extractor) => Some(extractor),
                Err(err) => {
                    warn!(error = %err, "model tier unavailable, heuristics only");
                    None
                }
            }
        } else {
            debug!("no model credential configured, heuristics only");
            None
        };

        Self { extractor }
    }

    /// Build a pipeline that never consults the model tier.
    pub fn heuristic_only() -> Self {
        Self { extractor: None }
    }

    /// Build a pipeline around an explicit extractor (used by tests and
    /// callers that construct their own backend).
    pub fn with_extractor(extractor: ModelExtractor) -> Self {
        Self {
            extractor: Some(extractor),
        }
    }

    /// Parse a receipt's OCR lines into candidate pantry items.
    ///
    /// Total: always resolves to an item list, possibly empty, for any
    /// input. Nothing from the model tier escapes as an error.
    pub async fn parse_receipt_lines(&self, lines: &[String]) -> Vec<ParsedItem> {
        let mut stage = Stage::Start;

        loop {
            stage = match stage {
                Stage::Start => {
                    if lines.is_empty() {
                        Stage::Done(Vec::new())
                    } else if self.extractor.is_some() {
                        Stage::ModelAttempt
                    } else {
                        Stage::Heuristic
                    }
                }
                Stage::ModelAttempt => match &self.extractor {
                    Some(extractor) => match extractor.extract(lines).await {
                        Ok(items) if !items.is_empty() => {
                            info!(count = items.len(), "model tier produced items");
                            Stage::Done(items)
                        }
                        Ok(_) => {
                            debug!("model tier found nothing usable, falling back");
                            Stage::Heuristic
                        }
                        Err(err) => {
                            warn!(error = %err, "model tier failed, falling back");
                            Stage::Heuristic
                        }
                    },
                    None => Stage::Heuristic,
                },
                Stage::Heuristic => Stage::Done(parse_heuristically(lines)),
                Stage::Done(items) => return items,
            };
        }
    }
}
