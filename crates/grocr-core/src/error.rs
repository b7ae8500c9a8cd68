//! Error types for the grocr-core library.

use thiserror::Error;

/// Main error type for the grocr library.
#[derive(Error, Debug)]
pub enum GrocrError {
    /// Model-assisted extraction error.
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors from the model-assisted extraction tier.
///
/// These never escape the pipeline orchestrator; every variant triggers
/// fallback to the heuristic parser.
#[derive(Error, Debug)]
pub enum ModelError {
    /// No API credential is configured.
    #[error("no model credential configured")]
    MissingCredential,

    /// Transport-level failure (connect, timeout, TLS).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("model endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The completion payload had no extractable text content.
    #[error("no text content in model response")]
    EmptyCompletion,
}

/// Result type for the grocr library.
pub type Result<T> = std::result::Result<T, GrocrError>;
