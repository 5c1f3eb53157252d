// ============================================================================
// File: src/error.rs
// Error taxonomy for the generate pipeline
// ============================================================================

use thiserror::Error;

/// Errors surfaced by the generate pipeline. All of them are terminal: they
/// are rendered as a single inline message and never retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// No API key was supplied. Checked before any network activity.
    #[error("Please provide your Groq API key (--api-key or GROQ_API_KEY)")]
    MissingCredential,

    /// No research interest was supplied. Checked before any network activity.
    #[error("Please describe your area of interest first (--interest)")]
    MissingInterest,

    /// Anything that went wrong during the remote call, carrying the
    /// underlying error text. Sub-causes are not distinguished.
    #[error("An error occurred: {0}")]
    GenerationFailed(String),
}
