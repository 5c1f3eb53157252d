// ============================================================================
// File: src/request.rs
// GenerationRequest and field types
// ============================================================================

use clap::ValueEnum;
use std::fmt;

/// Academic level the generated topics should target
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AcademicLevel {
    Undergraduate,
    Masters,
    Phd,
    PostDoctoral,
}

impl fmt::Display for AcademicLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AcademicLevel::Undergraduate => "Undergraduate",
            AcademicLevel::Masters => "Master's",
            AcademicLevel::Phd => "PhD",
            AcademicLevel::PostDoctoral => "Post-doctoral",
        };
        f.write_str(label)
    }
}

/// Everything needed for one generation call. Built once from the CLI
/// arguments, consumed once, then discarded.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Free-text description of the research interest area
    pub interest: String,

    /// Optional narrower focus within the interest area
    pub focus: Option<String>,

    /// Academic level the topics should be feasible for
    pub level: AcademicLevel,

    /// Number of topics to request, bounded 3-10 at the CLI surface
    pub count: u8,

    /// Emphasize current trends and emerging topics
    pub trends: bool,

    /// Include interdisciplinary topics
    pub interdisciplinary: bool,

    /// Groq API key. Never serialized, printed, or written to disk.
    pub credential: String,
}
