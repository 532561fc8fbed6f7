// ATS analysis engine.
// Pure functions of (résumé text, job description text) plus read-only tables.
// Nothing here does I/O; handlers.rs is the only async entry point.

pub mod config;
pub mod engine;
pub mod feedback;
pub mod handlers;
pub mod keywords;
pub mod models;
pub mod sections;
pub mod verbs;
pub mod vocabulary;

use thiserror::Error;

/// Errors raised while building or running the analyzer.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Nothing to analyze. Distinct from a résumé that scores zero.
    #[error("resume text is empty")]
    EmptyResume,

    #[error("invalid pattern for '{name}': {source}")]
    InvalidPattern {
        name: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid scoring config: {0}")]
    InvalidConfig(String),
}
