//! Static word tables the analyzer is built from.
//!
//! Every table is a plain constant so an integrator can build a replacement
//! `Vocabulary` without touching the scoring code.

use std::collections::HashSet;

use serde::Serialize;

/// Ordered section table: `(section id, case-insensitive alternation)`.
/// Order matters: it is the order sections are reported in.
pub const DEFAULT_SECTION_TABLE: &[(&str, &str)] = &[
    ("contact", "contact|email|phone|linkedin|github|address"),
    ("summary", "summary|objective|profile"),
    ("experience", "experience|work experience|employment|career"),
    ("skills", "skills|technical skills|competencies|technologies"),
    ("education", "education|degree|university|college"),
    ("projects", "projects?|portfolio"),
    ("certifications", "certifications?|certificates?|license|licensed?"),
];

/// Sections counted by the structure sub-score.
pub const DEFAULT_CORE_SECTIONS: &[&str] = &["contact", "summary", "experience", "skills", "education"];

/// Common English words plus job-posting filler that would inflate the match ratio.
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "and", "the", "with", "from", "that", "this", "your", "their", "our", "for", "into", "able",
    "will", "shall", "must", "have", "has", "had", "are", "was", "were", "you", "they", "them",
    "over", "under", "about", "above", "below", "not", "only", "but", "also", "more", "than",
    "such", "etc", "using", "use", "used", "strong", "good", "great", "work", "role", "team",
    "skills", "requirements", "responsibilities", "job", "description", "looking", "plus",
    "preferred", "required", "experience", "years", "year", "developer", "engineer", "data",
];

/// Passive or low-impact phrasing penalized by the formatting sub-score.
pub const DEFAULT_WEAK_PHRASES: &[&str] = &[
    "responsible for",
    "managed",
    "worked on",
    "assisted",
    "duties included",
    "had to",
];

/// Action verbs surfaced in feedback. Presence only, never scored directly.
pub const DEFAULT_STRONG_VERBS: &[&str] = &[
    "Spearheaded",
    "Drove",
    "Orchestrated",
    "Engineered",
    "Architected",
    "Led",
    "Pioneered",
    "Implemented",
    "Designed",
    "Launched",
];

/// A named résumé section and the alternation that detects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionRule {
    pub id: String,
    /// Regex alternation body, wrapped in `(?i)\b(...)\b` at compile time.
    pub pattern: String,
}

/// The full set of word tables an `Analyzer` is compiled from.
#[derive(Debug, Clone, Serialize)]
pub struct Vocabulary {
    pub sections: Vec<SectionRule>,
    pub stopwords: HashSet<String>,
    pub weak_phrases: Vec<String>,
    pub strong_verbs: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            sections: DEFAULT_SECTION_TABLE
                .iter()
                .map(|(id, pattern)| SectionRule {
                    id: id.to_string(),
                    pattern: pattern.to_string(),
                })
                .collect(),
            stopwords: DEFAULT_STOPWORDS.iter().map(|w| w.to_string()).collect(),
            weak_phrases: DEFAULT_WEAK_PHRASES.iter().map(|p| p.to_string()).collect(),
            strong_verbs: DEFAULT_STRONG_VERBS.iter().map(|v| v.to_string()).collect(),
        }
    }
}

impl Vocabulary {
    pub fn has_section(&self, id: &str) -> bool {
        self.sections.iter().any(|s| s.id == id)
    }
}
