use std::collections::BTreeSet;

use serde::Serialize;

/// Points earned by each weighted dimension before summation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub structure: u32,
    pub keywords: u32,
    pub formatting: u32,
}

/// How well the résumé covers the job description keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordBand {
    NoJobDescription,
    Low,
    Moderate,
    Strong,
}

/// Outcome of analyzing one résumé against one job description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub found_sections: BTreeSet<String>,
    /// Core sections not found, in core-list order.
    pub missing_core_sections: Vec<String>,
    pub matched_keywords: BTreeSet<String>,
    pub missing_keywords: BTreeSet<String>,
    pub unique_job_description_keyword_count: usize,
    /// `round(matched / unique * 100)`, `None` without JD keywords.
    pub keyword_match_percent: Option<u32>,
    pub keyword_band: KeywordBand,
    pub weak_phrase_count: usize,
    pub strong_verbs_used: BTreeSet<String>,
    pub breakdown: ScoreBreakdown,
    pub score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackCategory {
    Structure,
    Keywords,
    Vocabulary,
    Score,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackLevel {
    Positive,
    Info,
    Warning,
    Critical,
}

/// One human-readable suggestion. Presentation only, never fed back into scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackItem {
    pub category: FeedbackCategory,
    pub level: FeedbackLevel,
    pub message: String,
}
