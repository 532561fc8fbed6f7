//! Human-readable feedback assembled from an `AnalysisResult`.
//!
//! Thresholds here are presentation policy. Changing them never changes a score.

use crate::analysis::config::{KeywordBands, ScoringConfig};
use crate::analysis::models::{
    AnalysisResult, FeedbackCategory, FeedbackItem, FeedbackLevel, KeywordBand,
};
use crate::analysis::vocabulary::Vocabulary;

/// Score the feedback encourages users to reach.
pub const TARGET_SCORE: u32 = 80;

/// Maps a keyword match percentage to its band. `None` means the job
/// description produced no keywords.
pub fn keyword_band(match_percent: Option<u32>, bands: &KeywordBands) -> KeywordBand {
    match match_percent {
        None => KeywordBand::NoJobDescription,
        Some(p) if p < bands.low_below => KeywordBand::Low,
        Some(p) if p < bands.moderate_below => KeywordBand::Moderate,
        Some(_) => KeywordBand::Strong,
    }
}

/// Builds one item per category, in order: structure, keywords, vocabulary, score.
pub fn build_feedback(
    result: &AnalysisResult,
    config: &ScoringConfig,
    vocab: &Vocabulary,
) -> Vec<FeedbackItem> {
    vec![
        structure_feedback(result),
        keyword_feedback(result, config),
        vocabulary_feedback(result, config, vocab),
        score_feedback(result),
    ]
}

fn structure_feedback(result: &AnalysisResult) -> FeedbackItem {
    if result.missing_core_sections.is_empty() {
        return FeedbackItem {
            category: FeedbackCategory::Structure,
            level: FeedbackLevel::Positive,
            message: "Structure complete: all standard core sections found.".to_string(),
        };
    }

    let missing = result
        .missing_core_sections
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join(", ");
    FeedbackItem {
        category: FeedbackCategory::Structure,
        level: FeedbackLevel::Critical,
        message: format!("Structure deficiency: missing core sections: {missing}. (Impact: high)"),
    }
}

fn keyword_feedback(result: &AnalysisResult, config: &ScoringConfig) -> FeedbackItem {
    let pct = result.keyword_match_percent.unwrap_or_default();
    let (level, message) = match result.keyword_band {
        KeywordBand::NoJobDescription => (
            FeedbackLevel::Info,
            "No job description provided. Paste one to calculate keyword alignment and boost your score."
                .to_string(),
        ),
        KeywordBand::Low => {
            let limit = config.feedback_keyword_limit;
            let mut terms = result
                .missing_keywords
                .iter()
                .take(limit)
                .cloned()
                .collect::<Vec<_>>()
                .join(", ");
            if result.missing_keywords.len() > limit {
                terms.push_str(", ...");
            }
            (
                FeedbackLevel::Critical,
                format!(
                    "Low keyword match ({pct}%): major tailoring needed. Missing critical terms like: {terms}"
                ),
            )
        }
        KeywordBand::Moderate => (
            FeedbackLevel::Warning,
            format!("Moderate match ({pct}%): add missing terms for a stronger ATS score. You're close!"),
        ),
        KeywordBand::Strong => (
            FeedbackLevel::Positive,
            format!("Strong match ({pct}%): excellent keyword alignment."),
        ),
    };

    FeedbackItem {
        category: FeedbackCategory::Keywords,
        level,
        message,
    }
}

fn quoted(words: &[&str]) -> String {
    words
        .iter()
        .map(|w| format!("'{w}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn vocabulary_feedback(
    result: &AnalysisResult,
    config: &ScoringConfig,
    vocab: &Vocabulary,
) -> FeedbackItem {
    let limit = config.feedback_verb_limit;
    let used: Vec<&str> = result
        .strong_verbs_used
        .iter()
        .take(limit)
        .map(String::as_str)
        .collect();
    let suggested: Vec<&str> = vocab
        .strong_verbs
        .iter()
        .filter(|v| !result.strong_verbs_used.contains(*v))
        .take(limit)
        .map(String::as_str)
        .collect();

    if result.weak_phrase_count > 0 {
        let example = vocab
            .weak_phrases
            .first()
            .map(String::as_str)
            .unwrap_or("responsible for");
        let mut message = format!(
            "Vocabulary: used weak phrasing {} time(s). Replace passive terms like '{example}' with action verbs",
            result.weak_phrase_count
        );
        if !suggested.is_empty() {
            message.push_str(&format!(" such as {}", quoted(&suggested)));
        }
        message.push('.');
        if !used.is_empty() {
            message.push_str(&format!(" You already use {}.", used.join(", ")));
        }
        return FeedbackItem {
            category: FeedbackCategory::Vocabulary,
            level: FeedbackLevel::Warning,
            message,
        };
    }

    if used.is_empty() {
        let mut message = "Vocabulary: no weak phrasing detected.".to_string();
        if !suggested.is_empty() {
            message.push_str(&format!(
                " Lead bullets with action verbs like {}.",
                quoted(&suggested)
            ));
        }
        FeedbackItem {
            category: FeedbackCategory::Vocabulary,
            level: FeedbackLevel::Info,
            message,
        }
    } else {
        FeedbackItem {
            category: FeedbackCategory::Vocabulary,
            level: FeedbackLevel::Positive,
            message: format!("Vocabulary: strong action verbs detected: {}.", used.join(", ")),
        }
    }
}

fn score_feedback(result: &AnalysisResult) -> FeedbackItem {
    let level = if result.score >= TARGET_SCORE {
        FeedbackLevel::Positive
    } else {
        FeedbackLevel::Info
    };
    FeedbackItem {
        category: FeedbackCategory::Score,
        level,
        message: format!(
            "Final ATS score: {}%. Target {TARGET_SCORE}%+ for top performance.",
            result.score
        ),
    }
}
