//! Score composition: combines section, keyword and vocabulary signals into
//! a single 0–100 ATS score.
//!
//! Algorithm:
//! 1. structure  = round(found core / total core × structure weight)
//! 2. keywords   = round(matched / unique JD keywords × keyword weight),
//!    or the empty-JD policy when the JD yields no keywords
//! 3. formatting = formatting weight − weak-phrase penalty
//! 4. score      = min(sum, weights total)
//!
//! Pure and synchronous: the `Analyzer` holds only compiled, read-only tables
//! and is shared across requests behind an `Arc`.

use std::time::Instant;

use tracing::debug;

use crate::analysis::config::{EmptyJdPolicy, ScoringConfig};
use crate::analysis::feedback::{build_feedback, keyword_band};
use crate::analysis::keywords::{extract_keywords, partition_keywords};
use crate::analysis::models::{AnalysisResult, FeedbackItem, ScoreBreakdown};
use crate::analysis::sections::{missing_core_sections, SectionDetector};
use crate::analysis::verbs::VerbDetector;
use crate::analysis::vocabulary::Vocabulary;
use crate::analysis::AnalysisError;

const PERCENT: u32 = 100;

/// `round(numerator / denominator × weight)` with halves rounded up, computed
/// on integers so exact halves are never lost to float error.
fn ratio_points(numerator: usize, denominator: usize, weight: u32) -> u32 {
    if denominator == 0 {
        return 0;
    }
    let (n, d, w) = (numerator as u64, denominator as u64, weight as u64);
    ((2 * n * w + d) / (2 * d)) as u32
}

/// Compiled scoring engine. Build once, call `analyze` from any thread.
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: ScoringConfig,
    vocabulary: Vocabulary,
    sections: SectionDetector,
    verbs: VerbDetector,
}

impl Analyzer {
    pub fn new(config: ScoringConfig, vocabulary: Vocabulary) -> Result<Self, AnalysisError> {
        config.validate(&vocabulary)?;
        let sections = SectionDetector::new(&vocabulary.sections, config.contact_header_lines)?;
        let verbs = VerbDetector::new(&vocabulary.weak_phrases, &vocabulary.strong_verbs)?;
        Ok(Self {
            config,
            vocabulary,
            sections,
            verbs,
        })
    }

    #[cfg(test)]
    pub fn with_defaults() -> Result<Self, AnalysisError> {
        Self::new(ScoringConfig::default(), Vocabulary::default())
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn sections(&self) -> &SectionDetector {
        &self.sections
    }

    /// Scores `resume_text` against `jd_text`. An empty JD is valid; an empty
    /// or whitespace-only résumé is refused so it cannot be mistaken for a
    /// legitimately low score.
    pub fn analyze(&self, resume_text: &str, jd_text: &str) -> Result<AnalysisResult, AnalysisError> {
        if resume_text.trim().is_empty() {
            return Err(AnalysisError::EmptyResume);
        }

        let started = Instant::now();
        let weights = &self.config.weights;
        let resume_lower = resume_text.to_lowercase();

        // 1. Structure
        let found_sections = self.sections.detect(resume_text);
        let missing_core = missing_core_sections(&found_sections, &self.config.core_sections);
        let core_total = self.config.core_sections.len();
        let structure = ratio_points(core_total - missing_core.len(), core_total, weights.structure);

        // 2. Keywords
        let jd_keywords = extract_keywords(jd_text, &self.vocabulary.stopwords);
        let unique = jd_keywords.len();
        let (matched_keywords, missing_keywords) =
            partition_keywords(&jd_keywords, &resume_lower, self.config.keyword_match);
        let (keywords, keyword_match_percent) = if unique == 0 {
            let points = match self.config.empty_jd_policy {
                EmptyJdPolicy::ZeroCredit => 0,
                EmptyJdPolicy::FullCredit => weights.keywords,
            };
            (points, None)
        } else {
            (
                ratio_points(matched_keywords.len(), unique, weights.keywords),
                Some(ratio_points(matched_keywords.len(), unique, PERCENT)),
            )
        };

        // 3. Formatting
        let weak_phrase_count = self.verbs.count_weak_phrases(resume_text);
        let penalty = self.config.penalty.penalty(weak_phrase_count);
        let formatting = weights.formatting.saturating_sub(penalty);
        let strong_verbs_used = self.verbs.detect_strong_verbs(resume_text);

        // 4. Total
        let score = (structure + keywords + formatting).min(weights.total());

        debug!(
            resume_bytes = resume_text.len(),
            jd_bytes = jd_text.len(),
            structure,
            keywords,
            formatting,
            score,
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "resume analysis completed"
        );

        Ok(AnalysisResult {
            found_sections,
            missing_core_sections: missing_core,
            matched_keywords,
            missing_keywords,
            unique_job_description_keyword_count: unique,
            keyword_match_percent,
            keyword_band: keyword_band(keyword_match_percent, &self.config.keyword_bands),
            weak_phrase_count,
            strong_verbs_used,
            breakdown: ScoreBreakdown {
                structure,
                keywords,
                formatting,
            },
            score,
        })
    }

    pub fn feedback(&self, result: &AnalysisResult) -> Vec<FeedbackItem> {
        build_feedback(result, &self.config, &self.vocabulary)
    }
}
