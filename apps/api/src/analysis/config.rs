use std::collections::HashSet;
use std::str::FromStr;

use serde::Serialize;

use crate::analysis::vocabulary::{Vocabulary, DEFAULT_CORE_SECTIONS};
use crate::analysis::AnalysisError;

/// Upper bound of the composite score.
pub const MAX_SCORE: u32 = 100;

/// Point weights of the three sub-scores. They sum to `MAX_SCORE`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreWeights {
    pub structure: u32,
    pub keywords: u32,
    pub formatting: u32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            structure: 40,
            keywords: 30,
            formatting: 30,
        }
    }
}

impl ScoreWeights {
    pub fn total(&self) -> u32 {
        self.structure + self.keywords + self.formatting
    }
}

/// Weak phrases cost `points_per_step` for every full `occurrences_per_step`
/// occurrences, never more than `max_penalty` in total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PenaltyRule {
    pub occurrences_per_step: usize,
    pub points_per_step: u32,
    pub max_penalty: u32,
}

impl Default for PenaltyRule {
    fn default() -> Self {
        Self {
            occurrences_per_step: 5,
            points_per_step: 5,
            max_penalty: 15,
        }
    }
}

impl PenaltyRule {
    pub fn penalty(&self, weak_phrase_count: usize) -> u32 {
        let steps = (weak_phrase_count / self.occurrences_per_step.max(1)) as u64;
        let raw = steps.saturating_mul(self.points_per_step as u64);
        raw.min(self.max_penalty as u64) as u32
    }
}

/// Keyword match percentage boundaries for feedback bands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordBands {
    /// Below this percentage the match is "low".
    pub low_below: u32,
    /// Below this percentage (and not low) the match is "moderate".
    pub moderate_below: u32,
}

impl Default for KeywordBands {
    fn default() -> Self {
        Self {
            low_below: 40,
            moderate_below: 70,
        }
    }
}

/// What the keyword sub-score is worth when the job description yields no keywords.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyJdPolicy {
    #[default]
    ZeroCredit,
    FullCredit,
}

impl FromStr for EmptyJdPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zero" | "zero_credit" => Ok(Self::ZeroCredit),
            "full" | "full_credit" => Ok(Self::FullCredit),
            other => Err(format!("unknown empty-JD policy '{other}'")),
        }
    }
}

/// How an extracted JD keyword is looked up in the résumé.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordMatchMode {
    /// Plain substring containment: "react" matches "reactive".
    #[default]
    Substring,
    /// Keyword must not be glued to other token characters on either side.
    WholeWord,
}

impl FromStr for KeywordMatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "substring" => Ok(Self::Substring),
            "whole_word" | "word" => Ok(Self::WholeWord),
            other => Err(format!("unknown keyword match mode '{other}'")),
        }
    }
}

/// Numeric policy of the analyzer. The word tables live in `Vocabulary`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoringConfig {
    pub weights: ScoreWeights,
    pub penalty: PenaltyRule,
    pub core_sections: Vec<String>,
    pub empty_jd_policy: EmptyJdPolicy,
    pub keyword_match: KeywordMatchMode,
    pub keyword_bands: KeywordBands,
    /// Missing keywords named in low-match feedback.
    pub feedback_keyword_limit: usize,
    /// Detected strong verbs cited in vocabulary feedback.
    pub feedback_verb_limit: usize,
    /// Leading lines searched for an email address as contact evidence.
    pub contact_header_lines: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            penalty: PenaltyRule::default(),
            core_sections: DEFAULT_CORE_SECTIONS.iter().map(|s| s.to_string()).collect(),
            empty_jd_policy: EmptyJdPolicy::default(),
            keyword_match: KeywordMatchMode::default(),
            keyword_bands: KeywordBands::default(),
            feedback_keyword_limit: 3,
            feedback_verb_limit: 3,
            contact_header_lines: 5,
        }
    }
}

impl ScoringConfig {
    /// Checks the config is internally consistent and agrees with `vocab`.
    pub fn validate(&self, vocab: &Vocabulary) -> Result<(), AnalysisError> {
        let invalid = |msg: String| Err(AnalysisError::InvalidConfig(msg));

        if self.weights.total() != MAX_SCORE {
            return invalid(format!(
                "score weights must sum to {MAX_SCORE}, got {}",
                self.weights.total()
            ));
        }
        if self.penalty.occurrences_per_step == 0 {
            return invalid("penalty.occurrences_per_step must be at least 1".to_string());
        }
        if self.penalty.max_penalty > self.weights.formatting {
            return invalid(format!(
                "penalty.max_penalty ({}) exceeds the formatting weight ({})",
                self.penalty.max_penalty, self.weights.formatting
            ));
        }
        if self.keyword_bands.low_below > self.keyword_bands.moderate_below {
            return invalid("keyword_bands.low_below must not exceed moderate_below".to_string());
        }
        if self.core_sections.is_empty() {
            return invalid("at least one core section is required".to_string());
        }
        if let Some(unknown) = self.core_sections.iter().find(|id| !vocab.has_section(id)) {
            return invalid(format!("core section '{unknown}' is not in the section table"));
        }
        let mut seen = HashSet::new();
        if let Some(dup) = self.core_sections.iter().find(|id| !seen.insert(id.as_str())) {
            return invalid(format!("core section '{dup}' is listed more than once"));
        }
        Ok(())
    }
}
