//! Weak phrasing counts and strong action verb detection.

use std::collections::BTreeSet;

use regex::Regex;

use crate::analysis::AnalysisError;

/// Builds `(?i)\bword\s+word\b` so a phrase only matches as a contiguous
/// word sequence, tolerating any whitespace run between its words.
fn phrase_regex(phrase: &str) -> Result<Regex, AnalysisError> {
    let body = phrase
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+");
    Regex::new(&format!(r"(?i)\b{body}\b")).map_err(|source| AnalysisError::InvalidPattern {
        name: phrase.to_string(),
        source,
    })
}

#[derive(Debug, Clone)]
pub struct VerbDetector {
    weak: Vec<Regex>,
    strong: Vec<(String, Regex)>,
}

impl VerbDetector {
    pub fn new(weak_phrases: &[String], strong_verbs: &[String]) -> Result<Self, AnalysisError> {
        let weak = weak_phrases
            .iter()
            .filter(|p| !p.trim().is_empty())
            .map(|p| phrase_regex(p))
            .collect::<Result<Vec<_>, _>>()?;
        let strong = strong_verbs
            .iter()
            .filter(|v| !v.trim().is_empty())
            .map(|v| phrase_regex(v).map(|re| (v.clone(), re)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { weak, strong })
    }

    /// Total occurrences of every weak phrase, case-insensitive.
    pub fn count_weak_phrases(&self, text: &str) -> usize {
        self.weak.iter().map(|re| re.find_iter(text).count()).sum()
    }

    /// Strong verbs present at least once, spelled as in the verb list.
    pub fn detect_strong_verbs(&self, text: &str) -> BTreeSet<String> {
        self.strong
            .iter()
            .filter(|(_, re)| re.is_match(text))
            .map(|(verb, _)| verb.clone())
            .collect()
    }
}
