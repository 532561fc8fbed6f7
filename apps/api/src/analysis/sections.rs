//! Section detection over the whole résumé text.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::vocabulary::SectionRule;
use crate::analysis::AnalysisError;

/// Section id that also accepts header evidence (email, phone number).
pub const CONTACT_SECTION: &str = "contact";

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)+").unwrap());

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(?\b\d{3}\)?[\s.-]?\d{3}[\s.-]\d{4}\b").unwrap());

/// Compiled section table, one case-insensitive pattern per section.
#[derive(Debug, Clone)]
pub struct SectionDetector {
    rules: Vec<(String, Regex)>,
    contact_header_lines: usize,
}

impl SectionDetector {
    pub fn new(rules: &[SectionRule], contact_header_lines: usize) -> Result<Self, AnalysisError> {
        let rules = rules
            .iter()
            .map(|rule| {
                Regex::new(&format!(r"(?i)\b({})\b", rule.pattern))
                    .map(|re| (rule.id.clone(), re))
                    .map_err(|source| AnalysisError::InvalidPattern {
                        name: rule.id.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            rules,
            contact_header_lines,
        })
    }

    /// Ids of every section whose pattern matches anywhere in `text`.
    ///
    /// `contact` additionally counts as found when an email address or a
    /// phone number appears in the first `contact_header_lines` lines.
    pub fn detect(&self, text: &str) -> BTreeSet<String> {
        self.rules
            .iter()
            .filter(|(id, re)| {
                re.is_match(text) || (id == CONTACT_SECTION && self.has_contact_header(text))
            })
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// Whether a single line reads like a section heading.
    pub fn is_heading(&self, line: &str) -> bool {
        self.rules.iter().any(|(_, re)| re.is_match(line))
    }

    fn has_contact_header(&self, text: &str) -> bool {
        text.lines()
            .filter(|line| !line.trim().is_empty())
            .take(self.contact_header_lines)
            .any(|line| EMAIL_RE.is_match(line) || PHONE_RE.is_match(line))
    }
}

/// `core` minus `found`, in `core` order.
pub fn missing_core_sections(found: &BTreeSet<String>, core: &[String]) -> Vec<String> {
    core.iter().filter(|id| !found.contains(*id)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::vocabulary::Vocabulary;

    fn detector() -> SectionDetector {
        SectionDetector::new(&Vocabulary::default().sections, 5).unwrap()
    }

    fn core() -> Vec<String> {
        ["contact", "summary", "experience", "skills", "education"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_detects_all_core_headings() {
        let text = "Contact\nSummary\nExperience\nSkills\nEducation";
        let found = detector().detect(text);
        assert!(missing_core_sections(&found, &core()).is_empty());
        assert!(!found.contains("projects"));
    }

    #[test]
    fn test_detection_is_case_insensitive() {
        let found = detector().detect("EDUCATION\ntechnical SKILLS");
        assert!(found.contains("education"));
        assert!(found.contains("skills"));
    }

    #[test]
    fn test_matches_synonyms_anywhere_in_text() {
        let found = detector().detect("Graduated from State University in 2019 with honors.");
        assert!(found.contains("education"));
    }

    #[test]
    fn test_requires_word_boundaries() {
        // "skillset" and "contacts" are not whole-word hits.
        let found = detector().detect("Broad skillset.\nMany contacts.");
        assert!(!found.contains("skills"));
        assert!(!found.contains("contact"));
    }

    #[test]
    fn test_optional_plural_patterns() {
        let found = detector().detect("Project highlights\nCertificate in cloud ops");
        assert!(found.contains("projects"));
        assert!(found.contains("certifications"));
    }

    #[test]
    fn test_email_in_header_counts_as_contact() {
        let found = detector().detect("Jane Roe\njane.roe@example.org\n\nSkills\nRust");
        assert!(found.contains("contact"));
    }

    #[test]
    fn test_phone_in_header_counts_as_contact() {
        let found = detector().detect("Jane Roe\n(555) 123-4567\n\nSkills\nRust");
        assert!(found.contains("contact"));
    }

    #[test]
    fn test_email_outside_header_does_not_count() {
        let mut text = String::from("Jane Roe\n");
        for i in 0..10 {
            text.push_str(&format!("Line {i}\n"));
        }
        text.push_str("jane.roe@example.org\n");
        let found = detector().detect(&text);
        assert!(!found.contains("contact"));
    }

    #[test]
    fn test_missing_core_preserves_core_order() {
        let found: BTreeSet<String> = ["skills".to_string()].into_iter().collect();
        assert_eq!(
            missing_core_sections(&found, &core()),
            vec!["contact", "summary", "experience", "education"]
        );
    }

    #[test]
    fn test_empty_text_finds_nothing() {
        let found = detector().detect("");
        assert!(found.is_empty());
        assert_eq!(missing_core_sections(&found, &core()).len(), 5);
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let rules = vec![SectionRule {
            id: "broken".to_string(),
            pattern: "(unclosed".to_string(),
        }];
        let err = SectionDetector::new(&rules, 5).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidPattern { name, .. } if name == "broken"));
    }

    #[test]
    fn test_is_heading() {
        let d = detector();
        assert!(d.is_heading("Work Experience"));
        assert!(!d.is_heading("Built a compiler in Rust"));
    }
}
