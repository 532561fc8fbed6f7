use anyhow::{anyhow, Context, Result};

use crate::analysis::config::{EmptyJdPolicy, KeywordMatchMode, ScoringConfig};

/// Upload ceiling for a single résumé or job description.
const DEFAULT_MAX_INPUT_BYTES: usize = 2 * 1024 * 1024;

/// Room for JSON framing and escaping around the two text fields.
const BODY_OVERHEAD_BYTES: usize = 64 * 1024;

/// Request body ceiling for two text fields of `max_input_bytes` each.
/// JSON escaping can double the encoded size of a field. `None` on overflow.
fn request_body_limit(max_input_bytes: usize) -> Option<usize> {
    max_input_bytes
        .checked_mul(2 * 2)?
        .checked_add(BODY_OVERHEAD_BYTES)
}

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub max_input_bytes: usize,
    pub scoring: ScoringConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut scoring = ScoringConfig::default();

        if let Some(raw) = lookup("ATS_CORE_SECTIONS") {
            scoring.core_sections = raw
                .split(',')
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect();
        }
        if let Some(raw) = lookup("ATS_EMPTY_JD_POLICY") {
            scoring.empty_jd_policy = raw
                .parse::<EmptyJdPolicy>()
                .map_err(|e| anyhow!(e))
                .context("ATS_EMPTY_JD_POLICY must be 'zero_credit' or 'full_credit'")?;
        }
        if let Some(raw) = lookup("ATS_KEYWORD_MATCH") {
            scoring.keyword_match = raw
                .parse::<KeywordMatchMode>()
                .map_err(|e| anyhow!(e))
                .context("ATS_KEYWORD_MATCH must be 'substring' or 'whole_word'")?;
        }

        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            max_input_bytes: match lookup("MAX_INPUT_BYTES") {
                Some(raw) => parse_max_input_bytes(&raw)
                    .context("MAX_INPUT_BYTES must be a positive integer")?,
                None => DEFAULT_MAX_INPUT_BYTES,
            },
            scoring,
        })
    }

    /// Body limit applied to every route.
    pub fn body_limit(&self) -> usize {
        request_body_limit(self.max_input_bytes).unwrap_or(usize::MAX)
    }
}

fn parse_max_input_bytes(raw: &str) -> Result<usize> {
    let bytes = raw.trim().parse::<usize>()?;
    if bytes == 0 {
        return Err(anyhow!("got 0"));
    }
    request_body_limit(bytes)
        .ok_or_else(|| anyhow!("{bytes} is too large for a request body limit"))?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.max_input_bytes, 2 * 1024 * 1024);
        assert_eq!(config.scoring, ScoringConfig::default());
    }

    #[test]
    fn test_core_sections_override() {
        let config = load(&[(
            "ATS_CORE_SECTIONS",
            "Contact, summary,experience,skills,education,projects,",
        )])
        .unwrap();
        assert_eq!(config.scoring.core_sections.len(), 6);
        assert_eq!(config.scoring.core_sections[0], "contact");
        assert_eq!(config.scoring.core_sections[5], "projects");
    }

    #[test]
    fn test_policy_overrides() {
        let config = load(&[
            ("ATS_EMPTY_JD_POLICY", "full_credit"),
            ("ATS_KEYWORD_MATCH", "whole_word"),
        ])
        .unwrap();
        assert_eq!(config.scoring.empty_jd_policy, EmptyJdPolicy::FullCredit);
        assert_eq!(config.scoring.keyword_match, KeywordMatchMode::WholeWord);
    }

    #[test]
    fn test_invalid_values_fail() {
        assert!(load(&[("PORT", "http")]).is_err());
        assert!(load(&[("MAX_INPUT_BYTES", "-1")]).is_err());
        assert!(load(&[("MAX_INPUT_BYTES", "0")]).is_err());
        let huge = (usize::MAX / 2).to_string();
        assert!(load(&[("MAX_INPUT_BYTES", huge.as_str())]).is_err());
        assert!(load(&[("ATS_EMPTY_JD_POLICY", "maybe")]).is_err());
        assert!(load(&[("ATS_KEYWORD_MATCH", "fuzzy")]).is_err());
    }

    #[test]
    fn test_body_limit() {
        let config = load(&[("MAX_INPUT_BYTES", "1000")]).unwrap();
        assert_eq!(config.max_input_bytes, 1000);
        assert_eq!(config.body_limit(), 4000 + 64 * 1024);

        let oversized = Config {
            max_input_bytes: usize::MAX / 2,
            ..config
        };
        assert_eq!(oversized.body_limit(), usize::MAX);
    }
}
