//! Keyword extraction from job descriptions and lookup against résumé text.

use std::collections::{BTreeSet, HashSet};

use crate::analysis::config::KeywordMatchMode;

/// Tokens this short carry no signal ("go" and "ui" are lost, accepted).
const MIN_KEYWORD_LEN: usize = 3;

/// Characters kept inside a token so `c++`, `c#`, `node.js` and `ci/cd` survive.
///
/// Only ASCII letters count, so a non-ASCII letter splits its word and case
/// folding is exact for ASCII only. Lower-casing can change a word's spelling:
/// `Straße` yields `stra` while `STRASSE` yields `strasse`.
fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '#' | '.' | '/')
}

/// Characters that glue a keyword to its neighbour for whole-word matching.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '#')
}

/// Lower-cases `text`, splits it into tokens and returns the deduplicated
/// tokens longer than two characters that are not stopwords.
///
/// Trailing periods are sentence punctuation and are dropped; a leading
/// period is kept (`.net`).
pub fn extract_keywords(text: &str, stopwords: &HashSet<String>) -> BTreeSet<String> {
    text.to_lowercase()
        .split(|c: char| !is_token_char(c))
        .map(|token| token.trim().trim_end_matches('.'))
        .filter(|token| token.len() >= MIN_KEYWORD_LEN && !stopwords.contains(*token))
        .map(str::to_string)
        .collect()
}

/// Whether `keyword` (already lower-case) occurs in `haystack_lower`.
pub fn contains_keyword(haystack_lower: &str, keyword: &str, mode: KeywordMatchMode) -> bool {
    match mode {
        KeywordMatchMode::Substring => haystack_lower.contains(keyword),
        KeywordMatchMode::WholeWord => haystack_lower.match_indices(keyword).any(|(start, _)| {
            let before = haystack_lower[..start].chars().next_back();
            let after = haystack_lower[start + keyword.len()..].chars().next();
            !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
        }),
    }
}

/// Splits `keywords` into (found in résumé, not found). The two sets are
/// disjoint and their union is `keywords`.
pub fn partition_keywords(
    keywords: &BTreeSet<String>,
    resume_lower: &str,
    mode: KeywordMatchMode,
) -> (BTreeSet<String>, BTreeSet<String>) {
    keywords
        .iter()
        .cloned()
        .partition(|keyword| contains_keyword(resume_lower, keyword, mode))
}
