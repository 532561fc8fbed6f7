use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::sections::SectionDetector;

const FALLBACK_NAME: &str = "Candidate Name";

/// `-`, `*`, `•`, a digit or a period followed by whitespace.
static BULLET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-*•\d.]\s").unwrap());
static BULLET_MARKER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-*•\d.]\s*").unwrap());

/// First non-empty line, trimmed, used as the preview title.
pub fn candidate_name(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or(FALLBACK_NAME)
        .to_string()
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Converts plain résumé text to HTML, one element per non-empty line.
///
/// Section headings become `<h2>`, bullet lines become `<li>` grouped into a
/// single `<ul>` per run, everything else is a `<p>`.
pub fn plain_to_html(text: &str, sections: &SectionDetector) -> String {
    let mut html = String::new();
    let mut in_list = false;

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let is_bullet = BULLET_RE.is_match(line);
        let content = if is_bullet {
            escape_html(&BULLET_MARKER_RE.replace(line, ""))
        } else {
            escape_html(line)
        };

        if sections.is_heading(line) {
            if in_list {
                html.push_str("</ul>\n");
                in_list = false;
            }
            html.push_str(&format!("<h2 class=\"section-heading\">{content}</h2>\n"));
        } else if is_bullet {
            if !in_list {
                html.push_str("<ul>\n");
                in_list = true;
            }
            html.push_str(&format!("<li>{content}</li>\n"));
        } else {
            if in_list {
                html.push_str("</ul>\n");
                in_list = false;
            }
            html.push_str(&format!("<p>{content}</p>\n"));
        }
    }

    if in_list {
        html.push_str("</ul>\n");
    }
    html
}
