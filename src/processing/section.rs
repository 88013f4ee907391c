//! Labeled-section detection shared by the extractors
//!
//! A section starts at the first occurrence of one of its label keywords and
//! runs to the next blank line, the next header-like line, or the end of the
//! text.

use regex::Regex;

pub struct SectionLocator {
    pattern: Regex,
}

impl SectionLocator {
    /// Build a locator for a set of label keywords, matched case-insensitively.
    pub fn new(labels: &[&str]) -> Self {
        let pattern = format!(
            r"(?is)(?:{})[:\s\n](.*?)(?:\n\n|\n[A-Z][a-z]+:|\z)",
            labels.join("|")
        );
        Self {
            // The label set is fixed at construction, so the pattern is known valid.
            pattern: Regex::new(&pattern).expect("invalid section pattern"),
        }
    }

    /// Return the body of the first matching section, if any.
    pub fn body<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills_locator() -> SectionLocator {
        SectionLocator::new(&["skills", "technologies", "expertise"])
    }

    #[test]
    fn test_section_ends_at_blank_line() {
        let text = "Skills:\nPython, Rust\n\nEducation:\nMIT";
        let body = skills_locator().body(text).unwrap();
        assert!(body.contains("Python, Rust"));
        assert!(!body.contains("MIT"));
    }

    #[test]
    fn test_section_ends_at_next_header_line() {
        let text = "Skills:\nPython, Rust\nEducation:\nMIT";
        let body = skills_locator().body(text).unwrap();
        assert!(body.contains("Python, Rust"));
        assert!(!body.contains("MIT"));
    }

    #[test]
    fn test_section_runs_to_end_of_text() {
        let text = "Expertise:\nPython, Rust";
        let body = skills_locator().body(text).unwrap();
        assert!(body.contains("Python, Rust"));
    }

    #[test]
    fn test_label_is_case_insensitive() {
        let text = "SKILLS:\nPython";
        assert!(skills_locator().body(text).is_some());
    }

    #[test]
    fn test_missing_section() {
        let text = "Just a paragraph with no labeled parts.";
        assert!(skills_locator().body(text).is_none());
    }
}
