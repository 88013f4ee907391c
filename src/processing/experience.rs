//! Work-experience extraction from resume text

use crate::processing::section::SectionLocator;
use regex::Regex;
use std::collections::BTreeSet;

pub struct ExperienceExtractor {
    section: SectionLocator,
    section_patterns: Vec<Regex>,
    document_patterns: Vec<Regex>,
    company_suffix: Regex,
}

impl Default for ExperienceExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ExperienceExtractor {
    pub fn new() -> Self {
        // Ordered candidates inside a labeled section: company-dash-position,
        // company-"at"-position, position-"at"-company.
        let section_patterns = vec![
            Regex::new(
                r"(?i)([A-Z][A-Za-z\s&.,\-()]+(?:Inc\.?|Ltd\.?|LLC|Corp\.?|Group)?)\s*[-,]\s*([A-Z][a-z\s]{5,40})",
            )
            .expect("invalid experience pattern"),
            Regex::new(
                r"(?i)([A-Z][A-Za-z\s&.,\-()]+(?:Inc\.?|Ltd\.?|LLC|Corp\.?|Group)?).{0,20}(?:at|@)\s*([A-Z][a-z\s]{5,40})",
            )
            .expect("invalid experience pattern"),
            Regex::new(
                r"(?i)([A-Z][a-z\s]{5,40})\s*(?:at|@)\s*([A-Z][A-Za-z\s&.,\-()]+(?:Inc\.?|Ltd\.?|LLC|Corp\.?|Group)?)",
            )
            .expect("invalid experience pattern"),
        ];

        // Whole-document candidates, applied regardless of section detection.
        let document_patterns = vec![
            Regex::new(
                r"([A-Z][A-Za-z\s]{5,30})\s*(?:at|@)\s*([A-Z][A-Za-z\s&.,\-()]+(?:Inc\.?|Ltd\.?|LLC|Corp\.?|Group)?)",
            )
            .expect("invalid experience pattern"),
            Regex::new(
                r"([A-Z][A-Za-z\s&.,\-()]+(?:Inc\.?|Ltd\.?|LLC|Corp\.?|Group)?)\s*(?:-|,)\s*([A-Z][A-Za-z\s]{5,30})",
            )
            .expect("invalid experience pattern"),
        ];

        Self {
            section: SectionLocator::new(&[
                "work experience",
                "professional experience",
                "employment history",
                "career history",
                "professional background",
            ]),
            section_patterns,
            document_patterns,
            company_suffix: Regex::new(r"(?i)(Inc\.?|Ltd\.?|LLC|Corp\.?|Group)")
                .expect("invalid company suffix pattern"),
        }
    }

    /// Extract work experience as "{position} at {company}" entries. A labeled
    /// section is parsed first; two looser patterns then sweep the whole
    /// document, and both passes merge into one set.
    pub fn extract(&self, text: &str) -> BTreeSet<String> {
        let mut entries = BTreeSet::new();

        if let Some(body) = self.section.body(text) {
            self.collect_matches(body, &self.section_patterns, &mut entries);
        }

        self.collect_matches(text, &self.document_patterns, &mut entries);

        entries
    }

    fn collect_matches(&self, text: &str, patterns: &[Regex], entries: &mut BTreeSet<String>) {
        for pattern in patterns {
            for caps in pattern.captures_iter(text) {
                if let (Some(part1), Some(part2)) = (caps.get(1), caps.get(2)) {
                    let (position, company) =
                        self.classify(part1.as_str().trim(), part2.as_str().trim());
                    entries.insert(format!("{} at {}", position, company));
                }
            }
        }
    }

    /// Decide which captured span is the employer. A company-suffix token on
    /// either side settles it; otherwise the longer span is taken to be the
    /// company.
    fn classify<'a>(&self, part1: &'a str, part2: &'a str) -> (&'a str, &'a str) {
        if self.company_suffix.is_match(part1) {
            (part2, part1)
        } else if self.company_suffix.is_match(part2) {
            (part1, part2)
        } else if part1.chars().count() > part2.chars().count() {
            (part2, part1)
        } else {
            (part1, part2)
        }
    }
}
