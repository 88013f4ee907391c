//! Education extraction from resume text

use crate::processing::section::SectionLocator;
use regex::Regex;
use std::collections::BTreeSet;

/// Keywords driving the whole-document fallback scan.
const EDUCATION_KEYWORDS: &[&str] = &[
    "Bachelor", "Master", "PhD", "Doctorate", "Degree", "B.Sc", "M.Sc", "B.Tech", "M.Tech",
    "B.A.", "M.A.", "B.Com", "M.Com", "BBA", "MBA", "B.E.", "M.E.", "B.Eng", "M.Eng",
    "Associate", "Diploma", "Certification", "Certified", "Certificate", "Coursework",
    "University", "College", "Institute", "School", "Academy", "Campus",
];

pub struct EducationExtractor {
    section: SectionLocator,
    degree_patterns: Vec<Regex>,
    fallback_patterns: Vec<Regex>,
}

impl Default for EducationExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl EducationExtractor {
    pub fn new() -> Self {
        // Ordered candidates: a three-part degree/field/institution phrase,
        // then a looser degree-abbreviation anchor.
        let degree_patterns = vec![
            Regex::new(
                r"(?i)([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)\s*(?:in|at)?\s*([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)\s*(?:at|from)?\s*([A-Z][A-Za-z\s]+(?:University|College|Institute))",
            )
            .expect("invalid degree pattern"),
            Regex::new(
                r"(?i)(Bachelor|Master|PhD|B\.[A-Z]+|M\.[A-Z]+|B\.Tech|M\.Tech)[\w\s,.\-&()]*?(University|College|Institute)?[\w\s,.\-&()]*",
            )
            .expect("invalid degree pattern"),
        ];

        let fallback_patterns = EDUCATION_KEYWORDS
            .iter()
            .map(|keyword| {
                Regex::new(&format!(
                    r"(?i)\b{}[\w\s,.\-&()]{{0,100}}?([A-Z][a-z\s]{{5,50}}?)(University|College|Institute|School)",
                    regex::escape(keyword)
                ))
                .expect("invalid education keyword pattern")
            })
            .collect();

        Self {
            section: SectionLocator::new(&["education", "academic background", "qualifications"]),
            degree_patterns,
            fallback_patterns,
        }
    }

    /// Extract education entries. A labeled education section is parsed with
    /// the degree patterns; only when that yields nothing is the whole
    /// document scanned for education keywords near institution names.
    pub fn extract(&self, text: &str) -> BTreeSet<String> {
        let mut entries = BTreeSet::new();

        if let Some(body) = self.section.body(text) {
            for pattern in &self.degree_patterns {
                for caps in pattern.captures_iter(body) {
                    let joined = join_groups(&caps);
                    if !joined.is_empty() {
                        entries.insert(joined);
                    }
                }
            }
        }

        if entries.is_empty() {
            for pattern in &self.fallback_patterns {
                for caps in pattern.captures_iter(text) {
                    if let (Some(phrase), Some(institution)) = (caps.get(1), caps.get(2)) {
                        entries.insert(format!(
                            "{} {}",
                            phrase.as_str().trim(),
                            institution.as_str().trim()
                        ));
                    }
                }
            }
        }

        entries
    }
}

/// Join the non-empty trimmed capture groups of a match with single spaces.
fn join_groups(caps: &regex::Captures) -> String {
    caps.iter()
        .skip(1)
        .flatten()
        .map(|m| m.as_str().trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
