//! Skill extraction from resume text

use crate::processing::section::SectionLocator;
use aho_corasick::AhoCorasick;
use std::collections::BTreeSet;

/// Curated skill vocabulary. Matches are reported in this canonical casing.
const SKILL_VOCABULARY: &[&str] = &[
    // Programming languages
    "Python", "Java", "JavaScript", "C++", "C#", "SQL", "R", "Go", "Ruby", "PHP", "Swift",
    "Kotlin", "TypeScript",
    // Frameworks and libraries
    "React", "Angular", "Vue", "Node.js", "Django", "Flask", "Spring", "TensorFlow", "PyTorch",
    "Pandas", "Numpy", "Express", "Ruby on Rails", "Laravel", "ASP.NET", "React Native",
    "Flutter",
    // Tools and platforms
    "AWS", "Azure", "GCP", "Docker", "Kubernetes", "Git", "Jenkins", "CI/CD", "Agile", "Scrum",
    "JIRA", "Trello", "Linux", "Unix", "Windows", "MacOS", "MySQL", "PostgreSQL", "MongoDB",
    "Oracle",
    // Soft skills
    "Project Management", "Leadership", "Communication", "Teamwork", "Problem Solving",
    "Analytical Skills", "Time Management", "Critical Thinking", "Creativity", "Adaptability",
    "Emotional Intelligence",
    // Specialized areas
    "Machine Learning", "Deep Learning", "Artificial Intelligence", "Data Science",
    "Data Analysis", "Web Development", "Mobile Development", "DevOps", "Cybersecurity",
    "Cloud Computing", "Blockchain", "UI/UX", "Frontend", "Backend", "Full Stack",
    "API Development", "Database Design",
];

pub struct SkillExtractor {
    matcher: AhoCorasick,
    section: SectionLocator,
}

impl Default for SkillExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillExtractor {
    pub fn new() -> Self {
        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(SKILL_VOCABULARY)
            .expect("invalid skill vocabulary");

        Self {
            matcher,
            section: SectionLocator::new(&["skills", "technologies", "expertise"]),
        }
    }

    /// Extract skills from resume text. Vocabulary entries are matched as
    /// whole words anywhere in the text; a labeled skills section contributes
    /// its comma- or semicolon-separated fragments as well.
    pub fn extract(&self, text: &str) -> BTreeSet<String> {
        let mut skills = BTreeSet::new();

        for mat in self.matcher.find_overlapping_iter(text) {
            if is_whole_word(text, mat.start(), mat.end()) {
                skills.insert(SKILL_VOCABULARY[mat.pattern().as_usize()].to_string());
            }
        }

        if let Some(body) = self.section.body(text) {
            for fragment in body.split([',', ';']) {
                let fragment = fragment.trim().trim_matches('-').trim();
                if fragment.chars().count() <= 2 {
                    continue;
                }
                // Known vocabulary entries are kept as-is; short fragments are
                // assumed to be skill-like.
                if SKILL_VOCABULARY.contains(&fragment)
                    || fragment.split_whitespace().count() <= 3
                {
                    skills.insert(fragment.to_string());
                }
            }
        }

        skills
    }
}

/// A match counts as a whole word when neither adjacent character is
/// alphanumeric.
fn is_whole_word(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.map_or(false, |c| c.is_alphanumeric())
        && !after.map_or(false, |c| c.is_alphanumeric())
}
