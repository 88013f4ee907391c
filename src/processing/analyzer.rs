//! Aggregation of extractor output and model analysis into one report

use crate::config::Config;
use crate::llm::analyzer::{AnalysisOutcome, LLMAnalyzer};
use crate::processing::education::EducationExtractor;
use crate::processing::experience::ExperienceExtractor;
use crate::processing::skills::SkillExtractor;
use crate::processing::text_processor::{self, TextStats};
use chrono::{DateTime, Utc};
use log::info;
use serde::Serialize;
use std::collections::BTreeSet;

/// Everything one analysis invocation produces. Nothing is retained between
/// invocations; the caller owns the report.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeReport {
    pub target_job: String,
    pub skills: BTreeSet<String>,
    pub education: BTreeSet<String>,
    pub experience: BTreeSet<String>,
    pub analysis: AnalysisOutcome,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub model: String,
    pub analyzer_version: String,
    pub stats: TextStats,
}

pub struct AnalysisEngine {
    skills: SkillExtractor,
    education: EducationExtractor,
    experience: ExperienceExtractor,
    llm: LLMAnalyzer,
    model: String,
}

impl AnalysisEngine {
    pub fn new(config: &Config) -> Self {
        Self {
            skills: SkillExtractor::new(),
            education: EducationExtractor::new(),
            experience: ExperienceExtractor::new(),
            llm: LLMAnalyzer::new(config.llm.clone()),
            model: config.llm.model.clone(),
        }
    }

    /// Run the three extractors and the model analysis over one resume.
    /// Extraction cannot fail; the analysis path degrades to a fixed result
    /// instead of erroring, so the whole call is total.
    pub async fn analyze(&self, resume_text: &str, target_job: &str) -> ResumeReport {
        let text = text_processor::normalize(resume_text);

        let skills = self.skills.extract(&text);
        let education = self.education.extract(&text);
        let experience = self.experience.extract(&text);
        info!(
            "extracted {} skills, {} education entries, {} experience entries",
            skills.len(),
            education.len(),
            experience.len()
        );

        let analysis = self.llm.analyze(&text, target_job).await;

        ResumeReport {
            target_job: target_job.to_string(),
            skills,
            education,
            experience,
            analysis,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                model: self.model.clone(),
                analyzer_version: env!("CARGO_PKG_VERSION").to_string(),
                stats: text_processor::stats(&text),
            },
        }
    }
}
