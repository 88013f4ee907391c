//! Model-backed resume analysis with deterministic fallbacks

use crate::config::LlmConfig;
use crate::error::{Result, ResumeAnalyzerError};
use crate::llm::client::ModelClient;
use crate::llm::prompts::{PromptParams, PromptTemplates};
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// The four feedback lists the analysis always produces. All fields are
/// required; a model response missing any of them fails validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub missing_skills: Vec<String>,
    pub wording_suggestions: Vec<String>,
}

/// How the result was obtained. StaticFallback means no credential was
/// configured and no call was attempted; DegradedFallback means the call was
/// attempted but failed or returned an unusable payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AnalysisSource {
    Model,
    StaticFallback,
    DegradedFallback,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisOutcome {
    pub source: AnalysisSource,
    pub result: AnalysisResult,
}

pub struct LLMAnalyzer {
    config: LlmConfig,
    templates: PromptTemplates,
}

impl LLMAnalyzer {
    pub fn new(config: LlmConfig) -> Self {
        Self {
            config,
            templates: PromptTemplates::default(),
        }
    }

    /// Analyze a resume against a target job role. Total: every path returns
    /// a fully-populated outcome, and exactly one model call is attempted at
    /// most.
    pub async fn analyze(&self, resume_text: &str, target_job: &str) -> AnalysisOutcome {
        let api_key = match self.config.api_key.as_deref().filter(|k| !k.trim().is_empty()) {
            Some(key) => key.to_string(),
            None => {
                info!("no API credential configured, returning illustrative analysis");
                return static_fallback();
            }
        };

        let prompt = self.templates.render_analysis(&PromptParams {
            resume_text,
            target_job,
        });

        let client = ModelClient::new(self.config.clone(), api_key);
        match self.request_analysis(&client, &prompt).await {
            Ok(result) => AnalysisOutcome {
                source: AnalysisSource::Model,
                result,
            },
            Err(e) => {
                warn!("model analysis failed: {}", e);
                degraded_fallback()
            }
        }
    }

    async fn request_analysis(&self, client: &ModelClient, prompt: &str) -> Result<AnalysisResult> {
        let response = client.complete(prompt).await?;

        let choice = response
            .choices
            .first()
            .ok_or_else(|| ResumeAnalyzerError::ModelApi("no completion choices".to_string()))?;

        parse_analysis(&choice.message.content)
    }
}

/// Parse the model's message content as a strict `AnalysisResult`, tolerating
/// markdown code fences around the JSON.
pub fn parse_analysis(content: &str) -> Result<AnalysisResult> {
    Ok(serde_json::from_str(strip_json_fences(content))?)
}

fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let stripped = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
        .unwrap_or(text);
    stripped
        .trim_start()
        .strip_suffix("```")
        .unwrap_or(stripped)
        .trim()
}

/// Illustrative result returned when no credential is configured.
pub fn static_fallback() -> AnalysisOutcome {
    AnalysisOutcome {
        source: AnalysisSource::StaticFallback,
        result: AnalysisResult {
            strengths: vec![
                "Strong technical background in Python and data science".to_string(),
                "Relevant experience in machine learning projects".to_string(),
                "Good academic background from reputable institution".to_string(),
            ],
            improvements: vec![
                "Add more specific metrics to quantify achievements".to_string(),
                "Include more technical keywords related to target role".to_string(),
                "Improve formatting for better readability".to_string(),
            ],
            missing_skills: vec![
                "Cloud platforms (AWS/Azure)".to_string(),
                "Containerization (Docker/Kubernetes)".to_string(),
                "CI/CD pipelines".to_string(),
            ],
            wording_suggestions: vec![
                "Replace 'responsible for' with action verbs like 'developed', 'implemented', 'led'"
                    .to_string(),
                "Quantify achievements with specific numbers and percentages".to_string(),
                "Use industry-specific keywords that match job descriptions".to_string(),
            ],
        },
    }
}

/// Generic result returned when the model call fails or its payload cannot be
/// trusted. Distinct wording from the static fallback.
pub fn degraded_fallback() -> AnalysisOutcome {
    AnalysisOutcome {
        source: AnalysisSource::DegradedFallback,
        result: AnalysisResult {
            strengths: vec!["Resume contains relevant technical skills".to_string()],
            improvements: vec![
                "Consider adding more specific examples of achievements".to_string()
            ],
            missing_skills: vec![
                "Additional skills may be needed for your target role".to_string()
            ],
            wording_suggestions: vec!["Use action verbs to start each bullet point".to_string()],
        },
    }
}
