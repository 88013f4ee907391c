//! Prompt template for the resume analysis request

/// Parameters for prompt template substitution
#[derive(Debug, Clone)]
pub struct PromptParams<'a> {
    pub resume_text: &'a str,
    pub target_job: &'a str,
}

#[derive(Debug, Clone)]
pub struct PromptTemplates {
    pub analysis: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            analysis: ANALYSIS_TEMPLATE.to_string(),
        }
    }
}

impl PromptTemplates {
    pub fn render_analysis(&self, params: &PromptParams) -> String {
        self.analysis
            .replace("{target_job}", params.target_job)
            .replace("{resume}", params.resume_text)
    }
}

const ANALYSIS_TEMPLATE: &str = r#"Analyze this resume for the target job role '{target_job}'.
Resume: {resume}

Please provide:
1. Strengths in the resume relevant to the target role
2. Areas for improvement
3. Missing skills for the target role
4. Wording and formatting suggestions

Format your response as a JSON object with keys: strengths, improvements, missing_skills, wording_suggestions.
Each value should be a list of strings."#;
