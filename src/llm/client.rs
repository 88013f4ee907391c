//! HTTP client for the chat-completions model endpoint

use crate::config::LlmConfig;
use crate::error::{Result, ResumeAnalyzerError};
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
    reasoning: ReasoningOptions,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ReasoningOptions {
    enabled: bool,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: String,
}

/// Thin wrapper over the chat-completions endpoint. One request per call, no
/// retries; callers decide what a failure means.
pub struct ModelClient {
    http: reqwest::Client,
    config: LlmConfig,
    api_key: String,
}

impl ModelClient {
    pub fn new(config: LlmConfig, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            api_key,
        }
    }

    pub async fn complete(&self, prompt: &str) -> Result<ChatResponse> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            reasoning: ReasoningOptions {
                enabled: self.config.reasoning_enabled,
            },
        };

        debug!("dispatching analysis request to {}", self.config.api_url);
        let response = self
            .http
            .post(&self.config.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ResumeAnalyzerError::ModelApi(format!(
                "request failed with status {}: {}",
                status, body
            )));
        }

        Ok(response.json().await?)
    }
}
