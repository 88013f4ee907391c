//! Configuration management for the resume analyzer

use crate::error::{Result, ResumeAnalyzerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub llm: LlmConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Credential read from the environment only; never written to disk.
    #[serde(skip)]
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub reasoning_enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm: LlmConfig {
                api_key: None,
                api_url: "https://openrouter.ai/api/v1/chat/completions".to_string(),
                model: "openai/gpt-oss-120b:free".to_string(),
                temperature: 0.3,
                max_tokens: 1000,
                reasoning_enabled: false,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    /// Load configuration from the given file, or from the default location,
    /// creating it on first run. Environment overrides are applied last.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path(),
        };

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| {
                ResumeAnalyzerError::Configuration(format!("Failed to parse config: {}", e))
            })?
        } else if path.is_some() {
            return Err(ResumeAnalyzerError::Configuration(format!(
                "Config file not found: {}",
                config_path.display()
            )));
        } else {
            let config = Self::default();
            config.save()?;
            config
        };

        config.apply_overrides(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ResumeAnalyzerError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-analyzer")
            .join("config.toml")
    }

    /// Apply environment overrides for the model surface. The credential is
    /// only ever sourced this way; its absence is not an error.
    fn apply_overrides<F>(&mut self, var: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = var("OPENROUTER_API_KEY") {
            if !key.trim().is_empty() {
                self.llm.api_key = Some(key);
            }
        }
        if let Some(model) = var("LLM_MODEL") {
            self.llm.model = model;
        }
        if let Some(raw) = var("TEMPERATURE") {
            self.llm.temperature = raw.parse().map_err(|_| {
                ResumeAnalyzerError::Configuration(format!("Invalid TEMPERATURE value: {}", raw))
            })?;
        }
        if let Some(raw) = var("MAX_TOKENS") {
            self.llm.max_tokens = raw.parse().map_err(|_| {
                ResumeAnalyzerError::Configuration(format!("Invalid MAX_TOKENS value: {}", raw))
            })?;
        }
        if let Some(raw) = var("REASONING_ENABLED") {
            self.llm.reasoning_enabled = raw.to_lowercase() == "true";
        }
        Ok(())
    }

    pub fn has_credential(&self) -> bool {
        self.llm
            .api_key
            .as_deref()
            .map(|k| !k.trim().is_empty())
            .unwrap_or(false)
    }
}
