// ============================================================================
// File: src/llm_client.rs
// Groq API client for LLM interactions
// ============================================================================

use async_trait::async_trait;
use colored::*;
use reqwest::Client;
use std::time::Duration;

use crate::error::GenerateError;
use crate::models::{ChatRequest, ChatResponse, Message};

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// The model used for every generation call. Intentionally fixed.
pub const MODEL: &str = "llama-3.3-70b-versatile";

/// Sampling temperature for every generation call. Intentionally fixed.
pub const TEMPERATURE: f32 = 0.7;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// One-shot completion call. The trait exists so the dispatch logic can be
/// exercised in tests with a fake transport instead of the network.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, GenerateError>;
}

pub struct GroqClient {
    client: Client,
    api_key: String,
    verbose: bool,
}

impl GroqClient {
    pub fn new(api_key: String, verbose: bool) -> Self {
        Self::with_timeout(api_key, DEFAULT_TIMEOUT, verbose)
    }

    pub fn with_timeout(api_key: String, timeout: Duration, verbose: bool) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");
        Self {
            client,
            api_key,
            verbose,
        }
    }
}

#[async_trait]
impl ChatCompletion for GroqClient {
    async fn complete(&self, prompt: &str) -> Result<String, GenerateError> {
        let request = ChatRequest {
            model: MODEL.to_string(),
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: TEMPERATURE,
        };

        if self.verbose {
            println!(
                "  {} Calling model: {} (temp: {})",
                "→".yellow(),
                MODEL.cyan(),
                TEMPERATURE
            );
        }

        let response = self
            .client
            .post(GROQ_API_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| GenerateError::GenerationFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(GenerateError::GenerationFailed(format!(
                "HTTP {}\nResponse: {}",
                status, error_text
            )));
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| GenerateError::GenerationFailed(e.to_string()))?;
        let response_data: ChatResponse = serde_json::from_str(&response_text).map_err(|e| {
            GenerateError::GenerationFailed(format!(
                "Failed to parse response: {}\nRaw response: {}",
                e, response_text
            ))
        })?;

        let choice = response_data.choices.first().ok_or_else(|| {
            GenerateError::GenerationFailed(
                "Model returned no choices. Response may be empty.".to_string(),
            )
        })?;

        let content = choice.message.content.clone().unwrap_or_default();

        if content.is_empty() {
            return Err(GenerateError::GenerationFailed(
                "Model returned empty content.".to_string(),
            ));
        }

        Ok(content)
    }
}
