use std::env;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::ExplanationError;

/// Shown in place of an explanation on any failure.
pub const EXPLANATION_FALLBACK: &str =
    "Sorry, I couldn't generate an explanation right now. Please try again later.";

#[derive(Clone, Debug)]
pub struct ExplanationConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl ExplanationConfig {
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("PREP_AI_API_KEY").ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        let base_url =
            env::var("PREP_AI_BASE_URL").unwrap_or_else(|_| "https://api.openai.com/v1".into());
        let model = env::var("PREP_AI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".into());
        Some(Self {
            base_url,
            api_key,
            model,
        })
    }
}

/// Single-shot wrapper around a chat-completions endpoint.
///
/// One request, one response: no retry, no streaming, no caching. The result
/// lives only in transient view state.
#[derive(Clone)]
pub struct ExplanationService {
    client: Client,
    config: Option<ExplanationConfig>,
}

impl ExplanationService {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(ExplanationConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<ExplanationConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    /// Generate an explanation for a question/answer pair.
    ///
    /// # Errors
    ///
    /// Returns `ExplanationError` when the service is disabled, the request
    /// fails, or the response is empty.
    pub async fn generate(
        &self,
        topic_name: &str,
        question: &str,
        answer: &str,
    ) -> Result<String, ExplanationError> {
        let config = self.config.as_ref().ok_or(ExplanationError::Disabled)?;

        let url = format!("{}/chat/completions", config.base_url.trim_end_matches('/'));
        let payload = ChatRequest {
            model: config.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: build_prompt(topic_name, question, answer),
            }],
            temperature: 0.7,
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(&config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ExplanationError::HttpStatus(response.status()));
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(ExplanationError::EmptyResponse)?;

        Ok(content.trim().to_string())
    }

    /// Like [`generate`](Self::generate), but total: every failure degrades
    /// to the fixed fallback string.
    pub async fn explain(&self, topic_name: &str, question: &str, answer: &str) -> String {
        match self.generate(topic_name, question, answer).await {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(error = %err, "explanation request failed");
                EXPLANATION_FALLBACK.to_string()
            }
        }
    }
}

fn build_prompt(topic_name: &str, question: &str, answer: &str) -> String {
    format!(
        "You are a senior DevOps SRE. Explain this interview concept in detail but simply for a candidate.\n\
         Topic: {topic_name}\n\
         Question: {question}\n\
         Short Answer: {answer}\n\
         \n\
         Please provide:\n\
         1. A deeper explanation of the underlying concepts.\n\
         2. A real-world scenario where this knowledge is applied.\n\
         3. A follow-up tip for the interview.\n\
         Keep it structured with markdown."
    )
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}
