//! LLM (OpenAI-compatible) API client module
//!
//! Encapsulates the HTTP side of chat completions. Session state lives in
//! [`crate::ai::AiClient`]; this layer is stateless.

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, info};

use crate::core::config::AppConfig;
use crate::core::models::{Role, Turn};
use crate::errors::SiteError;

/// Everything one completion call needs.
#[derive(Debug, Clone, Default)]
pub struct CompletionRequest {
    pub system_instruction: Option<String>,
    pub temperature: Option<f32>,
    /// Earlier turns, oldest first.
    pub history: Vec<Turn>,
    pub prompt: String,
}

/// Text-in, text-out completion capability.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn generate(&self, request: &CompletionRequest) -> Result<String, SiteError>;
}

fn estimate_tokens(text: &str) -> usize {
    text.chars().count() / 4 + 1
}

/// Client for any endpoint speaking the OpenAI chat-completions dialect.
pub struct LlmClient {
    http: Client,
    api_key: String,
    base_url: String,
    model_name: String,
}

impl LlmClient {
    pub fn new(api_key: String, base_url: String, model_name: String, timeout: Duration) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            http,
            api_key,
            base_url,
            model_name,
        }
    }

    /// `None` when no API key is configured.
    pub fn from_config(config: &AppConfig) -> Option<Self> {
        let api_key = config.ai_api_key.clone()?;
        Some(Self::new(
            api_key,
            config.ai_base_url.clone(),
            config.ai_model.clone(),
            Duration::from_secs(config.ai_timeout_secs),
        ))
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    fn endpoint(&self) -> String {
        if self.base_url.ends_with("/chat/completions") {
            self.base_url.clone()
        } else {
            format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
        }
    }

    pub fn build_messages(&self, request: &CompletionRequest) -> Vec<ChatCompletionMessage> {
        let mut chat = Vec::with_capacity(request.history.len() + 2);

        if let Some(system) = request
            .system_instruction
            .as_deref()
            .filter(|s| !s.trim().is_empty())
        {
            chat.push(ChatCompletionMessage {
                role: MessageRole::system,
                content: Content::Text(system.to_string()),
                name: None,
                tool_calls: None,
                tool_call_id: None,
            });
        }

        for turn in &request.history {
            let role = match turn.role {
                Role::User => MessageRole::user,
                Role::Model => MessageRole::assistant,
            };
            chat.push(ChatCompletionMessage {
                role,
                content: Content::Text(turn.text.clone()),
                name: None,
                tool_calls: None,
                tool_call_id: None,
            });
        }

        chat.push(ChatCompletionMessage {
            role: MessageRole::user,
            content: Content::Text(request.prompt.clone()),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        });

        chat
    }

    pub fn build_request_body(&self, request: &CompletionRequest) -> Value {
        let messages: Vec<Value> = self
            .build_messages(request)
            .iter()
            .map(|msg| {
                let role_str = match msg.role {
                    MessageRole::system => "system",
                    MessageRole::user => "user",
                    MessageRole::assistant => "assistant",
                    MessageRole::function => "function",
                    MessageRole::tool => "tool",
                };
                let content_val = match &msg.content {
                    Content::Text(text) => json!(text),
                    _ => json!(""),
                };
                json!({
                    "role": role_str,
                    "content": content_val
                })
            })
            .collect();

        let mut body = json!({
            "model": self.model_name,
            "messages": messages,
        });
        if let Some(t) = request.temperature {
            body["temperature"] = json!(t);
        }
        body
    }
}

/// Pull the reply text out of a chat-completions response.
pub fn extract_reply_text(response_json: &Value) -> Option<String> {
    let content = response_json
        .get("choices")
        .and_then(|c| c.as_array())
        .and_then(|c| c.first())
        .and_then(|c| c.get("message"))
        .and_then(|m| m.get("content"))?;

    match content {
        Value::String(s) => Some(s.clone()),
        // Some providers return content parts instead of a flat string.
        Value::Array(parts) => {
            let collected: Vec<&str> = parts
                .iter()
                .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
                .collect();
            if collected.is_empty() {
                None
            } else {
                Some(collected.join("\n"))
            }
        }
        _ => None,
    }
}

#[async_trait]
impl CompletionBackend for LlmClient {
    async fn generate(&self, request: &CompletionRequest) -> Result<String, SiteError> {
        let body = self.build_request_body(request);

        #[cfg(feature = "debug-logs")]
        debug!("Completion request body:\n{}", body);

        info!(
            model = %self.model_name,
            history_turns = request.history.len(),
            estimated_input_tokens = estimate_tokens(&request.prompt),
            "Sending completion request"
        );

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| SiteError::Http(format!("AI API request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SiteError::Ai(format!("{}: {}", status, error_text)));
        }

        let response_json: Value = response.json().await?;
        let text = extract_reply_text(&response_json)
            .ok_or_else(|| SiteError::Ai("No text in response".to_string()))?;

        debug!(reply_chars = text.chars().count(), "Completion received");
        Ok(text)
    }
}
