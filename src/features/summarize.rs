use std::sync::Arc;
use tracing::info;

use crate::clients::llm_client::{CompletionBackend, CompletionRequest};
use crate::core::models::Transcript;
use crate::errors::SiteError;
use crate::prompt::{SUMMARY_INSTRUCTION, build_summary_prompt};
use crate::utils::markdown::strip_markdown;

/// Temperature for summaries; low so the quote text stays factual.
pub const SUMMARY_TEMPERATURE: f32 = 0.3;

/// Condenses a chat transcript into a plain-text quote request.
///
/// Each call is a standalone completion with no history, so asking for a
/// summary leaves the chat session untouched. One attempt, no retries.
#[derive(Clone)]
pub struct Summarizer {
    backend: Option<Arc<dyn CompletionBackend>>,
}

impl Summarizer {
    pub fn new(backend: Option<Arc<dyn CompletionBackend>>) -> Self {
        Self { backend }
    }

    pub async fn summarize(&self, transcript: &Transcript) -> Result<String, SiteError> {
        let backend = self
            .backend
            .as_ref()
            .ok_or_else(|| SiteError::MissingCredential("AI_API_KEY".to_string()))?;

        let request = CompletionRequest {
            system_instruction: Some(SUMMARY_INSTRUCTION.to_string()),
            temperature: Some(SUMMARY_TEMPERATURE),
            history: Vec::new(),
            prompt: build_summary_prompt(transcript),
        };

        info!(turns = transcript.len(), "Generating chat summary");

        let raw = backend.generate(&request).await?;
        let cleaned = strip_markdown(&raw);
        if cleaned.is_empty() {
            return Err(SiteError::Ai("Summary came back empty".to_string()));
        }
        Ok(cleaned)
    }
}
