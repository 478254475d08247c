//! Conversational AI session used by the chat widget.
//!
//! `AiClient::complete` never fails: missing credentials and transport errors
//! come back as user-facing text so the widget can render every outcome the
//! same way.

use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{error, warn};

use crate::clients::llm_client::{CompletionBackend, CompletionRequest, LlmClient};
use crate::core::config::AppConfig;
use crate::core::models::Turn;
use crate::features::summarize::Summarizer;
use crate::prompt::SALES_CONTEXT;

pub const MISSING_KEY_REPLY: &str = "⚠️ Configurazione Mancante: API Key non rilevata. \
     Per testare l'AI, configura la variabile d'ambiente AI_API_KEY.";
pub const CONNECTION_ERROR_REPLY: &str =
    "Si è verificato un errore di connessione con il servizio AI. Riprova più tardi.";
pub const EMPTY_REPLY: &str = "Scusa, non ho potuto elaborare una risposta in questo momento.";

/// One conversation with the model, bound to a fixed system instruction and
/// temperature for its whole lifetime.
pub struct AiClient {
    backend: Option<Arc<dyn CompletionBackend>>,
    system_instruction: String,
    temperature: f32,
    history: Mutex<Vec<Turn>>,
}

impl AiClient {
    pub fn new(
        backend: Arc<dyn CompletionBackend>,
        system_instruction: impl Into<String>,
        temperature: f32,
    ) -> Self {
        Self {
            backend: Some(backend),
            system_instruction: system_instruction.into(),
            temperature,
            history: Mutex::new(Vec::new()),
        }
    }

    /// Session with no credential; every call answers with [`MISSING_KEY_REPLY`].
    pub fn unconfigured() -> Self {
        Self {
            backend: None,
            system_instruction: SALES_CONTEXT.to_string(),
            temperature: 0.0,
            history: Mutex::new(Vec::new()),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        match LlmClient::from_config(config) {
            Some(llm) => Self::new(Arc::new(llm), SALES_CONTEXT, config.ai_temperature),
            None => {
                warn!("AI API key missing or blank; chat will run in unconfigured mode");
                Self::unconfigured()
            }
        }
    }

    pub fn is_configured(&self) -> bool {
        self.backend.is_some()
    }

    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    /// Summarizer sharing this session's backend but none of its history.
    pub fn summarizer(&self) -> Summarizer {
        Summarizer::new(self.backend.clone())
    }

    /// Snapshot of the turns exchanged so far.
    pub fn history(&self) -> Vec<Turn> {
        self.lock_history().clone()
    }

    fn lock_history(&self) -> MutexGuard<'_, Vec<Turn>> {
        self.history.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Send `prompt` within the session and return the model's reply, or a
    /// user-facing explanation when that is not possible. The exchange is
    /// recorded in the history right away.
    pub async fn complete(&self, prompt: &str) -> String {
        let reply = self.prepare_reply(prompt).await;
        self.commit(reply)
    }

    /// Like [`AiClient::complete`], but leaves the history untouched until
    /// the caller hands the reply to [`AiClient::commit`]. Dropping the
    /// reply instead forgets the exchange.
    pub async fn prepare_reply(&self, prompt: &str) -> PendingReply {
        let Some(backend) = self.backend.as_ref() else {
            warn!("AI completion requested without an API key");
            return PendingReply::unrecorded(MISSING_KEY_REPLY);
        };

        let request = CompletionRequest {
            system_instruction: Some(self.system_instruction.clone()),
            temperature: Some(self.temperature),
            history: self.history(),
            prompt: prompt.to_string(),
        };

        match backend.generate(&request).await {
            Ok(text) if !text.trim().is_empty() => PendingReply {
                exchange: Some((Turn::user(prompt), Turn::model(text.clone()))),
                text,
            },
            Ok(_) => {
                warn!("AI service returned an empty reply");
                PendingReply::unrecorded(EMPTY_REPLY)
            }
            Err(e) => {
                error!("AI API error: {}", e);
                PendingReply::unrecorded(CONNECTION_ERROR_REPLY)
            }
        }
    }

    /// Record a prepared exchange in the history and return its text.
    pub fn commit(&self, reply: PendingReply) -> String {
        if let Some((user, model)) = reply.exchange {
            let mut history = self.lock_history();
            history.push(user);
            history.push(model);
        }
        reply.text
    }
}

/// Reply produced by [`AiClient::prepare_reply`], not yet part of the session.
#[derive(Debug)]
#[must_use]
pub struct PendingReply {
    text: String,
    exchange: Option<(Turn, Turn)>,
}

impl PendingReply {
    fn unrecorded(text: &str) -> Self {
        Self {
            text: text.to_string(),
            exchange: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether committing this reply would extend the history.
    pub fn is_recordable(&self) -> bool {
        self.exchange.is_some()
    }
}
