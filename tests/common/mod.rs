#![allow(dead_code)]

use async_trait::async_trait;
use folio::SiteError;
use folio::clients::email_client::{EmailSender, OutgoingEmail};
use folio::clients::llm_client::{CompletionBackend, CompletionRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Completion backend answering from a script, recording every request.
/// Once the script runs out it answers with `fallback`.
pub struct ScriptedBackend {
    script: Mutex<VecDeque<Result<String, String>>>,
    fallback: String,
    requests: Mutex<Vec<CompletionRequest>>,
    gate: Option<Arc<Notify>>,
}

impl ScriptedBackend {
    pub fn new(script: Vec<Result<String, String>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            fallback: "Risposta di prova".to_string(),
            requests: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    pub fn replying(text: &str) -> Self {
        let mut backend = Self::new(Vec::new());
        backend.fallback = text.to_string();
        backend
    }

    /// Every call waits for a permit on `gate` before answering.
    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionBackend for ScriptedBackend {
    async fn generate(&self, request: &CompletionRequest) -> Result<String, SiteError> {
        self.requests.lock().unwrap().push(request.clone());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(Ok(text)) => Ok(text),
            Some(Err(text)) => Err(SiteError::Ai(text)),
            None => Ok(self.fallback.clone()),
        }
    }
}

/// Mailer that records messages and answers with a fixed outcome.
pub struct RecordingMailer {
    outcome: Result<(), String>,
    sent: Mutex<Vec<OutgoingEmail>>,
    gate: Option<Arc<Notify>>,
}

impl RecordingMailer {
    pub fn accepting() -> Self {
        Self {
            outcome: Ok(()),
            sent: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    pub fn failing(provider_text: &str) -> Self {
        Self {
            outcome: Err(provider_text.to_string()),
            sent: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    /// Every send waits for a permit on `gate` before answering.
    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for RecordingMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), SiteError> {
        self.sent.lock().unwrap().push(email.clone());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.outcome.clone().map_err(SiteError::Email)
    }
}
