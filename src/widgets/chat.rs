//! Chat widget state machine.
//!
//! The widget owns its message list and at most one in-flight reply plus one
//! in-flight summary. Every request carries a sequence number; a response
//! whose number no longer matches the pending one (because the request was
//! cancelled) is dropped instead of being applied late.

use std::sync::{Mutex, MutexGuard};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::{debug, info, warn};

use crate::ai::AiClient;
use crate::core::models::{
    ChatMessage, MessageId, QuoteRequest, Role, SuggestedPrompt, Transcript,
};
use crate::features::summarize::Summarizer;
use crate::prompt::sanitize_user_message;
use crate::site::content::WELCOME_MESSAGE;

/// Notifications pushed to the host page.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatEvent {
    /// The message list changed; carries the whole conversation.
    TranscriptChanged(Transcript),
    /// The visitor asked to turn the chat into a contact request.
    QuoteReady(QuoteRequest),
}

#[derive(Debug, Default)]
struct ChatState {
    messages: Vec<ChatMessage>,
    input: String,
    next_id: u64,
    seq: u64,
    pending_reply: Option<u64>,
    pending_summary: Option<u64>,
    quote_token: u64,
}

impl ChatState {
    fn push(&mut self, role: Role, text: impl Into<String>) {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        self.messages.push(ChatMessage::new(id, role, text));
    }

    fn next_seq(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    fn has_user_message(&self) -> bool {
        self.messages.iter().any(|m| m.role == Role::User)
    }

    fn transcript(&self) -> Transcript {
        Transcript::from(self.messages.as_slice())
    }
}

pub struct ChatWidget {
    ai: AiClient,
    summarizer: Summarizer,
    state: Mutex<ChatState>,
    events: Option<UnboundedSender<ChatEvent>>,
}

impl ChatWidget {
    /// Widget seeded with the welcome message; summaries go through a
    /// [`Summarizer`] sharing the session's backend.
    pub fn new(ai: AiClient) -> Self {
        let summarizer = ai.summarizer();
        Self::with_summarizer(ai, summarizer)
    }

    pub fn with_summarizer(ai: AiClient, summarizer: Summarizer) -> Self {
        let mut state = ChatState::default();
        state.push(Role::Model, WELCOME_MESSAGE);
        Self {
            ai,
            summarizer,
            state: Mutex::new(state),
            events: None,
        }
    }

    pub fn with_events(mut self, events: UnboundedSender<ChatEvent>) -> Self {
        self.events = Some(events);
        self
    }

    /// Widget plus the receiving end of its event stream.
    pub fn with_channel(ai: AiClient) -> (Self, UnboundedReceiver<ChatEvent>) {
        let (tx, rx) = unbounded_channel();
        (Self::new(ai).with_events(tx), rx)
    }

    pub fn ai(&self) -> &AiClient {
        &self.ai
    }

    fn lock_state(&self) -> MutexGuard<'_, ChatState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn emit(&self, event: ChatEvent) {
        if let Some(tx) = &self.events {
            // Receiver dropped: nothing to notify.
            let _ = tx.send(event);
        }
    }

    fn notify_transcript(&self, state: &ChatState) {
        self.emit(ChatEvent::TranscriptChanged(state.transcript()));
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        self.lock_state().messages.clone()
    }

    pub fn transcript(&self) -> Transcript {
        self.lock_state().transcript()
    }

    pub fn input(&self) -> String {
        self.lock_state().input.clone()
    }

    pub fn set_input(&self, text: &str) {
        self.lock_state().input = text.to_string();
    }

    pub fn is_loading(&self) -> bool {
        self.lock_state().pending_reply.is_some()
    }

    pub fn is_summarizing(&self) -> bool {
        self.lock_state().pending_summary.is_some()
    }

    /// Whether the send button is enabled.
    pub fn can_submit(&self) -> bool {
        let state = self.lock_state();
        state.pending_reply.is_none() && !state.input.trim().is_empty()
    }

    /// Whether the "request a quote" button is enabled.
    pub fn can_request_summary(&self) -> bool {
        let state = self.lock_state();
        state.pending_summary.is_none() && state.has_user_message()
    }

    /// Send one visitor message and wait for the model's reply.
    ///
    /// Returns `false` without touching the message list when the text is
    /// blank or a reply is already pending.
    pub async fn submit(&self, text: &str) -> bool {
        let text = sanitize_user_message(text);
        if text.is_empty() {
            return false;
        }

        let seq = {
            let mut state = self.lock_state();
            if state.pending_reply.is_some() {
                debug!("Ignoring chat submit while a reply is pending");
                return false;
            }
            state.push(Role::User, text.clone());
            state.input.clear();
            let seq = state.next_seq();
            state.pending_reply = Some(seq);
            self.notify_transcript(&state);
            seq
        };

        let reply = self.ai.prepare_reply(&text).await;

        let mut state = self.lock_state();
        if state.pending_reply != Some(seq) {
            // Never shown, so never part of the model's context either.
            info!(seq, "Discarding stale AI reply");
            return true;
        }
        let reply = self.ai.commit(reply);
        state.push(Role::Model, reply);
        state.pending_reply = None;
        self.notify_transcript(&state);
        true
    }

    /// Submit whatever is in the input field.
    pub async fn submit_input(&self) -> bool {
        let text = self.input();
        self.submit(&text).await
    }

    pub async fn send_suggestion(&self, prompt: &SuggestedPrompt) -> bool {
        self.submit(prompt.text).await
    }

    /// Summarize the conversation into a contact message and hand it to the
    /// host as [`ChatEvent::QuoteReady`].
    ///
    /// Needs at least one visitor message. If the summary call fails the
    /// visitor's own messages are used instead, so the result is never empty.
    pub async fn request_summary(&self) -> Option<QuoteRequest> {
        let (seq, transcript) = {
            let mut state = self.lock_state();
            if state.pending_summary.is_some() || !state.has_user_message() {
                return None;
            }
            let seq = state.next_seq();
            state.pending_summary = Some(seq);
            (seq, state.transcript())
        };

        let (body, summarized) = match self.summarizer.summarize(&transcript).await {
            Ok(summary) => (summary, true),
            Err(e) => {
                warn!("Summary failed, falling back to the visitor's messages: {}", e);
                (raw_user_messages(&transcript), false)
            }
        };

        let mut state = self.lock_state();
        if state.pending_summary != Some(seq) {
            info!(seq, "Discarding stale summary");
            return None;
        }
        state.pending_summary = None;
        state.quote_token += 1;

        let quote = QuoteRequest {
            message: compose_quote_message(&body, summarized),
            token: state.quote_token,
            summarized,
        };
        self.emit(ChatEvent::QuoteReady(quote.clone()));
        Some(quote)
    }

    /// Give up on any in-flight reply or summary. Their results are dropped
    /// when they arrive and the widget is immediately interactive again.
    pub fn cancel_pending(&self) {
        let mut state = self.lock_state();
        let had_reply = state.pending_reply.take().is_some();
        let had_summary = state.pending_summary.take().is_some();
        if had_reply || had_summary {
            debug!(had_reply, had_summary, "Cancelled pending chat request");
        }
    }
}

fn raw_user_messages(transcript: &Transcript) -> String {
    transcript.user_texts().collect::<Vec<_>>().join("\n\n")
}

/// Wrap the summary (or the fallback) into the text placed in the contact form.
pub fn compose_quote_message(body: &str, summarized: bool) -> String {
    if summarized {
        format!("Ciao Manuel,\n\n{body}\n\n(Riepilogo generato dalla chat con il tuo assistente AI)")
    } else {
        format!("Ciao Manuel,\n\nEcco cosa ho scritto nella chat con il tuo assistente AI:\n\n{body}")
    }
}
