//! Host page: wires the chat widget to the contact form.

pub mod content;

use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::debug;

use crate::ai::AiClient;
use crate::clients::email_client::{EmailSender, mailer_from_config};
use crate::core::config::AppConfig;
use crate::core::models::{QuoteRequest, Transcript};
use crate::widgets::chat::{ChatEvent, ChatWidget};
use crate::widgets::contact::ContactForm;

use content::SectionId;

pub struct HostPage {
    chat: ChatWidget,
    contact: ContactForm,
    events: UnboundedReceiver<ChatEvent>,
    chat_history: Transcript,
    scroll_target: Option<SectionId>,
}

impl HostPage {
    pub fn new(ai: AiClient, mailer: Arc<dyn EmailSender>, recipient: impl Into<String>) -> Self {
        let (chat, events) = ChatWidget::with_channel(ai);
        Self {
            chat,
            contact: ContactForm::new(mailer, recipient),
            events,
            chat_history: Transcript::default(),
            scroll_target: None,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            AiClient::from_config(config),
            mailer_from_config(config),
            config.contact_recipient.clone(),
        )
    }

    pub fn chat(&self) -> &ChatWidget {
        &self.chat
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    /// Latest conversation reported by the chat widget.
    pub fn chat_history(&self) -> &Transcript {
        &self.chat_history
    }

    /// Section the renderer should scroll to next, if any. Reading it clears it.
    pub fn take_scroll_target(&mut self) -> Option<SectionId> {
        self.scroll_target.take()
    }

    /// Apply every event the chat widget has queued so far. Returns how many
    /// were handled.
    pub fn pump_events(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.events.try_recv() {
            handled += 1;
            match event {
                ChatEvent::TranscriptChanged(transcript) => {
                    self.chat_history = transcript;
                }
                ChatEvent::QuoteReady(quote) => self.transfer_quote(&quote),
            }
        }
        handled
    }

    fn transfer_quote(&mut self, quote: &QuoteRequest) {
        debug!(token = quote.token, summarized = quote.summarized, "Prefilling contact form");
        self.contact.apply_prefill(&quote.message, quote.token);
        self.scroll_target = Some(SectionId::Contact);
    }

    /// Ask the widget for a quote and move it into the contact form.
    pub async fn request_quote(&mut self) -> Option<QuoteRequest> {
        let quote = self.chat.request_summary().await;
        self.pump_events();
        quote
    }
}
