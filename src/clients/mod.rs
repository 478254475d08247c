//! Client modules for external API interactions

pub mod email_client;
pub mod llm_client;

pub use email_client::{EmailJsClient, EmailSender, OutgoingEmail, UnconfiguredMailer};
pub use llm_client::{CompletionBackend, CompletionRequest, LlmClient};
