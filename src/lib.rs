/// Folio - the dynamic core of Manuel Albanese's consultancy site.
///
/// The page is mostly static content; the moving parts are an AI chat widget
/// and a contact form:
/// 1. The chat widget forwards visitor messages to an LLM session primed with
///    a sales script and renders the replies
/// 2. On request, the conversation is summarized into a quote request and
///    handed to the contact form, which delivers it through EmailJS
///
/// # Architecture
///
/// - `clients` holds the HTTP adapters (OpenAI-compatible completions, EmailJS)
///   behind the `CompletionBackend` and `EmailSender` traits
/// - `ai::AiClient` owns one conversation and never fails: errors come back as
///   user-facing text
/// - `features::summarize` makes isolated one-shot summary calls
/// - `widgets` holds the chat and contact state machines
/// - `site::HostPage` routes chat events into the contact form
///
/// # Example
///
/// ```no_run
/// use folio::core::config::AppConfig;
/// use folio::site::HostPage;
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     folio::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let mut page = HostPage::from_config(&config);
///
///     page.chat().submit("Ho un'agenzia immobiliare, come può aiutarmi l'AI?").await;
///     if let Some(quote) = page.request_quote().await {
///         println!("Prefilled contact message:\n{}", quote.message);
///     }
///
///     page.contact().set_name("Giulia");
///     page.contact().set_email("giulia@agenzia.it");
///     page.contact().submit().await?;
///     Ok(())
/// }
/// ```
pub mod ai;
pub mod clients;
pub mod core;
pub mod errors;
pub mod features;
pub mod prompt;
pub mod site;
pub mod utils;
pub mod widgets;

pub use errors::SiteError;

/// Configure structured logging with JSON output.
///
/// Safe to call more than once; only the first call installs the subscriber.
///
/// # Example
///
/// ```
/// folio::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
