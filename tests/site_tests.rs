mod common;

use common::{RecordingMailer, ScriptedBackend};
use folio::ai::AiClient;
use folio::core::config::AppConfig;
use folio::core::models::FormStatus;
use folio::prompt::SALES_CONTEXT;
use folio::site::HostPage;
use folio::site::content::{
    NAV_LINKS, PAGE_SECTIONS, SERVICES, SUGGESTED_PROMPTS, SectionId, site_content,
};
use std::sync::Arc;

fn page_with(backend: Arc<ScriptedBackend>, mailer: Arc<RecordingMailer>) -> HostPage {
    HostPage::new(
        AiClient::new(backend, SALES_CONTEXT, 0.7),
        mailer,
        "owner@example.com",
    )
}

#[tokio::test]
async fn test_quote_prefills_contact_form_and_scrolls() {
    let backend = Arc::new(ScriptedBackend::new(vec![
        Ok("Posso aiutarti.".to_string()),
        Ok("Vorrei un chatbot per il mio hotel.".to_string()),
    ]));
    let mut page = page_with(backend, Arc::new(RecordingMailer::accepting()));

    page.chat().submit("Ho un hotel").await;
    let quote = page.request_quote().await.unwrap();

    assert_eq!(page.contact().fields().message, quote.message);
    assert!(quote.message.contains("Vorrei un chatbot per il mio hotel."));
    assert_eq!(page.take_scroll_target(), Some(SectionId::Contact));
    assert_eq!(page.take_scroll_target(), None);
    assert_eq!(page.chat_history().len(), 3);
}

#[tokio::test]
async fn test_later_quote_overwrites_visitor_edits() {
    let backend = Arc::new(ScriptedBackend::new(vec![
        Ok("Risposta".to_string()),
        Ok("Primo riepilogo".to_string()),
        Ok("Secondo riepilogo".to_string()),
    ]));
    let mut page = page_with(backend, Arc::new(RecordingMailer::accepting()));

    page.chat().submit("Ciao").await;
    page.request_quote().await;
    page.contact().set_message("Ho cambiato idea");
    page.request_quote().await;

    let message = page.contact().fields().message;
    assert!(message.contains("Secondo riepilogo"));
    assert!(!message.contains("Ho cambiato idea"));
}

#[tokio::test]
async fn test_end_to_end_chat_to_email() {
    let backend = Arc::new(ScriptedBackend::new(vec![
        Ok("Certo.".to_string()),
        Ok("Vorrei automatizzare i report mensili.".to_string()),
    ]));
    let mailer = Arc::new(RecordingMailer::accepting());
    let mut page = page_with(backend, mailer.clone());

    page.chat().submit("Faccio report a mano ogni mese").await;
    page.request_quote().await.unwrap();
    page.contact().set_name("Paolo");
    page.contact().set_email("paolo@studio.it");
    page.contact().submit().await.unwrap();

    assert_eq!(page.contact().status(), FormStatus::Success);
    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].body.contains("Vorrei automatizzare i report mensili."));
}

#[test]
fn test_from_config_without_credentials() {
    let config = AppConfig::from_lookup(|_| None).unwrap();
    let page = HostPage::from_config(&config);

    assert!(!page.chat().ai().is_configured());
    assert_eq!(page.contact().recipient(), config.contact_recipient);
}

#[test]
fn test_site_content_serializes_for_renderer() {
    let value = serde_json::to_value(site_content()).unwrap();

    assert_eq!(value["sections"][5], "ai-demo");
    assert_eq!(value["nav_links"][0]["target"], "about");
    assert_eq!(
        value["services"].as_array().unwrap().len(),
        SERVICES.len()
    );
    assert_eq!(
        value["suggested_prompts"][0]["text"],
        SUGGESTED_PROMPTS[0].text
    );
    assert!(value["certifications"][0].get("url").is_none());
}

#[test]
fn test_every_nav_link_targets_a_page_section() {
    for link in NAV_LINKS {
        assert!(PAGE_SECTIONS.contains(&link.target), "{}", link.label);
    }
    assert_eq!(SectionId::Demo.anchor(), "ai-demo");
}
