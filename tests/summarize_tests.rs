mod common;

use common::ScriptedBackend;
use folio::core::models::{Transcript, Turn};
use folio::errors::SiteError;
use folio::features::summarize::{SUMMARY_TEMPERATURE, Summarizer};
use folio::prompt::SUMMARY_INSTRUCTION;
use std::sync::Arc;

fn sample_transcript() -> Transcript {
    Transcript::new(vec![
        Turn::user("I need a website"),
        Turn::model("..."),
    ])
}

#[tokio::test]
async fn test_summary_is_cleaned_of_markdown() {
    let backend = Arc::new(ScriptedBackend::replying(
        "# Richiesta\n\n**Settore**: ristorazione\n- sito web\n- prenotazioni\n```\nfine\n```",
    ));
    let summarizer = Summarizer::new(Some(backend));

    let summary = summarizer.summarize(&sample_transcript()).await.unwrap();

    assert!(!summary.contains("**"));
    assert!(!summary.contains("```"));
    assert!(!summary.starts_with('#'));
    assert!(summary.contains("Settore: ristorazione"));
    assert!(summary.contains("• sito web"));
}

#[tokio::test]
async fn test_summary_drops_stacked_heading_markers() {
    let backend = Arc::new(ScriptedBackend::replying("# # # Richiesta\nVorrei un sito"));
    let summarizer = Summarizer::new(Some(backend));

    let summary = summarizer.summarize(&sample_transcript()).await.unwrap();

    assert_eq!(summary, "Richiesta\nVorrei un sito");
}

#[tokio::test]
async fn test_summary_request_is_one_shot() {
    let backend = Arc::new(ScriptedBackend::replying("Vorrei un sito."));
    let summarizer = Summarizer::new(Some(backend.clone()));

    summarizer.summarize(&sample_transcript()).await.unwrap();

    let requests = backend.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].history.is_empty());
    assert_eq!(requests[0].system_instruction.as_deref(), Some(SUMMARY_INSTRUCTION));
    assert_eq!(requests[0].temperature, Some(SUMMARY_TEMPERATURE));
    assert!(requests[0].prompt.contains("[UTENTE]: I need a website\n\n[AI]: ..."));
}

#[tokio::test]
async fn test_backend_failure_is_propagated_without_retry() {
    let backend = Arc::new(ScriptedBackend::new(vec![Err("boom".to_string())]));
    let summarizer = Summarizer::new(Some(backend.clone()));

    let result = summarizer.summarize(&sample_transcript()).await;

    assert!(matches!(result, Err(SiteError::Ai(_))));
    assert_eq!(backend.requests().len(), 1);
}

#[tokio::test]
async fn test_markdown_only_reply_is_an_error() {
    let backend = Arc::new(ScriptedBackend::replying("```\n```"));
    let summarizer = Summarizer::new(Some(backend));

    assert!(summarizer.summarize(&sample_transcript()).await.is_err());
}

#[tokio::test]
async fn test_unconfigured_summarizer_reports_missing_credential() {
    let summarizer = Summarizer::new(None);

    assert!(matches!(
        summarizer.summarize(&sample_transcript()).await,
        Err(SiteError::MissingCredential(_))
    ));
}
