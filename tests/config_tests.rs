use folio::core::config::{
    AppConfig, DEFAULT_AI_BASE_URL, DEFAULT_AI_MODEL, DEFAULT_AI_TEMPERATURE,
    DEFAULT_CONTACT_RECIPIENT, DEFAULT_EMAILJS_BASE_URL,
};
use folio::errors::SiteError;
use std::collections::HashMap;

fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, SiteError> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    AppConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn test_defaults_when_environment_is_empty() {
    let config = config_from(&[]).unwrap();

    assert!(config.ai_api_key.is_none());
    assert_eq!(config.ai_model, DEFAULT_AI_MODEL);
    assert_eq!(config.ai_base_url, DEFAULT_AI_BASE_URL);
    assert_eq!(config.ai_temperature, DEFAULT_AI_TEMPERATURE);
    assert!(config.emailjs.is_none());
    assert_eq!(config.contact_recipient, DEFAULT_CONTACT_RECIPIENT);
}

#[test]
fn test_blank_api_key_counts_as_missing() {
    let config = config_from(&[("AI_API_KEY", "   ")]).unwrap();
    assert!(config.ai_api_key.is_none());
}

#[test]
fn test_reads_all_values() {
    let config = config_from(&[
        ("AI_API_KEY", "secret"),
        ("AI_MODEL", "gpt-test"),
        ("AI_BASE_URL", "http://localhost:8080/v1"),
        ("AI_TEMPERATURE", "0.2"),
        ("AI_TIMEOUT_SECS", "5"),
        ("EMAILJS_SERVICE_ID", "service_x"),
        ("EMAILJS_TEMPLATE_ID", "template_y"),
        ("EMAILJS_PUBLIC_KEY", "pub_z"),
        ("CONTACT_RECIPIENT", "me@example.com"),
    ])
    .unwrap();

    assert_eq!(config.ai_api_key.as_deref(), Some("secret"));
    assert_eq!(config.ai_model, "gpt-test");
    assert_eq!(config.ai_temperature, 0.2);
    assert_eq!(config.ai_timeout_secs, 5);
    assert_eq!(config.contact_recipient, "me@example.com");

    let emailjs = config.emailjs.expect("emailjs configured");
    assert_eq!(emailjs.service_id, "service_x");
    assert_eq!(emailjs.template_id, "template_y");
    assert_eq!(emailjs.public_key, "pub_z");
    assert!(emailjs.private_key.is_none());
    assert_eq!(emailjs.base_url, DEFAULT_EMAILJS_BASE_URL);
}

#[test]
fn test_partial_emailjs_settings_disable_email() {
    let config = config_from(&[
        ("EMAILJS_SERVICE_ID", "service_x"),
        ("EMAILJS_PUBLIC_KEY", "pub_z"),
    ])
    .unwrap();
    assert!(config.emailjs.is_none());
}

#[test]
fn test_rejects_malformed_values() {
    assert!(matches!(
        config_from(&[("AI_TEMPERATURE", "warm")]),
        Err(SiteError::Config(_))
    ));
    assert!(matches!(
        config_from(&[("AI_TEMPERATURE", "3.5")]),
        Err(SiteError::Config(_))
    ));
    assert!(matches!(
        config_from(&[("AI_TIMEOUT_SECS", "-1")]),
        Err(SiteError::Config(_))
    ));
    assert!(matches!(
        config_from(&[("AI_BASE_URL", "not a url")]),
        Err(SiteError::Config(_))
    ));
}
