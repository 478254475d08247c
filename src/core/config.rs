use std::env;
use url::Url;

use crate::errors::SiteError;

pub const DEFAULT_AI_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_AI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
pub const DEFAULT_AI_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_AI_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_EMAILJS_BASE_URL: &str = "https://api.emailjs.com";
pub const DEFAULT_CONTACT_RECIPIENT: &str = "info@manuelalbanese.it";

#[derive(Debug, Clone)]
pub struct EmailJsSettings {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub private_key: Option<String>,
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub ai_api_key: Option<String>,
    pub ai_model: String,
    pub ai_base_url: String,
    pub ai_temperature: f32,
    pub ai_timeout_secs: u64,
    pub emailjs: Option<EmailJsSettings>,
    pub contact_recipient: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, SiteError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SiteError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let ai_base_url = get("AI_BASE_URL").unwrap_or_else(|| DEFAULT_AI_BASE_URL.to_string());
        Url::parse(&ai_base_url)?;

        let ai_temperature = match get("AI_TEMPERATURE") {
            Some(raw) => {
                let t = raw
                    .parse::<f32>()
                    .map_err(|e| SiteError::Config(format!("AI_TEMPERATURE: {}", e)))?;
                if !(0.0..=2.0).contains(&t) {
                    return Err(SiteError::Config(format!(
                        "AI_TEMPERATURE: {} is outside 0.0..=2.0",
                        t
                    )));
                }
                t
            }
            None => DEFAULT_AI_TEMPERATURE,
        };

        let ai_timeout_secs = match get("AI_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|e| SiteError::Config(format!("AI_TIMEOUT_SECS: {}", e)))?,
            None => DEFAULT_AI_TIMEOUT_SECS,
        };

        let emailjs = match (
            get("EMAILJS_SERVICE_ID"),
            get("EMAILJS_TEMPLATE_ID"),
            get("EMAILJS_PUBLIC_KEY"),
        ) {
            (Some(service_id), Some(template_id), Some(public_key)) => {
                let base_url = get("EMAILJS_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_EMAILJS_BASE_URL.to_string());
                Url::parse(&base_url)?;
                Some(EmailJsSettings {
                    service_id,
                    template_id,
                    public_key,
                    private_key: get("EMAILJS_PRIVATE_KEY"),
                    base_url,
                })
            }
            _ => None,
        };

        Ok(Self {
            ai_api_key: get("AI_API_KEY"),
            ai_model: get("AI_MODEL").unwrap_or_else(|| DEFAULT_AI_MODEL.to_string()),
            ai_base_url,
            ai_temperature,
            ai_timeout_secs,
            emailjs,
            contact_recipient: get("CONTACT_RECIPIENT")
                .unwrap_or_else(|| DEFAULT_CONTACT_RECIPIENT.to_string()),
        })
    }
}
