//! Email delivery through EmailJS.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

use crate::core::config::{AppConfig, EmailJsSettings};
use crate::errors::SiteError;

/// A message from the contact form, addressed to the site owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub reply_to: String,
    pub from_name: String,
    pub body: String,
}

/// "Send email" capability. Failures carry the provider's own text in
/// [`SiteError::Email`].
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), SiteError>;
}

#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    to_email: &'a str,
    from_name: &'a str,
    from_email: &'a str,
    reply_to: &'a str,
    message: &'a str,
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: TemplateParams<'a>,
}

pub struct EmailJsClient {
    http: Client,
    settings: EmailJsSettings,
}

impl EmailJsClient {
    pub fn new(settings: EmailJsSettings) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { http, settings }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/api/v1.0/email/send",
            self.settings.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl EmailSender for EmailJsClient {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), SiteError> {
        let request = SendRequest {
            service_id: &self.settings.service_id,
            template_id: &self.settings.template_id,
            user_id: &self.settings.public_key,
            access_token: self.settings.private_key.as_deref(),
            template_params: TemplateParams {
                to_email: &email.to,
                from_name: &email.from_name,
                from_email: &email.reply_to,
                reply_to: &email.reply_to,
                message: &email.body,
            },
        };

        let response = self
            .http
            .post(self.endpoint())
            .json(&request)
            .send()
            .await
            .map_err(|e| SiteError::Email(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| format!("HTTP {}", status));
            error!(%status, "EmailJS rejected the message: {}", error_text);
            return Err(SiteError::Email(error_text));
        }

        info!("Contact email accepted by EmailJS");
        Ok(())
    }
}

/// Stand-in used when EmailJS credentials are missing; every send fails.
pub struct UnconfiguredMailer;

pub const UNCONFIGURED_MAILER_TEXT: &str =
    "Email service not configured: set EMAILJS_SERVICE_ID, EMAILJS_TEMPLATE_ID and EMAILJS_PUBLIC_KEY";

#[async_trait]
impl EmailSender for UnconfiguredMailer {
    async fn send(&self, _email: &OutgoingEmail) -> Result<(), SiteError> {
        Err(SiteError::Email(UNCONFIGURED_MAILER_TEXT.to_string()))
    }
}

/// Real sender when credentials are present, otherwise [`UnconfiguredMailer`].
pub fn mailer_from_config(config: &AppConfig) -> Arc<dyn EmailSender> {
    match &config.emailjs {
        Some(settings) => Arc::new(EmailJsClient::new(settings.clone())),
        None => {
            warn!("EmailJS credentials missing; contact form sends will fail");
            Arc::new(UnconfiguredMailer)
        }
    }
}
