//! Contact form: field state, validation and submission to the email
//! capability.

use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{error, info};

use crate::clients::email_client::{EmailSender, OutgoingEmail};
use crate::core::models::{ContactFields, FormStatus};
use crate::errors::SiteError;
use crate::utils::validation::{is_present, is_valid_email};

pub const INVALID_EMAIL_MESSAGE: &str =
    "Inserisci un indirizzo email valido (es. nome@azienda.com)";
pub const MISSING_NAME_MESSAGE: &str = "Inserisci il tuo nome";
pub const MISSING_MESSAGE_MESSAGE: &str = "Descrivi brevemente il tuo progetto";
pub const RECIPIENT_HINT_MESSAGE: &str = "Invio non riuscito: il servizio email non ha un \
     destinatario configurato. Imposta il campo \"To Email\" del template EmailJS su {{to_email}}.";

/// Provider text that identifies a template with no recipient.
const EMPTY_RECIPIENT_MARKER: &str = "recipients address is empty";

/// User-facing text for a failed send. The provider's own text is kept
/// verbatim, except for the one misconfiguration we can explain.
pub fn describe_send_failure(provider_text: &str) -> String {
    if provider_text
        .to_lowercase()
        .contains(EMPTY_RECIPIENT_MARKER)
    {
        RECIPIENT_HINT_MESSAGE.to_string()
    } else {
        format!("Si è verificato un errore durante l'invio: {provider_text}. Riprova.")
    }
}

/// Field-level validation messages, one slot per input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

#[derive(Debug, Default)]
struct FormState {
    fields: ContactFields,
    status: FormStatus,
    field_errors: FieldErrors,
    send_error: Option<String>,
    prefill_token: Option<u64>,
}

pub struct ContactForm {
    sender: Arc<dyn EmailSender>,
    recipient: String,
    state: Mutex<FormState>,
}

impl ContactForm {
    pub fn new(sender: Arc<dyn EmailSender>, recipient: impl Into<String>) -> Self {
        Self {
            sender,
            recipient: recipient.into(),
            state: Mutex::new(FormState::default()),
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn fields(&self) -> ContactFields {
        self.lock_state().fields.clone()
    }

    pub fn status(&self) -> FormStatus {
        self.lock_state().status
    }

    pub fn field_errors(&self) -> FieldErrors {
        self.lock_state().field_errors.clone()
    }

    /// Text shown under the form when the last send failed.
    pub fn send_error(&self) -> Option<String> {
        self.lock_state().send_error.clone()
    }

    pub fn set_name(&self, name: &str) {
        let mut state = self.lock_state();
        state.fields.name = name.to_string();
        state.field_errors.name = None;
    }

    /// Editing the address clears its error right away.
    pub fn set_email(&self, email: &str) {
        let mut state = self.lock_state();
        state.fields.email = email.to_string();
        state.field_errors.email = None;
    }

    pub fn set_message(&self, message: &str) {
        let mut state = self.lock_state();
        state.fields.message = message.to_string();
        state.field_errors.message = None;
    }

    /// Seed the message field from outside. Applied whenever `token` differs
    /// from the last one seen, replacing whatever the visitor typed.
    pub fn apply_prefill(&self, message: &str, token: u64) -> bool {
        let mut state = self.lock_state();
        if state.prefill_token == Some(token) {
            return false;
        }
        state.prefill_token = Some(token);
        state.fields.message = message.to_string();
        state.field_errors.message = None;
        true
    }

    fn validate(fields: &ContactFields) -> FieldErrors {
        FieldErrors {
            name: (!is_present(&fields.name)).then(|| MISSING_NAME_MESSAGE.to_string()),
            email: (!is_valid_email(&fields.email)).then(|| INVALID_EMAIL_MESSAGE.to_string()),
            message: (!is_present(&fields.message))
                .then(|| MISSING_MESSAGE_MESSAGE.to_string()),
        }
    }

    /// Validate and send the form.
    ///
    /// Validation failures are returned before any network call. A send
    /// failure moves the form to [`FormStatus::Error`] and is also returned.
    pub async fn submit(&self) -> Result<(), SiteError> {
        let email = {
            let mut state = self.lock_state();
            if state.status == FormStatus::Sending {
                return Err(SiteError::InFlight);
            }

            let errors = Self::validate(&state.fields);
            if !errors.is_empty() {
                let failure = first_field_error(&errors);
                state.field_errors = errors;
                return Err(failure);
            }

            state.status = FormStatus::Sending;
            state.send_error = None;
            OutgoingEmail {
                to: self.recipient.clone(),
                reply_to: state.fields.email.trim().to_string(),
                from_name: state.fields.name.trim().to_string(),
                body: state.fields.message.clone(),
            }
        };

        let result = self.sender.send(&email).await;

        let mut state = self.lock_state();
        match result {
            Ok(()) => {
                info!("Contact form delivered");
                state.fields = ContactFields::default();
                state.field_errors = FieldErrors::default();
                state.status = FormStatus::Success;
                Ok(())
            }
            Err(e) => {
                let provider_text = match &e {
                    SiteError::Email(text) => text.clone(),
                    other => other.to_string(),
                };
                error!("Contact form delivery failed: {}", provider_text);
                state.send_error = Some(describe_send_failure(&provider_text));
                state.status = FormStatus::Error;
                Err(e)
            }
        }
    }

    /// "Send another message": back to an empty, idle form.
    pub fn send_another(&self) {
        let mut state = self.lock_state();
        if state.status == FormStatus::Sending {
            return;
        }
        state.fields = ContactFields::default();
        state.field_errors = FieldErrors::default();
        state.send_error = None;
        state.status = FormStatus::Idle;
    }
}

fn first_field_error(errors: &FieldErrors) -> SiteError {
    let (field, message) = if let Some(m) = &errors.email {
        ("email", m)
    } else if let Some(m) = &errors.name {
        ("name", m)
    } else if let Some(m) = &errors.message {
        ("message", m)
    } else {
        return SiteError::Validation {
            field: "form",
            message: String::new(),
        };
    };
    SiteError::Validation {
        field,
        message: message.clone(),
    }
}
