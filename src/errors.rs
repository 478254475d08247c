use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Missing credential: {0}")]
    MissingCredential(String),

    #[error("Failed to access AI service: {0}")]
    Ai(String),

    #[error("Failed to send HTTP request: {0}")]
    Http(String),

    #[error("Failed to deliver email: {0}")]
    Email(String),

    #[error("Invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("A request is already in flight")]
    InFlight,
}

impl From<reqwest::Error> for SiteError {
    fn from(error: reqwest::Error) -> Self {
        SiteError::Http(error.to_string())
    }
}

impl From<serde_json::Error> for SiteError {
    fn from(error: serde_json::Error) -> Self {
        SiteError::Ai(format!("Failed to parse response: {}", error))
    }
}

impl From<url::ParseError> for SiteError {
    fn from(error: url::ParseError) -> Self {
        SiteError::Config(format!("invalid URL: {}", error))
    }
}
