use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Author of a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    /// Tag used when a transcript is flattened to text.
    pub fn transcript_label(self) -> &'static str {
        match self {
            Role::User => "UTENTE",
            Role::Model => "AI",
        }
    }
}

/// Identifier of a chat message. Ids are issued by a counter, so ordering
/// by id is creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MessageId(pub u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "msg-{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: MessageId,
    pub role: Role,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(id: MessageId, role: Role, text: impl Into<String>) -> Self {
        Self {
            id,
            role,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// One role-tagged turn of a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
        }
    }
}

/// Ordered list of turns exchanged in the chat widget.
///
/// Kept structured until it reaches a text boundary (a prompt or a log line),
/// where [`Transcript::to_plain_text`] flattens it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    pub turns: Vec<Turn>,
}

impl Transcript {
    pub fn new(turns: Vec<Turn>) -> Self {
        Self { turns }
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn has_user_turn(&self) -> bool {
        self.turns.iter().any(|t| t.role == Role::User)
    }

    /// Texts written by the user, in order.
    pub fn user_texts(&self) -> impl Iterator<Item = &str> {
        self.turns
            .iter()
            .filter(|t| t.role == Role::User)
            .map(|t| t.text.as_str())
    }

    /// `[UTENTE]: ...` / `[AI]: ...` blocks separated by a blank line.
    pub fn to_plain_text(&self) -> String {
        self.turns
            .iter()
            .map(|t| format!("[{}]: {}", t.role.transcript_label(), t.text))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl From<&[ChatMessage]> for Transcript {
    fn from(messages: &[ChatMessage]) -> Self {
        Self {
            turns: messages
                .iter()
                .map(|m| Turn {
                    role: m.role,
                    text: m.text.clone(),
                })
                .collect(),
        }
    }
}

/// Message handed from the chat widget to the host page when the visitor asks
/// for a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteRequest {
    pub message: String,
    /// Strictly increasing per widget; the contact form keys prefills on it.
    pub token: u64,
    /// `false` when the summary call failed and `message` carries the raw
    /// user messages instead.
    pub summarized: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

/// Canned question offered next to the chat input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SuggestedPrompt {
    pub text: &'static str,
    pub label: &'static str,
}
