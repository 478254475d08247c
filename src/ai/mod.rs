pub mod client;

pub use client::{
    AiClient, CONNECTION_ERROR_REPLY, EMPTY_REPLY, MISSING_KEY_REPLY, PendingReply,
};
