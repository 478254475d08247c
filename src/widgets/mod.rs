pub mod chat;
pub mod contact;

pub use chat::{ChatEvent, ChatWidget};
pub use contact::{ContactForm, FieldErrors};
